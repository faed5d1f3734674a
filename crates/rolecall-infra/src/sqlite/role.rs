//! SQLite prompt-role repository implementation.
//!
//! Implements `PromptRoleRepository` from `rolecall-core`. Follows the same
//! patterns as `SqlitePromptRepository`: raw queries, private Row structs,
//! split reader/writer pool usage.

use rolecall_core::repository::role::PromptRoleRepository;
use rolecall_types::error::RepositoryError;
use rolecall_types::prompt::{PromptId, PromptRole, RoleId};
use sqlx::Row;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `PromptRoleRepository`.
pub struct SqlitePromptRoleRepository {
    pool: DatabasePool,
}

impl SqlitePromptRoleRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

fn role_from_row(row: &sqlx::sqlite::SqliteRow) -> Result<PromptRole, RepositoryError> {
    let prompt_id: i64 = row
        .try_get("prompt_id")
        .map_err(|e| RepositoryError::Query(e.to_string()))?;
    let role_id: String = row
        .try_get("role_id")
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

    Ok(PromptRole {
        prompt_id: PromptId(prompt_id),
        role_id: role_id
            .parse::<RoleId>()
            .map_err(|e| RepositoryError::Query(format!("invalid role id: {e}")))?,
    })
}

impl PromptRoleRepository for SqlitePromptRoleRepository {
    async fn find_by_prompt(&self, prompt_id: PromptId) -> Result<Vec<PromptRole>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT prompt_id, role_id FROM prompt_roles WHERE prompt_id = ? ORDER BY rowid",
        )
        .bind(prompt_id.0)
        .fetch_all(&self.pool.reader)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        rows.iter().map(role_from_row).collect()
    }

    async fn find(
        &self,
        prompt_id: PromptId,
        role_id: RoleId,
    ) -> Result<Option<PromptRole>, RepositoryError> {
        let row = sqlx::query(
            "SELECT prompt_id, role_id FROM prompt_roles WHERE prompt_id = ? AND role_id = ?",
        )
        .bind(prompt_id.0)
        .bind(role_id.to_string())
        .fetch_optional(&self.pool.reader)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        row.as_ref().map(role_from_row).transpose()
    }

    async fn delete_by_prompt(&self, prompt_id: PromptId) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM prompt_roles WHERE prompt_id = ?")
            .bind(prompt_id.0)
            .execute(&self.pool.writer)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(())
    }

    async fn create_many(
        &self,
        prompt_id: PromptId,
        role_ids: &[RoleId],
    ) -> Result<(), RepositoryError> {
        for role_id in role_ids {
            let result = sqlx::query("INSERT INTO prompt_roles (prompt_id, role_id) VALUES (?, ?)")
                .bind(prompt_id.0)
                .bind(role_id.to_string())
                .execute(&self.pool.writer)
                .await;

            match result {
                Ok(_) => {}
                Err(sqlx::Error::Database(db_err)) if db_err.message().contains("UNIQUE") => {
                    return Err(RepositoryError::Conflict(format!(
                        "role {role_id} already attached to prompt {prompt_id}"
                    )));
                }
                Err(e) => return Err(RepositoryError::Query(e.to_string())),
            }
        }

        Ok(())
    }
}
