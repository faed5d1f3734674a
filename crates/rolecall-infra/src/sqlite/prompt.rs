//! SQLite prompt repository implementation.
//!
//! Implements `PromptRepository` from `rolecall-core` using sqlx with split
//! read/write pools.

use rolecall_core::repository::prompt::PromptRepository;
use rolecall_types::error::RepositoryError;
use rolecall_types::prompt::{GuildId, Prompt, PromptDraft, PromptId};
use sqlx::Row;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `PromptRepository`.
pub struct SqlitePromptRepository {
    pool: DatabasePool,
}

impl SqlitePromptRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

/// Internal row type for mapping SQLite rows to domain Prompt.
struct PromptRow {
    id: i64,
    guild_id: String,
    title: String,
    description: Option<String>,
    image_url: Option<String>,
    color: Option<String>,
    use_buttons: i64,
}

impl PromptRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            guild_id: row.try_get("guild_id")?,
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            image_url: row.try_get("image_url")?,
            color: row.try_get("color")?,
            use_buttons: row.try_get("use_buttons")?,
        })
    }

    fn into_prompt(self) -> Result<Prompt, RepositoryError> {
        let guild_id = self
            .guild_id
            .parse::<GuildId>()
            .map_err(|e| RepositoryError::Query(format!("invalid guild id: {e}")))?;

        Ok(Prompt {
            id: PromptId(self.id),
            guild_id,
            title: self.title,
            description: self.description,
            image_url: self.image_url,
            color: self.color,
            use_buttons: self.use_buttons != 0,
        })
    }
}

impl PromptRepository for SqlitePromptRepository {
    async fn find_by_guild(&self, guild_id: GuildId) -> Result<Vec<Prompt>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT id, guild_id, title, description, image_url, color, use_buttons
             FROM prompts WHERE guild_id = ? ORDER BY id",
        )
        .bind(guild_id.to_string())
        .fetch_all(&self.pool.reader)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        rows.iter()
            .map(|row| {
                PromptRow::from_row(row)
                    .map_err(|e| RepositoryError::Query(e.to_string()))?
                    .into_prompt()
            })
            .collect()
    }

    async fn create(
        &self,
        guild_id: GuildId,
        draft: &PromptDraft,
    ) -> Result<Prompt, RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO prompts (guild_id, title, description, image_url, color, use_buttons)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(guild_id.to_string())
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(&draft.image_url)
        .bind(&draft.color)
        .bind(draft.use_buttons as i64)
        .execute(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(Prompt {
            id: PromptId(result.last_insert_rowid()),
            guild_id,
            title: draft.title.clone(),
            description: draft.description.clone(),
            image_url: draft.image_url.clone(),
            color: draft.color.clone(),
            use_buttons: draft.use_buttons,
        })
    }

    async fn update(&self, id: PromptId, draft: &PromptDraft) -> Result<Prompt, RepositoryError> {
        let result = sqlx::query(
            "UPDATE prompts SET title = ?, description = ?, image_url = ?, color = ?, use_buttons = ?
             WHERE id = ?",
        )
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(&draft.image_url)
        .bind(&draft.color)
        .bind(draft.use_buttons as i64)
        .bind(id.0)
        .execute(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        let row = sqlx::query(
            "SELECT id, guild_id, title, description, image_url, color, use_buttons
             FROM prompts WHERE id = ?",
        )
        .bind(id.0)
        .fetch_one(&self.pool.reader)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        PromptRow::from_row(&row)
            .map_err(|e| RepositoryError::Query(e.to_string()))?
            .into_prompt()
    }

    async fn delete(&self, id: PromptId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM prompts WHERE id = ?")
            .bind(id.0)
            .execute(&self.pool.writer)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
