//! Application state wiring the repositories together.
//!
//! AppState holds the concrete repository instances used by both the CLI
//! commands and the HTTP API. The core crate is generic over the
//! repository traits; AppState pins them to the SQLite implementations.

use std::path::PathBuf;
use std::sync::Arc;

use rolecall_infra::sqlite::pool::{DatabasePool, default_data_dir};
use rolecall_infra::sqlite::prompt::SqlitePromptRepository;
use rolecall_infra::sqlite::role::SqlitePromptRoleRepository;

/// Shared application state holding the store handles.
#[derive(Clone)]
pub struct AppState {
    pub prompts: Arc<SqlitePromptRepository>,
    pub prompt_roles: Arc<SqlitePromptRoleRepository>,
    pub data_dir: PathBuf,
    pub db_pool: DatabasePool,
}

impl AppState {
    /// Initialize the application state: connect to the database and wire
    /// the repositories.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = default_data_dir();

        // Ensure data directory exists
        tokio::fs::create_dir_all(&data_dir).await?;

        let db_url = format!(
            "sqlite://{}?mode=rwc",
            data_dir.join("rolecall.db").display()
        );
        let db_pool = DatabasePool::new(&db_url).await?;

        Ok(Self {
            prompts: Arc::new(SqlitePromptRepository::new(db_pool.clone())),
            prompt_roles: Arc::new(SqlitePromptRoleRepository::new(db_pool.clone())),
            data_dir,
            db_pool,
        })
    }
}
