use thiserror::Error;

use crate::prompt::{PromptId, RoleId};

/// Errors from repository operations (used by trait definitions in rolecall-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    #[error("entity not found")]
    NotFound,

    #[error("conflict: {0}")]
    Conflict(String),
}

/// Errors surfaced by the chat-platform adapter.
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("platform api error: {0}")]
    Api(String),
}

/// Validation failures for modal form submissions.
///
/// These are local to one submission: the user gets a clear message and no
/// state changes.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("field '{0}' is required")]
    MissingRequiredField(String),

    #[error("'{0}' is not a valid embed color (expected #rrggbb)")]
    InvalidColor(String),
}

/// Errors from interaction handlers.
#[derive(Debug, Error)]
pub enum InteractionError {
    /// A toggle button referenced a (prompt, role) pair with no backing
    /// store row: a forged custom ID or a bookkeeping bug. Propagates
    /// un-caught to the platform's top-level error reporting.
    #[error("no stored role {role_id} for prompt {prompt_id}")]
    IntegrityViolation { prompt_id: PromptId, role_id: RoleId },

    #[error(transparent)]
    Form(#[from] FormError),

    #[error("platform error: {0}")]
    Platform(#[from] PlatformError),

    #[error("storage error: {0}")]
    Storage(#[from] RepositoryError),
}
