//! Prompt repository trait definition.

use rolecall_types::error::RepositoryError;
use rolecall_types::prompt::{GuildId, Prompt, PromptDraft, PromptId};

/// Repository trait for prompt persistence.
///
/// Implementations live in rolecall-infra (e.g., SqlitePromptRepository).
/// Uses native async fn in traits (Rust 2024 edition, no async_trait macro).
pub trait PromptRepository: Send + Sync {
    /// All prompts configured for a guild, oldest first.
    fn find_by_guild(
        &self,
        guild_id: GuildId,
    ) -> impl std::future::Future<Output = Result<Vec<Prompt>, RepositoryError>> + Send;

    /// Create a prompt from draft data. Returns the stored prompt with its
    /// store-assigned id.
    fn create(
        &self,
        guild_id: GuildId,
        draft: &PromptDraft,
    ) -> impl std::future::Future<Output = Result<Prompt, RepositoryError>> + Send;

    /// Overwrite an existing prompt's data. Returns the updated prompt.
    fn update(
        &self,
        id: PromptId,
        draft: &PromptDraft,
    ) -> impl std::future::Future<Output = Result<Prompt, RepositoryError>> + Send;

    /// Permanently delete a prompt by id (its role rows go with it).
    fn delete(
        &self,
        id: PromptId,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;
}
