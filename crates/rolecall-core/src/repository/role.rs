//! Prompt-role repository trait definition.

use rolecall_types::error::RepositoryError;
use rolecall_types::prompt::{PromptId, PromptRole, RoleId};

/// Repository trait for the roles attached to a prompt.
///
/// The role list is bulk-replaced by the wizard's set-roles action:
/// `delete_by_prompt` followed by `create_many`. Each call is a single
/// statement; no transaction spans the two.
pub trait PromptRoleRepository: Send + Sync {
    /// All roles attached to a prompt.
    fn find_by_prompt(
        &self,
        prompt_id: PromptId,
    ) -> impl std::future::Future<Output = Result<Vec<PromptRole>, RepositoryError>> + Send;

    /// A single (prompt, role) row, if present.
    fn find(
        &self,
        prompt_id: PromptId,
        role_id: RoleId,
    ) -> impl std::future::Future<Output = Result<Option<PromptRole>, RepositoryError>> + Send;

    /// Remove every role attached to a prompt.
    fn delete_by_prompt(
        &self,
        prompt_id: PromptId,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Attach the given roles to a prompt.
    fn create_many(
        &self,
        prompt_id: PromptId,
        role_ids: &[RoleId],
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;
}
