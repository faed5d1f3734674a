//! Guild role cache and mutation trait definition.

use rolecall_types::error::PlatformError;
use rolecall_types::prompt::{GuildId, RoleId, UserId};

/// Access to a guild's role metadata and member role mutations.
///
/// Backed by the platform SDK's role cache and REST calls in production.
pub trait GuildRoles: Send + Sync {
    /// Name of a role, or `None` if it no longer exists in the guild.
    fn role_name(
        &self,
        guild_id: GuildId,
        role_id: RoleId,
    ) -> impl std::future::Future<Output = Result<Option<String>, PlatformError>> + Send;

    /// Role ids the member currently holds.
    fn member_roles(
        &self,
        guild_id: GuildId,
        user_id: UserId,
    ) -> impl std::future::Future<Output = Result<Vec<RoleId>, PlatformError>> + Send;

    /// Grant a single role to a member.
    fn add_member_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> impl std::future::Future<Output = Result<(), PlatformError>> + Send;

    /// Revoke a single role from a member.
    fn remove_member_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> impl std::future::Future<Output = Result<(), PlatformError>> + Send;

    /// Replace the member's full role set in one mutation.
    fn set_member_roles(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_ids: Vec<RoleId>,
    ) -> impl std::future::Future<Output = Result<(), PlatformError>> + Send;
}
