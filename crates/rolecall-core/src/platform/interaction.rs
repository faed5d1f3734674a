//! Published-message component interaction trait definition.

use rolecall_types::component::{ActionRow, MessagePayload};
use rolecall_types::error::PlatformError;
use rolecall_types::prompt::{GuildId, UserId};

/// Context for one member's component press on a published prompt message.
pub trait ComponentInteraction: Send {
    fn guild_id(&self) -> GuildId;

    fn user_id(&self) -> UserId;

    /// Component tree of the message the press came from.
    fn message_rows(&self) -> &[ActionRow];

    /// Patch the pressed message's components in place.
    fn update_message(
        &mut self,
        rows: Vec<ActionRow>,
    ) -> impl std::future::Future<Output = Result<(), PlatformError>> + Send;

    /// Ephemeral reply to the pressing member.
    fn reply(
        &mut self,
        content: &str,
    ) -> impl std::future::Future<Output = Result<(), PlatformError>> + Send;

    /// Show an ephemeral select and await exactly one response from the
    /// same member (platform-default bounded wait). `None` means the
    /// member walked away; nothing was selected.
    fn collect_selection(
        &mut self,
        payload: MessagePayload,
    ) -> impl std::future::Future<Output = Result<Option<Vec<String>>, PlatformError>> + Send;
}
