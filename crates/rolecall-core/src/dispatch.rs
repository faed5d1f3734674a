//! Routing of component presses on published prompt messages.
//!
//! The gateway shim hands every component interaction here; the custom id
//! decodes into a [`ComponentId`] variant and the press routes to the
//! matching handler. IDs that don't decode are not ours (or are from a
//! stale release) and are logged and ignored.

use rolecall_types::component::{ActionRow, Component};
use rolecall_types::custom_id::ComponentId;
use rolecall_types::error::InteractionError;

use crate::platform::interaction::ComponentInteraction;
use crate::platform::roles::GuildRoles;
use crate::repository::role::PromptRoleRepository;
use crate::selector::handle_select_roles;
use crate::toggle::handle_toggle_role;

fn component_custom_id(component: &Component) -> &str {
    match component {
        Component::Button(button) => &button.custom_id,
        Component::SelectMenu(menu) => &menu.custom_id,
        Component::RoleSelectMenu(menu) => &menu.custom_id,
    }
}

/// Find the (row, index) position of a component in a message tree.
pub fn locate_component(rows: &[ActionRow], custom_id: &str) -> Option<(usize, usize)> {
    rows.iter().enumerate().find_map(|(row_idx, row)| {
        row.components
            .iter()
            .position(|component| component_custom_id(component) == custom_id)
            .map(|button_idx| (row_idx, button_idx))
    })
}

/// Dispatch a component press from a published prompt message.
pub async fn handle_component<C, G, R>(
    ctx: &mut C,
    guild_roles: &G,
    roles: &R,
    custom_id: &str,
) -> Result<(), InteractionError>
where
    C: ComponentInteraction,
    G: GuildRoles,
    R: PromptRoleRepository,
{
    let component_id = match custom_id.parse::<ComponentId>() {
        Ok(component_id) => component_id,
        Err(err) => {
            tracing::warn!(custom_id, %err, "unhandled component custom id");
            return Ok(());
        }
    };

    match component_id {
        ComponentId::ToggleRole { prompt_id, role_id } => {
            let Some((row_idx, button_idx)) = locate_component(ctx.message_rows(), custom_id)
            else {
                tracing::warn!(custom_id, "pressed component missing from message tree");
                return Ok(());
            };

            handle_toggle_role(
                ctx,
                guild_roles,
                roles,
                prompt_id,
                role_id,
                row_idx,
                button_idx,
            )
            .await
        }
        ComponentId::SelectRoles { prompt_id } => {
            handle_select_roles(ctx, guild_roles, roles, prompt_id).await
        }
    }
}
