//! Role toggle handler for per-role buttons on published prompts.

use rolecall_types::component::{ActionRow, Button, ButtonStyle, Component};
use rolecall_types::error::InteractionError;
use rolecall_types::prompt::{PromptId, RoleId};

use crate::platform::interaction::ComponentInteraction;
use crate::platform::roles::GuildRoles;
use crate::render::DELETED_ROLE_LABEL;
use crate::repository::role::PromptRoleRepository;

/// Rewrite one button in the tree to the disabled "[Deleted Role]" state.
///
/// A structural patch: every other component is carried over unchanged so
/// the message keeps whatever the rest of it looked like.
pub fn disable_button(rows: &[ActionRow], row_idx: usize, button_idx: usize) -> Vec<ActionRow> {
    rows.iter()
        .enumerate()
        .map(|(r, row)| {
            if r != row_idx {
                return row.clone();
            }

            let components = row
                .components
                .iter()
                .enumerate()
                .map(|(b, component)| match component {
                    Component::Button(button) if b == button_idx => {
                        Component::Button(
                            Button::new(
                                button.custom_id.clone(),
                                DELETED_ROLE_LABEL,
                                ButtonStyle::Secondary,
                            )
                            .disabled(true),
                        )
                    }
                    other => other.clone(),
                })
                .collect();

            ActionRow::new(components)
        })
        .collect()
}

/// Handle a toggle-role button press.
///
/// A role deleted from the guild is expected: the pressed button gets the
/// disabled patch and the member an ephemeral notice. A live role with no
/// backing store row is not -- that means a forged or stale custom id, and
/// the resulting [`InteractionError::IntegrityViolation`] propagates to
/// the platform's top-level error reporting. Otherwise membership flips
/// with exactly one platform mutation.
pub async fn handle_toggle_role<C, G, R>(
    ctx: &mut C,
    guild_roles: &G,
    roles: &R,
    prompt_id: PromptId,
    role_id: RoleId,
    row_idx: usize,
    button_idx: usize,
) -> Result<(), InteractionError>
where
    C: ComponentInteraction,
    G: GuildRoles,
    R: PromptRoleRepository,
{
    let guild_id = ctx.guild_id();

    let Some(role_name) = guild_roles.role_name(guild_id, role_id).await? else {
        let patched = disable_button(ctx.message_rows(), row_idx, button_idx);
        ctx.update_message(patched).await?;
        ctx.reply("This role appears to have been deleted.").await?;
        return Ok(());
    };

    roles
        .find(prompt_id, role_id)
        .await?
        .ok_or(InteractionError::IntegrityViolation { prompt_id, role_id })?;

    let user_id = ctx.user_id();
    let member = guild_roles.member_roles(guild_id, user_id).await?;

    if member.contains(&role_id) {
        guild_roles
            .remove_member_role(guild_id, user_id, role_id)
            .await?;
        ctx.reply(&format!("Successfully removed role {role_name}"))
            .await?;
    } else {
        guild_roles
            .add_member_role(guild_id, user_id, role_id)
            .await?;
        ctx.reply(&format!("Successfully added role {role_name}"))
            .await?;
    }

    Ok(())
}
