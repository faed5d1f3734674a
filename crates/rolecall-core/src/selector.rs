//! Role selector handler for the "Manage your roles" dropdown flow.

use rolecall_types::component::{
    ActionRow, Component, MessagePayload, SelectMenu, SelectOption,
};
use rolecall_types::error::InteractionError;
use rolecall_types::limits::SELECT_OPTIONS_MAX;
use rolecall_types::prompt::{PromptId, RoleId};

use std::collections::HashSet;

use crate::platform::interaction::ComponentInteraction;
use crate::platform::roles::GuildRoles;
use crate::repository::role::PromptRoleRepository;

/// Outcome of reconciling a selection against current membership.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RoleDiff {
    pub added: Vec<RoleId>,
    pub removed: Vec<RoleId>,
}

impl RoleDiff {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Reconcile a member's selection with their current role set.
///
/// Returns the full next membership plus the diff that produced it:
/// `added = selected - current`, `removed = (self_assignable ∩ current) -
/// selected`. Roles outside the self-assignable set pass through
/// untouched no matter what was selected.
pub fn diff_selection(
    self_assignable: &HashSet<RoleId>,
    current: &[RoleId],
    selected: &[RoleId],
) -> (Vec<RoleId>, RoleDiff) {
    let selected_set: HashSet<RoleId> = selected.iter().copied().collect();
    let current_set: HashSet<RoleId> = current.iter().copied().collect();

    let mut next = Vec::with_capacity(current.len() + selected.len());
    let mut removed = Vec::new();
    for &role in current {
        if self_assignable.contains(&role) && !selected_set.contains(&role) {
            removed.push(role);
        } else {
            next.push(role);
        }
    }

    let mut added = Vec::new();
    for &role in selected {
        if !current_set.contains(&role) {
            next.push(role);
            added.push(role);
        }
    }

    (next, RoleDiff { added, removed })
}

fn mention_list(roles: &[RoleId]) -> String {
    roles
        .iter()
        .map(|role| format!("<@&{role}>"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn diff_summary(diff: &RoleDiff) -> String {
    let mut summary = String::from("Successfully updated your roles:\n");
    if !diff.added.is_empty() {
        summary.push_str(&format!("• added: {}\n", mention_list(&diff.added)));
    }
    if !diff.removed.is_empty() {
        summary.push_str(&format!("• removed: {}", mention_list(&diff.removed)));
    }
    summary.trim_end().to_string()
}

/// Handle a "Manage your roles" button press.
///
/// Shows a multi-select of the prompt's surviving roles pre-checked for
/// the ones the member holds, awaits one selection, then applies the full
/// next membership in a single mutation.
pub async fn handle_select_roles<C, G, R>(
    ctx: &mut C,
    guild_roles: &G,
    roles: &R,
    prompt_id: PromptId,
) -> Result<(), InteractionError>
where
    C: ComponentInteraction,
    G: GuildRoles,
    R: PromptRoleRepository,
{
    let prompt_roles = roles.find_by_prompt(prompt_id).await?;
    if prompt_roles.is_empty() {
        ctx.reply("There are no roles to select. This prompt was likely deleted.")
            .await?;
        return Ok(());
    }

    let guild_id = ctx.guild_id();
    let user_id = ctx.user_id();
    let member = guild_roles.member_roles(guild_id, user_id).await?;
    let member_set: HashSet<RoleId> = member.iter().copied().collect();

    // Roles deleted from the guild stay in the store but can't be offered.
    let mut options = Vec::with_capacity(prompt_roles.len());
    for role in &prompt_roles {
        if let Some(name) = guild_roles.role_name(guild_id, role.role_id).await? {
            options.push(SelectOption {
                label: name,
                value: role.role_id.to_string(),
                default: member_set.contains(&role.role_id),
            });
        }
    }

    if options.is_empty() {
        ctx.reply("There are no roles to select. This prompt was likely deleted.")
            .await?;
        return Ok(());
    }

    let menu = SelectMenu {
        custom_id: "selection".to_string(),
        placeholder: None,
        min_values: 0,
        max_values: options.len().min(SELECT_OPTIONS_MAX) as u8,
        options,
        disabled: false,
    };

    let payload = MessagePayload {
        content: Some("Select the roles you want to have from the dropdown below".to_string()),
        embeds: Vec::new(),
        components: vec![ActionRow::new(vec![Component::SelectMenu(menu)])],
    };

    let Some(values) = ctx.collect_selection(payload).await? else {
        // Walked away; nothing was applied.
        return Ok(());
    };

    let selected: Vec<RoleId> = values
        .iter()
        .filter_map(|value| value.parse().ok())
        .collect();
    let self_assignable: HashSet<RoleId> =
        prompt_roles.iter().map(|role| role.role_id).collect();

    let (next, diff) = diff_selection(&self_assignable, &member, &selected);

    guild_roles.set_member_roles(guild_id, user_id, next).await?;

    if diff.is_empty() {
        ctx.reply("There was nothing to update!").await?;
    } else {
        ctx.reply(&diff_summary(&diff)).await?;
    }

    Ok(())
}
