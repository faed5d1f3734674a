//! Async driver for the setup wizard.
//!
//! One invocation owns one [`WizardState`] for its whole lifetime. The
//! driver is a two-screen state machine: `Menu` (top level, unlocked) and
//! `Manager` (one prompt selected, top-level controls locked). An idle
//! timeout on either screen is the terminal transition: the root reply is
//! replaced with an expiry notice and all controls are dropped.

use rolecall_types::component::{
    ActionRow, Component, MessagePayload, RoleSelectMenu,
};
use rolecall_types::error::InteractionError;
use rolecall_types::limits::SELECT_OPTIONS_MAX;
use rolecall_types::prompt::{GuildId, Prompt, PromptDraft, PromptId};

use std::time::Duration;

use crate::form::{draft_from_submission, prompt_form};
use crate::platform::roles::GuildRoles;
use crate::platform::session::{ComponentEvent, InteractionSession};
use crate::render::prompt_message;
use crate::repository::prompt::PromptRepository;
use crate::repository::role::PromptRoleRepository;
use crate::wizard::state::{WizardControl, WizardState, manager_message, menu_message};

/// Inactivity window for the wizard's component collectors.
pub const IDLE_TIMEOUT: Duration = Duration::from_secs(180);

/// Response window for modal form submissions.
pub const FORM_TIMEOUT: Duration = Duration::from_secs(180);

const EXPIRED_CONTENT: &str =
    "This config menu has expired, use /setup again if you wish to continue configuration.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Menu,
    Manager,
}

/// Run the setup wizard for one admin session.
///
/// Returns once the session idles out or the platform/store fails.
pub async fn run_setup<S, G, P, R>(
    session: &mut S,
    guild_roles: &G,
    prompts: &P,
    roles: &R,
    guild_id: GuildId,
) -> Result<(), InteractionError>
where
    S: InteractionSession,
    G: GuildRoles,
    P: PromptRepository,
    R: PromptRoleRepository,
{
    SetupWizard {
        session,
        guild_roles,
        prompts,
        roles,
        guild_id,
    }
    .run()
    .await
}

struct SetupWizard<'a, S, G, P, R> {
    session: &'a mut S,
    guild_roles: &'a G,
    prompts: &'a P,
    roles: &'a R,
    guild_id: GuildId,
}

impl<S, G, P, R> SetupWizard<'_, S, G, P, R>
where
    S: InteractionSession,
    G: GuildRoles,
    P: PromptRepository,
    R: PromptRoleRepository,
{
    async fn run(mut self) -> Result<(), InteractionError> {
        let mut state = WizardState::new(self.prompts.find_by_guild(self.guild_id).await?);
        let mut screen = Screen::Menu;

        self.session.render(menu_message(&state)).await?;

        while let Some(event) = self.session.next_event(IDLE_TIMEOUT).await? {
            let control = match event.custom_id.parse::<WizardControl>() {
                Ok(control) => control,
                Err(err) => {
                    tracing::warn!(%err, "unrecognized wizard control");
                    continue;
                }
            };

            screen = match screen {
                Screen::Menu => self.menu_action(&mut state, control, &event).await?,
                Screen::Manager => self.manager_action(&mut state, control).await?,
            };

            self.session.render(menu_message(&state)).await?;
        }

        self.session
            .render(MessagePayload::text(EXPIRED_CONTENT))
            .await?;
        Ok(())
    }

    async fn menu_action(
        &mut self,
        state: &mut WizardState,
        control: WizardControl,
        event: &ComponentEvent,
    ) -> Result<Screen, InteractionError> {
        match control {
            WizardControl::Create => {
                if let Some(draft) = self.collect_draft(None).await? {
                    let prompt = self.prompts.create(self.guild_id, &draft).await?;
                    state.insert(prompt);
                }
                Ok(Screen::Menu)
            }

            WizardControl::PromptSelect => {
                let Some(id) = event
                    .values
                    .first()
                    .and_then(|value| value.parse::<PromptId>().ok())
                else {
                    return Ok(Screen::Menu);
                };

                if !state.select(id) {
                    return Ok(Screen::Menu);
                }

                state.locked = true;
                self.session.render_submenu(manager_message()).await?;
                Ok(Screen::Manager)
            }

            other => {
                tracing::warn!(control = other.as_str(), "management control on the top-level menu");
                Ok(Screen::Menu)
            }
        }
    }

    async fn manager_action(
        &mut self,
        state: &mut WizardState,
        control: WizardControl,
    ) -> Result<Screen, InteractionError> {
        let Some(prompt) = state.selected_prompt().cloned() else {
            // Selection can't vanish while locked; recover by closing the sub-flow.
            state.locked = false;
            return Ok(Screen::Menu);
        };

        match control {
            WizardControl::Delete => {
                self.prompts.delete(prompt.id).await?;
                state.remove_selected();
                state.locked = false;
                self.session
                    .close_submenu("Successfully deleted the prompt")
                    .await?;
                Ok(Screen::Menu)
            }

            WizardControl::Edit => {
                let existing = PromptDraft::from_prompt(&prompt);
                if let Some(draft) = self.collect_draft(Some(&existing)).await? {
                    let updated = self.prompts.update(prompt.id, &draft).await?;
                    state.replace_selected(updated);
                }
                Ok(Screen::Manager)
            }

            WizardControl::SetRoles => {
                self.set_roles(prompt.id).await?;
                Ok(Screen::Manager)
            }

            WizardControl::Display => {
                self.display(&prompt).await?;
                Ok(Screen::Manager)
            }

            WizardControl::Dismiss => {
                state.clear_selection();
                state.locked = false;
                self.session.close_submenu("Dismissed.").await?;
                Ok(Screen::Menu)
            }

            other => {
                tracing::warn!(control = other.as_str(), "top-level control while a prompt is selected");
                Ok(Screen::Manager)
            }
        }
    }

    /// Open the prompt form and wait for a valid submission.
    ///
    /// `None` on timeout or validation failure; the admin gets an
    /// ephemeral explanation either way and no state changes.
    async fn collect_draft(
        &mut self,
        existing: Option<&PromptDraft>,
    ) -> Result<Option<PromptDraft>, InteractionError> {
        let Some(submission) = self
            .session
            .open_form(prompt_form(existing), FORM_TIMEOUT)
            .await?
        else {
            self.session
                .notify("You took too long to respond. Please try again.")
                .await?;
            return Ok(None);
        };

        match draft_from_submission(&submission) {
            Ok(draft) => {
                self.session.notify("Successfully saved the prompt").await?;
                Ok(Some(draft))
            }
            Err(err) => {
                self.session.notify(&err.to_string()).await?;
                Ok(None)
            }
        }
    }

    /// Bulk-replace a prompt's role list from a role picker selection.
    async fn set_roles(&mut self, prompt_id: PromptId) -> Result<(), InteractionError> {
        let picker = RoleSelectMenu {
            custom_id: "roles".to_string(),
            placeholder: None,
            min_values: 1,
            max_values: SELECT_OPTIONS_MAX as u8,
        };

        let payload = MessagePayload {
            content: Some("Select the roles this prompt should make assignable".to_string()),
            embeds: Vec::new(),
            components: vec![ActionRow::new(vec![Component::RoleSelectMenu(picker)])],
        };

        let Some(role_ids) = self.session.collect_roles(payload).await? else {
            return Ok(());
        };

        self.roles.delete_by_prompt(prompt_id).await?;
        self.roles.create_many(prompt_id, &role_ids).await?;
        self.session
            .notify("Successfully updated the roles for this prompt")
            .await?;
        Ok(())
    }

    /// Publish the selected prompt to the invoking channel.
    async fn display(&mut self, prompt: &Prompt) -> Result<(), InteractionError> {
        let roles = self.roles.find_by_prompt(prompt.id).await?;
        if roles.is_empty() {
            self.session
                .notify("This prompt has no roles. Set some with the \"Set roles\" button.")
                .await?;
            return Ok(());
        }

        let mut resolved = Vec::with_capacity(roles.len());
        for role in &roles {
            let name = self
                .guild_roles
                .role_name(self.guild_id, role.role_id)
                .await?;
            resolved.push((role.role_id, name));
        }

        self.session.publish(prompt_message(prompt, &resolved)).await?;
        self.session
            .notify("Successfully sent the prompt to the current channel")
            .await?;
        Ok(())
    }
}
