//! Wizard session state and screen payload builders.
//!
//! Everything here is pure: the flow driver feeds state mutations in and
//! re-renders from the builders after every action.

use rolecall_types::component::{
    ActionRow, Button, ButtonStyle, Component, MessagePayload, SelectMenu, SelectOption,
};
use rolecall_types::limits::MAX_PROMPTS_PER_GUILD;
use rolecall_types::prompt::{Prompt, PromptId};

use std::fmt;
use std::str::FromStr;

use crate::render::filter_empty_rows;

/// Controls owned by the wizard's own screens (as opposed to the
/// published-message custom IDs in rolecall-types).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardControl {
    Create,
    PromptSelect,
    Delete,
    Edit,
    SetRoles,
    Display,
    Dismiss,
}

impl WizardControl {
    pub fn as_str(&self) -> &'static str {
        match self {
            WizardControl::Create => "create",
            WizardControl::PromptSelect => "prompt-select",
            WizardControl::Delete => "delete",
            WizardControl::Edit => "edit",
            WizardControl::SetRoles => "set-roles",
            WizardControl::Display => "display",
            WizardControl::Dismiss => "dismiss",
        }
    }
}

impl fmt::Display for WizardControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WizardControl {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create" => Ok(WizardControl::Create),
            "prompt-select" => Ok(WizardControl::PromptSelect),
            "delete" => Ok(WizardControl::Delete),
            "edit" => Ok(WizardControl::Edit),
            "set-roles" => Ok(WizardControl::SetRoles),
            "display" => Ok(WizardControl::Display),
            "dismiss" => Ok(WizardControl::Dismiss),
            other => Err(format!("unknown wizard control: '{other}'")),
        }
    }
}

/// In-memory state of one wizard session.
///
/// Owned by a single task for the session's lifetime and never shared.
/// `locked` is a UI affordance: it disables the top-level controls while
/// the management sub-flow owns the screen, nothing more.
#[derive(Debug, Clone, Default)]
pub struct WizardState {
    pub prompts: Vec<Prompt>,
    pub selected: Option<PromptId>,
    pub locked: bool,
}

impl WizardState {
    pub fn new(prompts: Vec<Prompt>) -> Self {
        Self {
            prompts,
            selected: None,
            locked: false,
        }
    }

    pub fn at_capacity(&self) -> bool {
        self.prompts.len() >= MAX_PROMPTS_PER_GUILD
    }

    /// Whether the create control renders disabled.
    pub fn create_disabled(&self) -> bool {
        self.locked || self.at_capacity()
    }

    /// Select a prompt by id. Returns false if it isn't in the list.
    pub fn select(&mut self, id: PromptId) -> bool {
        if self.prompts.iter().any(|prompt| prompt.id == id) {
            self.selected = Some(id);
            true
        } else {
            false
        }
    }

    pub fn selected_prompt(&self) -> Option<&Prompt> {
        let id = self.selected?;
        self.prompts.iter().find(|prompt| prompt.id == id)
    }

    /// Append a freshly created prompt.
    pub fn insert(&mut self, prompt: Prompt) {
        self.prompts.push(prompt);
    }

    /// Swap the selected prompt for its updated version.
    pub fn replace_selected(&mut self, updated: Prompt) {
        let Some(id) = self.selected else { return };
        if let Some(slot) = self.prompts.iter_mut().find(|prompt| prompt.id == id) {
            *slot = updated;
        }
    }

    /// Drop the selected prompt from the list and clear the selection.
    pub fn remove_selected(&mut self) {
        if let Some(id) = self.selected.take() {
            self.prompts.retain(|prompt| prompt.id != id);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }
}

fn menu_content(prompts: &[Prompt]) -> &'static str {
    if prompts.is_empty() {
        return "You don't seem to have any prompts yet. Use the \"Create a prompt\" button to create one.";
    }

    if prompts.len() >= MAX_PROMPTS_PER_GUILD {
        return "Select a specific prompt from the dropdown to manage it. You have too many prompts to create new ones.";
    }

    "Select a specific prompt from the dropdown to manage it or use the \"Create a prompt\" button to create a new one."
}

/// Build the top-level menu payload from the current state.
pub fn menu_message(state: &WizardState) -> MessagePayload {
    let create = Button::new(
        WizardControl::Create.as_str(),
        "Create a prompt",
        ButtonStyle::Success,
    )
    .disabled(state.create_disabled());

    let create_row = ActionRow::new(vec![Component::Button(create)]);

    let select_row = if state.prompts.is_empty() {
        ActionRow::default()
    } else {
        let options = state
            .prompts
            .iter()
            .map(|prompt| SelectOption {
                label: prompt.title.clone(),
                value: prompt.id.to_string(),
                default: state.selected == Some(prompt.id),
            })
            .collect();

        ActionRow::new(vec![Component::SelectMenu(SelectMenu {
            custom_id: WizardControl::PromptSelect.as_str().to_string(),
            placeholder: Some("Select the prompt you wish to make changes to".to_string()),
            min_values: 1,
            max_values: 1,
            options,
            disabled: state.locked,
        })])
    };

    MessagePayload {
        content: Some(menu_content(&state.prompts).to_string()),
        embeds: Vec::new(),
        components: filter_empty_rows(vec![create_row, select_row]),
    }
}

/// Build the management submenu payload for the selected prompt.
pub fn manager_message() -> MessagePayload {
    let buttons = vec![
        Component::Button(Button::new(
            WizardControl::Delete.as_str(),
            "Delete",
            ButtonStyle::Danger,
        )),
        Component::Button(Button::new(
            WizardControl::Edit.as_str(),
            "Edit",
            ButtonStyle::Secondary,
        )),
        Component::Button(Button::new(
            WizardControl::SetRoles.as_str(),
            "Set roles",
            ButtonStyle::Primary,
        )),
        Component::Button(Button::new(
            WizardControl::Display.as_str(),
            "Display",
            ButtonStyle::Primary,
        )),
        Component::Button(Button::new(
            WizardControl::Dismiss.as_str(),
            "Dismiss",
            ButtonStyle::Secondary,
        )),
    ];

    MessagePayload {
        content: Some("Use the buttons below to manage this prompt".to_string()),
        embeds: Vec::new(),
        components: vec![ActionRow::new(buttons)],
    }
}
