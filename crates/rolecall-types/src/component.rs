//! Message-component payload model.
//!
//! Plain serde data handed to the platform adapter for rendering: message
//! payloads with embeds and interactive rows, and modal forms with text
//! fields. No protocol logic lives here -- the gateway shim translates
//! these into whatever the platform SDK expects.

use serde::{Deserialize, Serialize};

use std::collections::HashMap;

/// Visual style of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStyle {
    Primary,
    Secondary,
    Success,
    Danger,
}

/// An interactive button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    pub custom_id: String,
    pub label: String,
    pub style: ButtonStyle,
    #[serde(default)]
    pub disabled: bool,
}

impl Button {
    pub fn new(custom_id: impl Into<String>, label: impl Into<String>, style: ButtonStyle) -> Self {
        Self {
            custom_id: custom_id.into(),
            label: label.into(),
            style,
            disabled: false,
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// One option in a string select menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
    /// Pre-checked when the menu is rendered.
    #[serde(default)]
    pub default: bool,
}

/// A string select menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectMenu {
    pub custom_id: String,
    pub placeholder: Option<String>,
    pub min_values: u8,
    pub max_values: u8,
    pub options: Vec<SelectOption>,
    #[serde(default)]
    pub disabled: bool,
}

/// A platform-native role picker (options populated by the platform).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleSelectMenu {
    pub custom_id: String,
    pub placeholder: Option<String>,
    pub min_values: u8,
    pub max_values: u8,
}

/// Any interactive component that can sit in an action row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Component {
    Button(Button),
    SelectMenu(SelectMenu),
    RoleSelectMenu(RoleSelectMenu),
}

/// An ordered row of interactive components.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActionRow {
    pub components: Vec<Component>,
}

impl ActionRow {
    pub fn new(components: Vec<Component>) -> Self {
        Self { components }
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

/// An embed block within a message.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Embed {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    /// `#rrggbb` color string.
    pub color: Option<String>,
}

/// A renderable message: text, embeds, and interactive rows.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MessagePayload {
    pub content: Option<String>,
    pub embeds: Vec<Embed>,
    pub components: Vec<ActionRow>,
}

impl MessagePayload {
    /// A plain text message with no embeds or components.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }
}

/// Input style of a modal text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextFieldStyle {
    /// Single-line input.
    Short,
    /// Multi-line input.
    Paragraph,
}

/// One text field in a modal form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextField {
    pub name: String,
    pub label: String,
    pub placeholder: Option<String>,
    pub required: bool,
    pub style: TextFieldStyle,
    pub max_length: Option<u16>,
    /// Pre-filled value (edit flows).
    pub value: Option<String>,
}

/// A modal form shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Form {
    pub title: String,
    pub fields: Vec<TextField>,
}

/// A submitted modal form.
///
/// The platform widget reports untouched optional fields as empty strings
/// rather than omitting them; the form reader in rolecall-core normalizes
/// that into an absent/value model.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormSubmission {
    pub values: HashMap<String, String>,
}

impl FormSubmission {
    /// Raw widget value for a field, as submitted (possibly empty).
    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_row_is_empty() {
        assert!(ActionRow::default().is_empty());

        let row = ActionRow::new(vec![Component::Button(Button::new(
            "x",
            "X",
            ButtonStyle::Primary,
        ))]);
        assert!(!row.is_empty());
    }

    #[test]
    fn test_message_payload_text() {
        let payload = MessagePayload::text("hello");
        assert_eq!(payload.content.as_deref(), Some("hello"));
        assert!(payload.embeds.is_empty());
        assert!(payload.components.is_empty());
    }

    #[test]
    fn test_component_serde_tagging() {
        let component = Component::Button(Button::new("id", "Label", ButtonStyle::Danger));
        let json = serde_json::to_string(&component).unwrap();
        assert!(json.contains(r#""type":"button""#));

        let back: Component = serde_json::from_str(&json).unwrap();
        assert_eq!(back, component);
    }

    #[test]
    fn test_form_submission_value() {
        let submission = FormSubmission {
            values: HashMap::from([("title".to_string(), "Colors".to_string())]),
        };
        assert_eq!(submission.value("title"), Some("Colors"));
        assert_eq!(submission.value("missing"), None);
    }
}
