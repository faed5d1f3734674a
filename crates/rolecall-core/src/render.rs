//! Rendering a stored prompt into a publishable message.

use rolecall_types::component::{
    ActionRow, Button, ButtonStyle, Component, Embed, MessagePayload,
};
use rolecall_types::custom_id::ComponentId;
use rolecall_types::limits::{BUTTONS_PER_ROW, MAX_ACTION_ROWS};
use rolecall_types::prompt::{Prompt, RoleId};

/// Label rendered for a role that no longer exists in the guild.
pub const DELETED_ROLE_LABEL: &str = "[Deleted Role]";

/// Drop rows with no interactive components, preserving order.
pub fn filter_empty_rows(rows: Vec<ActionRow>) -> Vec<ActionRow> {
    rows.into_iter().filter(|row| !row.is_empty()).collect()
}

/// Render a prompt and its resolved role list into a public message.
///
/// `roles` pairs each attached role with its current guild name (`None`
/// when deleted). With `use_buttons` the roles become toggle buttons, five
/// per row across at most five rows -- roles past the 25th are dropped
/// from display only, the store keeps them. Otherwise a single "Manage
/// your roles" button opens the dropdown flow.
pub fn prompt_message(prompt: &Prompt, roles: &[(RoleId, Option<String>)]) -> MessagePayload {
    let embed = Embed {
        title: Some(prompt.title.clone()),
        description: prompt.description.clone(),
        image_url: prompt.image_url.clone(),
        color: prompt.color.clone(),
    };

    let rows = if prompt.use_buttons {
        roles
            .chunks(BUTTONS_PER_ROW)
            .take(MAX_ACTION_ROWS)
            .map(|chunk| {
                let buttons = chunk
                    .iter()
                    .map(|(role_id, name)| {
                        let custom_id = ComponentId::ToggleRole {
                            prompt_id: prompt.id,
                            role_id: *role_id,
                        }
                        .to_string();

                        let button = match name {
                            Some(name) => Button::new(custom_id, name, ButtonStyle::Primary),
                            None => Button::new(custom_id, DELETED_ROLE_LABEL, ButtonStyle::Secondary)
                                .disabled(true),
                        };

                        Component::Button(button)
                    })
                    .collect();

                ActionRow::new(buttons)
            })
            .collect()
    } else {
        vec![ActionRow::new(vec![Component::Button(Button::new(
            ComponentId::SelectRoles {
                prompt_id: prompt.id,
            }
            .to_string(),
            "Manage your roles",
            ButtonStyle::Primary,
        ))])]
    };

    MessagePayload {
        content: None,
        embeds: vec![embed],
        components: filter_empty_rows(rows),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rolecall_types::prompt::{GuildId, PromptId};

    fn prompt(use_buttons: bool) -> Prompt {
        Prompt {
            id: PromptId(1),
            guild_id: GuildId(10),
            title: "Colors".to_string(),
            description: Some("Pick your color".to_string()),
            image_url: None,
            color: Some("#ff8800".to_string()),
            use_buttons,
        }
    }

    fn named_roles(count: u64) -> Vec<(RoleId, Option<String>)> {
        (1..=count)
            .map(|n| (RoleId(n), Some(format!("role-{n}"))))
            .collect()
    }

    #[test]
    fn test_filter_empty_rows() {
        let empty = ActionRow::default();
        let full = ActionRow::new(vec![
            Component::Button(Button::new("a", "A", ButtonStyle::Primary)),
            Component::Button(Button::new("b", "B", ButtonStyle::Primary)),
        ]);

        let filtered = filter_empty_rows(vec![empty, full.clone()]);
        assert_eq!(filtered, vec![full]);
    }

    #[test]
    fn test_buttons_capped_at_twenty_five() {
        let payload = prompt_message(&prompt(true), &named_roles(30));

        assert_eq!(payload.components.len(), 5);
        let total: usize = payload
            .components
            .iter()
            .map(|row| row.components.len())
            .sum();
        assert_eq!(total, 25);
    }

    #[test]
    fn test_buttons_fill_rows_of_five() {
        let payload = prompt_message(&prompt(true), &named_roles(7));

        assert_eq!(payload.components.len(), 2);
        assert_eq!(payload.components[0].components.len(), 5);
        assert_eq!(payload.components[1].components.len(), 2);
    }

    #[test]
    fn test_button_custom_ids_and_labels() {
        let payload = prompt_message(&prompt(true), &named_roles(1));

        let Component::Button(button) = &payload.components[0].components[0] else {
            panic!("expected a button");
        };
        assert_eq!(button.custom_id, "toggle-role|1|1");
        assert_eq!(button.label, "role-1");
        assert!(!button.disabled);
    }

    #[test]
    fn test_deleted_role_renders_disabled() {
        let roles = vec![(RoleId(1), Some("alive".to_string())), (RoleId(2), None)];
        let payload = prompt_message(&prompt(true), &roles);

        let Component::Button(deleted) = &payload.components[0].components[1] else {
            panic!("expected a button");
        };
        assert_eq!(deleted.label, DELETED_ROLE_LABEL);
        assert_eq!(deleted.style, ButtonStyle::Secondary);
        assert!(deleted.disabled);
    }

    #[test]
    fn test_dropdown_variant_single_button() {
        let payload = prompt_message(&prompt(false), &named_roles(12));

        assert_eq!(payload.components.len(), 1);
        let Component::Button(button) = &payload.components[0].components[0] else {
            panic!("expected a button");
        };
        assert_eq!(button.custom_id, "select-roles|1");
        assert_eq!(button.label, "Manage your roles");
    }

    #[test]
    fn test_embed_carries_prompt_fields() {
        let payload = prompt_message(&prompt(false), &[]);

        let embed = &payload.embeds[0];
        assert_eq!(embed.title.as_deref(), Some("Colors"));
        assert_eq!(embed.description.as_deref(), Some("Pick your color"));
        assert_eq!(embed.color.as_deref(), Some("#ff8800"));
    }
}
