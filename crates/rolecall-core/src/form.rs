//! Modal form construction and field reading.
//!
//! The platform's modal widget reports an untouched optional field as an
//! empty string rather than omitting it. The readers here normalize that
//! into an absent/value model so the rest of the system never sees empty
//! strings.

use rolecall_types::component::{Form, FormSubmission, TextField, TextFieldStyle};
use rolecall_types::error::FormError;
use rolecall_types::limits::{EMBED_DESCRIPTION_MAX, EMBED_TITLE_MAX, TEXT_INPUT_VALUE_MAX};
use rolecall_types::prompt::{PromptDraft, is_hex_color};

const TITLE_FIELD: &str = "title";
const DESCRIPTION_FIELD: &str = "description";
const IMAGE_URL_FIELD: &str = "image-url";
const COLOR_FIELD: &str = "color";
const USE_BUTTONS_FIELD: &str = "use-buttons";

/// Trimmed value of an optional field, `None` when left empty.
pub fn text_value(submission: &FormSubmission, field: &str) -> Option<String> {
    let value = submission.value(field)?.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Trimmed value of a required field; empty input is a validation error.
pub fn required_text_value(submission: &FormSubmission, field: &str) -> Result<String, FormError> {
    text_value(submission, field).ok_or_else(|| FormError::MissingRequiredField(field.to_string()))
}

/// Build the 5-field prompt form, pre-filled from `existing` when editing.
pub fn prompt_form(existing: Option<&PromptDraft>) -> Form {
    let title = TextField {
        name: TITLE_FIELD.to_string(),
        label: "Title".to_string(),
        placeholder: Some("Title to use in the embed prompt".to_string()),
        required: true,
        style: TextFieldStyle::Short,
        max_length: Some(EMBED_TITLE_MAX),
        value: existing.map(|draft| draft.title.clone()),
    };

    let description = TextField {
        name: DESCRIPTION_FIELD.to_string(),
        label: "Optional description".to_string(),
        placeholder: Some("Description to use in the embed prompt".to_string()),
        required: false,
        style: TextFieldStyle::Paragraph,
        max_length: Some(EMBED_DESCRIPTION_MAX.min(TEXT_INPUT_VALUE_MAX)),
        value: existing.and_then(|draft| draft.description.clone()),
    };

    let image_url = TextField {
        name: IMAGE_URL_FIELD.to_string(),
        label: "Optional image URL".to_string(),
        placeholder: Some("Image to use in the embed prompt".to_string()),
        required: false,
        style: TextFieldStyle::Short,
        max_length: None,
        value: existing.and_then(|draft| draft.image_url.clone()),
    };

    let color = TextField {
        name: COLOR_FIELD.to_string(),
        label: "Optional embed color".to_string(),
        placeholder: Some("Color to use in the embed prompt (#rrggbb)".to_string()),
        required: false,
        style: TextFieldStyle::Short,
        max_length: None,
        value: existing.and_then(|draft| draft.color.clone()),
    };

    let use_buttons = TextField {
        name: USE_BUTTONS_FIELD.to_string(),
        label: "Use buttons? (yes/no)".to_string(),
        placeholder: Some("Any value but \"yes\" will be treated as no".to_string()),
        required: false,
        style: TextFieldStyle::Short,
        max_length: None,
        value: existing.map(|draft| {
            if draft.use_buttons {
                "yes".to_string()
            } else {
                "no".to_string()
            }
        }),
    };

    Form {
        title: "Create/adjust a role prompt".to_string(),
        fields: vec![title, description, image_url, color, use_buttons],
    }
}

/// Read a submitted prompt form into a validated draft.
///
/// Title is required; a present color must be `#rrggbb`; "use buttons" is
/// true iff the field reads exactly `yes`.
pub fn draft_from_submission(submission: &FormSubmission) -> Result<PromptDraft, FormError> {
    let title = required_text_value(submission, TITLE_FIELD)?;
    let description = text_value(submission, DESCRIPTION_FIELD);
    let image_url = text_value(submission, IMAGE_URL_FIELD);

    let color = text_value(submission, COLOR_FIELD);
    if let Some(color) = &color {
        if !is_hex_color(color) {
            return Err(FormError::InvalidColor(color.clone()));
        }
    }

    let use_buttons = text_value(submission, USE_BUTTONS_FIELD).as_deref() == Some("yes");

    Ok(PromptDraft {
        title,
        description,
        image_url,
        color,
        use_buttons,
    })
}
