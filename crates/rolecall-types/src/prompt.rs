use serde::{Deserialize, Serialize};

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

macro_rules! snowflake_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub u64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.parse()?))
            }
        }
    };
}

snowflake_id! {
    /// Platform guild (server) identifier.
    GuildId
}

snowflake_id! {
    /// Platform role identifier.
    RoleId
}

snowflake_id! {
    /// Platform user identifier.
    UserId
}

/// Store-assigned prompt identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PromptId(pub i64);

impl fmt::Display for PromptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PromptId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// A configured role prompt.
///
/// Admins create prompts through the setup wizard; members interact with
/// the published rendering via toggle buttons or a role dropdown. A prompt
/// never expires on its own -- it lives until explicitly deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    pub id: PromptId,
    pub guild_id: GuildId,
    /// Embed title, always present.
    pub title: String,
    /// Optional embed description.
    pub description: Option<String>,
    /// Optional embed image URL.
    pub image_url: Option<String>,
    /// Optional embed color in `#rrggbb` form.
    pub color: Option<String>,
    /// Render one toggle button per role instead of a single dropdown entry point.
    pub use_buttons: bool,
}

/// One self-assignable role attached to a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptRole {
    pub prompt_id: PromptId,
    pub role_id: RoleId,
}

/// Validated form data for creating or editing a prompt.
///
/// Produced by the modal form reader in rolecall-core; the store assigns
/// the id and the wizard supplies the guild.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PromptDraft {
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub color: Option<String>,
    pub use_buttons: bool,
}

impl PromptDraft {
    /// Pre-fill a draft from an existing prompt for the edit flow.
    pub fn from_prompt(prompt: &Prompt) -> Self {
        Self {
            title: prompt.title.clone(),
            description: prompt.description.clone(),
            image_url: prompt.image_url.clone(),
            color: prompt.color.clone(),
            use_buttons: prompt.use_buttons,
        }
    }
}

/// Whether a string is an embed color in the `#rrggbb` form.
pub fn is_hex_color(s: &str) -> bool {
    let Some(digits) = s.strip_prefix('#') else {
        return false;
    };
    digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit())
}
