//! Component custom-ID codec.
//!
//! Buttons on published prompt messages carry pipe-delimited custom IDs
//! (`toggle-role|<promptId>|<roleId>`, `select-roles|<promptId>`). This is
//! a wire contract: IDs must stay stable across releases and parse back
//! into the integers they encode. The closed [`ComponentId`] enum is the
//! single place that knows the format; handlers match on decoded variants
//! instead of splitting strings themselves.

use thiserror::Error;

use std::fmt;
use std::str::FromStr;

use crate::prompt::{PromptId, RoleId};

/// Decoded custom ID of a component on a published prompt message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentId {
    /// A per-role toggle button.
    ToggleRole { prompt_id: PromptId, role_id: RoleId },
    /// The "Manage your roles" entry-point button.
    SelectRoles { prompt_id: PromptId },
}

/// Failure to decode a custom-ID string.
#[derive(Debug, Error)]
pub enum ParseComponentIdError {
    #[error("unknown component id prefix: '{0}'")]
    UnknownPrefix(String),

    #[error("component id '{0}' has the wrong number of segments")]
    WrongSegmentCount(String),

    #[error("component id '{raw}' carries a non-numeric segment: {source}")]
    InvalidId {
        raw: String,
        source: std::num::ParseIntError,
    },
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentId::ToggleRole { prompt_id, role_id } => {
                write!(f, "toggle-role|{prompt_id}|{role_id}")
            }
            ComponentId::SelectRoles { prompt_id } => write!(f, "select-roles|{prompt_id}"),
        }
    }
}

impl FromStr for ComponentId {
    type Err = ParseComponentIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let segments: Vec<&str> = s.split('|').collect();

        let invalid = |source| ParseComponentIdError::InvalidId {
            raw: s.to_string(),
            source,
        };

        match segments.as_slice() {
            ["toggle-role", prompt, role] => Ok(ComponentId::ToggleRole {
                prompt_id: prompt.parse().map_err(invalid)?,
                role_id: role.parse().map_err(invalid)?,
            }),
            ["select-roles", prompt] => Ok(ComponentId::SelectRoles {
                prompt_id: prompt.parse().map_err(invalid)?,
            }),
            ["toggle-role", ..] | ["select-roles", ..] => {
                Err(ParseComponentIdError::WrongSegmentCount(s.to_string()))
            }
            _ => Err(ParseComponentIdError::UnknownPrefix(
                segments.first().unwrap_or(&"").to_string(),
            )),
        }
    }
}
