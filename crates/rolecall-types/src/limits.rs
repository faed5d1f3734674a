//! Platform limits that shape rendering and validation.

/// Maximum length of an embed title.
pub const EMBED_TITLE_MAX: u16 = 256;

/// Maximum length of an embed description.
pub const EMBED_DESCRIPTION_MAX: u16 = 4096;

/// Maximum length of a modal text-input value.
pub const TEXT_INPUT_VALUE_MAX: u16 = 4000;

/// Buttons per action row.
pub const BUTTONS_PER_ROW: usize = 5;

/// Action rows per message.
pub const MAX_ACTION_ROWS: usize = 5;

/// Options in a select menu, and the per-guild prompt cap (both bounded
/// by the platform's 25-option select limit).
pub const SELECT_OPTIONS_MAX: usize = 25;

/// Prompts a guild can hold before the create control is disabled.
pub const MAX_PROMPTS_PER_GUILD: usize = 25;
