//! Shared domain types for Rolecall.
//!
//! This crate contains the core domain types used across the Rolecall
//! workspace: prompts and their role lists, the message-component payload
//! model handed to the chat platform, the component custom-ID codec, and
//! the associated error types.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod component;
pub mod custom_id;
pub mod error;
pub mod limits;
pub mod prompt;
