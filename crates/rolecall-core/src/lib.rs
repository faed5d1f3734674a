//! Interaction logic and trait definitions ("ports") for Rolecall.
//!
//! This crate holds everything between the chat platform and the store:
//! the setup wizard, the toggle/selector handlers for published prompt
//! messages, prompt rendering, and modal form reading. The platform
//! gateway and the SQLite layer plug in through the traits in
//! [`platform`] and [`repository`]. It depends only on `rolecall-types`
//! -- never on `rolecall-infra` or any database/IO crate.

pub mod dispatch;
pub mod form;
pub mod platform;
pub mod render;
pub mod repository;
pub mod selector;
pub mod toggle;
pub mod wizard;

#[cfg(test)]
pub(crate) mod testing;
