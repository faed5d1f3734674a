//! The prompt setup wizard.
//!
//! Split in two halves: [`state`] holds the session state and the pure
//! payload builders for its screens; [`flow`] is the async driver that
//! consumes component events and talks to the store and platform.

pub mod flow;
pub mod state;

pub use flow::run_setup;
pub use state::{WizardControl, WizardState};
