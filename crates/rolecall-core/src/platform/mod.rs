//! Chat-platform trait definitions (ports).
//!
//! The gateway shim that owns the websocket connection implements these;
//! rolecall-core only ever talks to the platform through them. The
//! in-repo implementations are test fakes.

pub mod interaction;
pub mod roles;
pub mod session;
