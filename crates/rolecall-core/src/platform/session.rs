//! Wizard session trait definition.
//!
//! A session wraps one admin's `/setup` invocation: the root ephemeral
//! reply, an optional management submenu reply, and the stream of
//! component interactions the admin produces on either surface. The
//! gateway shim multiplexes the platform's collectors behind this trait.

use rolecall_types::component::{Form, FormSubmission, MessagePayload};
use rolecall_types::error::PlatformError;
use rolecall_types::prompt::RoleId;

use std::time::Duration;

/// One component interaction within a wizard session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentEvent {
    /// Custom id of the pressed button or submitted select.
    pub custom_id: String,
    /// Selected values, empty for button presses.
    pub values: Vec<String>,
}

impl ComponentEvent {
    /// A button press with no values.
    pub fn press(custom_id: impl Into<String>) -> Self {
        Self {
            custom_id: custom_id.into(),
            values: Vec::new(),
        }
    }
}

/// The interaction surface of one wizard session.
///
/// Every awaiting method is bounded: `next_event` and `open_form` take an
/// explicit window and resolve to `None` on expiry; `collect_roles` uses
/// the platform's default wait. `None` always means "no mutation
/// happened, the caller decides how to degrade".
pub trait InteractionSession: Send {
    /// Create or edit the root ephemeral reply.
    fn render(
        &mut self,
        payload: MessagePayload,
    ) -> impl std::future::Future<Output = Result<(), PlatformError>> + Send;

    /// Create or edit the management submenu reply.
    fn render_submenu(
        &mut self,
        payload: MessagePayload,
    ) -> impl std::future::Future<Output = Result<(), PlatformError>> + Send;

    /// Replace the submenu with a closing notice and drop its controls.
    fn close_submenu(
        &mut self,
        content: &str,
    ) -> impl std::future::Future<Output = Result<(), PlatformError>> + Send;

    /// Await the next component interaction on any session surface, or
    /// `None` once `idle` elapses without one.
    fn next_event(
        &mut self,
        idle: Duration,
    ) -> impl std::future::Future<Output = Result<Option<ComponentEvent>, PlatformError>> + Send;

    /// Show a modal form and await its submission, or `None` once `wait`
    /// elapses.
    fn open_form(
        &mut self,
        form: Form,
        wait: Duration,
    ) -> impl std::future::Future<Output = Result<Option<FormSubmission>, PlatformError>> + Send;

    /// Show an ephemeral role picker and await exactly one selection from
    /// the same actor, or `None` if the wait expires.
    fn collect_roles(
        &mut self,
        payload: MessagePayload,
    ) -> impl std::future::Future<Output = Result<Option<Vec<RoleId>>, PlatformError>> + Send;

    /// Ephemeral follow-up notice to the admin.
    fn notify(
        &mut self,
        content: &str,
    ) -> impl std::future::Future<Output = Result<(), PlatformError>> + Send;

    /// Post a public message to the invoking channel.
    fn publish(
        &mut self,
        payload: MessagePayload,
    ) -> impl std::future::Future<Output = Result<(), PlatformError>> + Send;
}
