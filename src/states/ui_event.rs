//! UI Events
//!
//! Events emitted from the state layer to the UI layer for form updates,
//! focus changes, and user-facing notices.

use crate::domain::form::{FormField, UnitForm};
use gpui::SharedString;

/// UI events for the unit form
#[derive(Clone, Debug, PartialEq)]
pub enum UIEvent {
    /// Replace every form field with these values
    FillForm(UnitForm),
    /// Reset the form to its defaults
    ClearForm,
    /// Move keyboard focus to a field
    FocusField(FormField),
}

/// Severity level for UI notifications
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationSeverity {
    /// Informational message
    Info,
    /// Success message
    Success,
    /// Warning message
    Warning,
    /// Error message
    Error,
}

/// A message shown in the notice bar until replaced or dismissed
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub severity: NotificationSeverity,
    pub message: SharedString,
}

impl Notice {
    pub fn new(severity: NotificationSeverity, message: impl Into<SharedString>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<SharedString>) -> Self {
        Self::new(NotificationSeverity::Success, message)
    }

    pub fn warning(message: impl Into<SharedString>) -> Self {
        Self::new(NotificationSeverity::Warning, message)
    }

    pub fn error(message: impl Into<SharedString>) -> Self {
        Self::new(NotificationSeverity::Error, message)
    }
}
