//! Keyboard Actions and Shortcuts
//!
//! Defines global keyboard shortcuts and action dispatching.

use gpui::{Action, KeyBinding};
use schemars::JsonSchema;
use serde::Deserialize;

/// Keystrokes shared by the bindings and the button tooltips
pub const ADD_KEYSTROKE: &str = "secondary-enter";
pub const REFRESH_KEYSTROKE: &str = "secondary-r";
pub const CLEAR_KEYSTROKE: &str = "escape";
pub const QUIT_KEYSTROKE: &str = "secondary-q";

/// Menu actions (application-level)
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum MenuAction {
    /// Quit the application
    Quit,
}

/// Unit management actions
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum UnitAction {
    /// Validate the form and add a unit
    Add,
    /// Mark the selected unit as rented
    MarkRented,
    /// Mark the selected unit as sold
    MarkSold,
    /// Ask to delete the selected unit
    Delete,
    /// Reset the form
    Clear,
    /// Reload the table from storage
    Refresh,
    /// Select next row
    SelectNext,
    /// Select previous row
    SelectPrevious,
}

/// Status picked in the form's status dropdown
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum StatusAction {
    Available,
    Rented,
    Sold,
}

/// Convert a keystroke string to human-readable format
///
/// Platform-specific formatting:
/// - macOS: ⌘ for cmd, ⌥ for alt, ⌃ for ctrl, ⇧ for shift
/// - Others: Ctrl+, Alt+, Shift+
pub fn humanize_keystroke(keystroke: &str) -> String {
    let parts = keystroke.split('-');
    let mut display_text = String::new();

    #[cfg(target_os = "macos")]
    let separator = "";
    #[cfg(not(target_os = "macos"))]
    let separator = "+";

    for (i, part) in parts.enumerate() {
        if i > 0 {
            display_text.push_str(separator);
        }

        let symbol = match part {
            "secondary" | "cmd" => {
                #[cfg(target_os = "macos")]
                { "⌘" }
                #[cfg(not(target_os = "macos"))]
                { "Ctrl" }
            }
            "alt" => {
                #[cfg(target_os = "macos")]
                { "⌥" }
                #[cfg(not(target_os = "macos"))]
                { "Alt" }
            }
            "shift" => {
                #[cfg(target_os = "macos")]
                { "⇧" }
                #[cfg(not(target_os = "macos"))]
                { "Shift" }
            }
            "enter" => "Enter",
            "escape" => "Esc",
            "up" => "↑",
            "down" => "↓",
            c => {
                display_text.push_str(&c.to_uppercase());
                continue;
            }
        };
        display_text.push_str(symbol);
    }

    display_text
}

/// Create global keyboard bindings
pub fn new_key_bindings() -> Vec<KeyBinding> {
    vec![
        // Application
        KeyBinding::new(QUIT_KEYSTROKE, MenuAction::Quit, None),
        // Form
        KeyBinding::new(ADD_KEYSTROKE, UnitAction::Add, None),
        KeyBinding::new(CLEAR_KEYSTROKE, UnitAction::Clear, None),
        // Table
        KeyBinding::new(REFRESH_KEYSTROKE, UnitAction::Refresh, None),
        KeyBinding::new("down", UnitAction::SelectNext, None),
        KeyBinding::new("up", UnitAction::SelectPrevious, None),
    ]
}

#[cfg(all(test, not(target_os = "macos")))]
mod tests {
    use super::*;

    #[test]
    fn test_humanize_keystroke() {
        assert_eq!(humanize_keystroke(ADD_KEYSTROKE), "Ctrl+Enter");
        assert_eq!(humanize_keystroke(REFRESH_KEYSTROKE), "Ctrl+R");
        assert_eq!(humanize_keystroke(CLEAR_KEYSTROKE), "Esc");
        assert_eq!(humanize_keystroke("alt-shift-x"), "Alt+Shift+X");
    }
}
