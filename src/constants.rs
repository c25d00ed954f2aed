//! UI Constants
//!
//! Centralized UI constants for consistent layout across the application.

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 900.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 700.0;
pub const MIN_WINDOW_WIDTH: f32 = 720.0;
pub const MIN_WINDOW_HEIGHT: f32 = 520.0;

/// Width of the label column in the unit form
pub const FORM_LABEL_WIDTH: f32 = 140.0;

/// Height of one table row
pub const TABLE_ROW_HEIGHT: f32 = 30.0;

/// Relative widths of the table columns, in display order
pub const TABLE_COLUMN_WEIGHTS: [f32; 7] = [1.0, 1.6, 0.8, 1.0, 1.0, 1.2, 1.0];

/// Width of the delete confirmation dialog
pub const CONFIRM_DIALOG_WIDTH: f32 = 420.0;
