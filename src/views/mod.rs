//! View Components
//!
//! UI components for the Units-GUI application.
//!
//! ## Layout Structure
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        TitleBar                              │
//! ├─────────────────────────────────────────────────────────────┤
//! │                 Unit Information (form)                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Add │ Rented │ Sold │ Delete │ Clear │ Refresh              │
//! ├─────────────────────────────────────────────────────────────┤
//! │                     Notice bar                               │
//! ├─────────────────────────────────────────────────────────────┤
//! │                                                              │
//! │                   Units List (table)                         │
//! │                                                              │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod confirm_dialog;
mod title_bar;
mod unit_form;
mod unit_table;
mod units_window;

pub use confirm_dialog::*;
pub use title_bar::*;
pub use unit_form::*;
pub use unit_table::*;
pub use units_window::*;
