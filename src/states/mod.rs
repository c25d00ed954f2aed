//! State Management Layer
//!
//! Centralized application state using GPUI's Entity system.
//! Follows a unidirectional data flow pattern:
//!
//! ```text
//! UI Action → State Method → Service Call → State Update → emit / notify → UI Refresh
//! ```

mod app;
mod i18n;
mod ui_event;
mod units;

pub use app::*;
pub use i18n::*;
pub use ui_event::*;
pub use units::*;
