//! Helper Utilities
//!
//! Common utilities used across the application.

mod action;
mod format;
mod fs;

pub use action::*;
pub use format::*;
pub use fs::*;
