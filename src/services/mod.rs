//! Service Layer
//!
//! Storage and the form-driven flows built on top of it. Nothing in here
//! depends on GPUI, so every operation is testable on its own.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │              UnitService              │
//! │   add / set_status / delete / refresh │
//! └──────────────────────────────────────┘
//!                   │
//!                   ▼
//! ┌──────────────────────────────────────┐
//! │               UnitStore               │
//! │      SQLite file, one connection      │
//! │            per operation              │
//! └──────────────────────────────────────┘
//! ```

mod store;
mod units;

pub use store::*;
pub use units::*;
