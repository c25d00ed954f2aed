//! Internationalization Helpers
//!
//! Provides convenient functions for translating strings based on current locale.

use super::UnitsGlobalStore;
use gpui::{App, SharedString};
use rust_i18n::t;

/// Get translated string from "common" namespace
pub fn i18n_common(cx: &App, key: &str) -> SharedString {
    let locale = cx.global::<UnitsGlobalStore>().read(cx).locale();
    t!(format!("common.{key}"), locale = locale).into()
}

/// Get translated string from "units" namespace
pub fn i18n_units(cx: &App, key: &str) -> SharedString {
    let locale = cx.global::<UnitsGlobalStore>().read(cx).locale();
    t!(format!("units.{key}"), locale = locale).into()
}
