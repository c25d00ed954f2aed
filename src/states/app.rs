//! Application State
//!
//! Persisted UI preferences (theme, locale, window bounds) and the global
//! store that hands entities to the views.

use crate::error::Result;
use crate::helpers::{PREFERENCES_FILE_NAME, get_or_create_config_dir};
use crate::states::UnitsState;
use gpui::{Action, App, AppContext, Bounds, Context, Entity, Global, Pixels};
use gpui_component::ThemeMode;
use locale_config::Locale;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{error, info};

// ==================== Actions ====================

/// Theme selection action
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum ThemeAction {
    Light,
    Dark,
    System,
}

/// Locale selection action
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum LocaleAction {
    En,
    Zh,
}

impl LocaleAction {
    pub fn code(self) -> &'static str {
        match self {
            LocaleAction::En => "en",
            LocaleAction::Zh => "zh",
        }
    }
}

// ==================== Persisted State ====================

const LIGHT_THEME_MODE: &str = "light";
const DARK_THEME_MODE: &str = "dark";
const SUPPORTED_LOCALES: &[&str] = &["en", "zh"];

fn get_config_path() -> Result<PathBuf> {
    let config_dir = get_or_create_config_dir()?;
    Ok(config_dir.join(PREFERENCES_FILE_NAME))
}

/// Persisted application state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnitsAppState {
    locale: Option<String>,
    bounds: Option<Bounds<Pixels>>,
    theme: Option<String>,
}

impl UnitsAppState {
    /// Load state from the config directory
    pub fn try_load() -> Result<Self> {
        Self::load_from(&get_config_path()?)
    }

    /// Load state from `path`. A missing or blank file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        info!(path = ?path, "Loading preferences file");

        let value = if path.exists() {
            std::fs::read_to_string(path)?
        } else {
            String::new()
        };

        let mut state: Self = if value.trim().is_empty() {
            Self::new()
        } else {
            toml::from_str(&value).map_err(|e| {
                error!(error = %e, path = ?path, "Failed to parse preferences file");
                e
            })?
        };

        // Detect system locale if not set
        if state.locale.as_ref().is_none_or(|l| l.is_empty()) {
            state.locale = Some(system_locale());
        }

        Ok(state)
    }

    /// Write state to `path` as TOML
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let value = toml::to_string(self)?;
        std::fs::write(path, value)?;
        Ok(())
    }

    /// Create new default state
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Getters ====================

    pub fn bounds(&self) -> Option<&Bounds<Pixels>> {
        self.bounds.as_ref()
    }

    pub fn theme(&self) -> Option<ThemeMode> {
        match self.theme.as_deref() {
            Some(LIGHT_THEME_MODE) => Some(ThemeMode::Light),
            Some(DARK_THEME_MODE) => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    pub fn locale(&self) -> &str {
        self.locale.as_deref().unwrap_or("en")
    }

    // ==================== Setters ====================

    pub fn set_bounds(&mut self, bounds: Bounds<Pixels>) {
        self.bounds = Some(bounds);
    }

    pub fn set_theme(&mut self, theme: Option<ThemeMode>) {
        self.theme = match theme {
            Some(ThemeMode::Light) => Some(LIGHT_THEME_MODE.to_string()),
            Some(ThemeMode::Dark) => Some(DARK_THEME_MODE.to_string()),
            _ => None,
        };
    }

    pub fn set_locale(&mut self, locale: String) {
        self.locale = Some(locale);
    }
}

/// Language part of the system locale, if it has a catalogue
fn system_locale() -> String {
    let current = Locale::current().to_string();
    let lang = current.split(['-', '_']).next().unwrap_or_default();
    if SUPPORTED_LOCALES.contains(&lang) {
        lang.to_string()
    } else {
        "en".to_string()
    }
}

// ==================== Global Store ====================

/// Global store accessible via `cx.global::<UnitsGlobalStore>()`
#[derive(Clone)]
pub struct UnitsGlobalStore {
    app_state: Entity<UnitsAppState>,
    units_state: Entity<UnitsState>,
}

impl UnitsGlobalStore {
    /// Create a new global store
    pub fn new(app_state: Entity<UnitsAppState>, units_state: Entity<UnitsState>) -> Self {
        Self {
            app_state,
            units_state,
        }
    }

    /// Get the units state entity
    pub fn units_state(&self) -> Entity<UnitsState> {
        self.units_state.clone()
    }

    /// Read app state
    pub fn read<'a>(&self, cx: &'a App) -> &'a UnitsAppState {
        self.app_state.read(cx)
    }

    /// Update app state
    pub fn update<R, C: AppContext>(
        &self,
        cx: &mut C,
        update: impl FnOnce(&mut UnitsAppState, &mut Context<UnitsAppState>) -> R,
    ) -> C::Result<R> {
        self.app_state.update(cx, update)
    }
}

impl Global for UnitsGlobalStore {}

// ==================== Persistence ====================

/// Save app state to disk
pub fn save_app_state(state: &UnitsAppState) -> Result<()> {
    state.save_to(&get_config_path()?)
}

/// Update app state and save to disk asynchronously
pub fn update_app_state_and_save<F>(cx: &App, action_name: &'static str, mutation: F)
where
    F: FnOnce(&mut UnitsAppState, &App) + Send + 'static + Clone,
{
    let store = cx.global::<UnitsGlobalStore>().clone();

    cx.spawn(async move |cx| {
        // Step 1: Update global state
        let current_state = store.update(cx, |state, cx| {
            mutation(state, cx);
            state.clone()
        });

        // Step 2: Persist to disk in background
        if let Ok(state) = current_state {
            cx.background_executor()
                .spawn(async move {
                    if let Err(e) = save_app_state(&state) {
                        error!(error = %e, action = action_name, "Failed to save state");
                    } else {
                        info!(action = action_name, "State saved successfully");
                    }
                })
                .await;
        }

        // Step 3: Refresh windows
        cx.update(|cx| cx.refresh_windows()).ok();
    })
    .detach();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let state = UnitsAppState::load_from(&dir.path().join("absent.toml")).expect("load");

        assert!(state.theme().is_none());
        assert!(state.bounds().is_none());
        assert!(SUPPORTED_LOCALES.contains(&state.locale()));
    }

    #[test]
    fn test_preferences_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(PREFERENCES_FILE_NAME);

        let mut state = UnitsAppState::new();
        state.set_locale("zh".to_string());
        state.set_theme(Some(ThemeMode::Dark));
        state.save_to(&path).expect("save");

        let loaded = UnitsAppState::load_from(&path).expect("load");
        assert_eq!(loaded.locale(), "zh");
        assert_eq!(loaded.theme(), Some(ThemeMode::Dark));
    }

    #[test]
    fn test_system_theme_is_stored_as_absent() {
        let mut state = UnitsAppState::new();
        state.set_theme(Some(ThemeMode::Light));
        state.set_theme(None);
        assert!(state.theme().is_none());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(PREFERENCES_FILE_NAME);
        std::fs::write(&path, "locale = [").expect("write");

        assert!(matches!(
            UnitsAppState::load_from(&path),
            Err(Error::TomlDe { .. })
        ));
    }
}
