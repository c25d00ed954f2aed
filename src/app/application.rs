//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use crate::assets::Assets;
use crate::constants::{
    DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
};
use crate::helpers::{DATABASE_FILE_NAME, MenuAction, database_path, new_key_bindings};
use crate::services::{UnitService, UnitStore};
use crate::states::{UnitsAppState, UnitsGlobalStore, UnitsState};
use crate::views::UnitsWindow;
use gpui::{
    AnyView, App, AppContext, Application, Bounds, SharedString, TitlebarOptions, WindowBounds,
    WindowOptions, px, size,
};
use gpui_component::{Root, Theme, TitleBar};
use std::path::PathBuf;
use tracing::{error, info};

const WINDOW_TITLE: &str = "Units Management System";

/// Run the Units GUI application
pub fn run_app() {
    Application::new().with_assets(Assets).run(|cx: &mut App| {
        gpui_component::init(cx);

        // Set up key bindings and application-level actions
        cx.bind_keys(new_key_bindings());
        cx.on_action(|action: &MenuAction, cx: &mut App| match action {
            MenuAction::Quit => cx.quit(),
        });

        // Quit the app when all windows are closed (macOS behavior)
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let app_state = UnitsAppState::try_load().unwrap_or_else(|e| {
            error!(error = %e, "Failed to load preferences, using defaults");
            UnitsAppState::new()
        });

        let database = database_path().unwrap_or_else(|e| {
            error!(error = %e, "No platform data directory, using working directory");
            PathBuf::from(DATABASE_FILE_NAME)
        });
        info!(path = ?database, "Using units database");

        let theme = app_state.theme();
        let saved_bounds = app_state.bounds().cloned();

        // Initialize global entities
        let app_state = cx.new(|_| app_state);
        let units_state = cx.new(|_| UnitsState::new(UnitService::new(UnitStore::new(database))));
        cx.set_global(UnitsGlobalStore::new(app_state, units_state));

        // Create main window
        let bounds = saved_bounds.unwrap_or_else(|| {
            Bounds::centered(
                None,
                size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)),
                cx,
            )
        });
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            window_min_size: Some(size(px(MIN_WINDOW_WIDTH), px(MIN_WINDOW_HEIGHT))),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from(WINDOW_TITLE)),
                ..TitleBar::title_bar_options()
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |window, cx| {
            match theme {
                Some(mode) => Theme::change(mode, Some(window), cx),
                None => Theme::sync_system_appearance(Some(window), cx),
            }
            let view = cx.new(|cx| UnitsWindow::new(window, cx));
            cx.new(|cx| Root::new(AnyView::from(view), window, cx))
        });

        if let Err(e) = opened {
            error!(error = %e, "Failed to open main window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
