//! Units GUI - Main Entry Point
//!
//! Desktop tracker for real-estate units

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, fmt::time::LocalTime, prelude::*};
use units_gui::app::application::run_app;
use units_gui::helpers::log_dir;

const LOG_FILE_NAME: &str = "units-gui.log";

/// Install stdout and rolling-file logging; the guard flushes the file on drop
fn init_logging() -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let (file_layer, guard, dir_error) = match log_dir() {
        Ok(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_NAME);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard), None)
        }
        Err(e) => (None, None, Some(e)),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_timer(LocalTime::rfc_3339()))
        .with(file_layer)
        .init();

    if let Some(e) = dir_error {
        tracing::warn!(error = %e, "File logging disabled");
    }

    guard
}

fn main() {
    let _log_guard = init_logging();

    tracing::info!("Starting Units GUI...");

    // Run the GPUI application
    run_app();
}
