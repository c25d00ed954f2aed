//! File System Utilities
//!
//! Platform directory management for the database, logs, and preferences.

use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// Fixed database file name
pub const DATABASE_FILE_NAME: &str = "units.db";

/// Preferences file name inside the config directory
pub const PREFERENCES_FILE_NAME: &str = "units-gui.toml";

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "units", "units-gui").ok_or_else(|| Error::Invalid {
        message: "Could not determine project directories".to_string(),
    })
}

/// Create `dir` (and parents) if it does not exist yet
pub fn ensure_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Get or create the application's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/units-gui/` or `$XDG_CONFIG_HOME/units-gui/`
/// - **macOS**: `~/Library/Application Support/com.units.units-gui/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\units\units-gui\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    let project_dirs = project_dirs()?;
    let config_dir = project_dirs.config_dir();
    ensure_dir(config_dir)?;
    Ok(config_dir.to_path_buf())
}

/// Get or create the data directory holding the database and logs
///
/// Platform-specific locations:
/// - **Linux**: `~/.local/share/units-gui/`
/// - **macOS**: `~/Library/Application Support/com.units.units-gui/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\units\units-gui\data\`
pub fn get_or_create_data_dir() -> Result<PathBuf> {
    let project_dirs = project_dirs()?;
    let data_dir = project_dirs.data_dir();
    ensure_dir(data_dir)?;
    Ok(data_dir.to_path_buf())
}

/// Full path of the units database
pub fn database_path() -> Result<PathBuf> {
    Ok(get_or_create_data_dir()?.join(DATABASE_FILE_NAME))
}

/// Directory for rolling log files
pub fn log_dir() -> Result<PathBuf> {
    let dir = get_or_create_data_dir()?.join("logs");
    ensure_dir(&dir)?;
    Ok(dir)
}
