//! Error types for Units-GUI
//!
//! Centralized error handling using snafu for ergonomic error definitions.
//! Form validation failures are not errors; see `domain::form::ValidationError`.

use snafu::Snafu;

/// Main error type for the application
#[derive(Debug, Snafu)]
pub enum Error {
    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// IO error (file operations, directories, etc.)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// SQLite storage fault
    #[snafu(display("Database error: {source}"))]
    Database { source: rusqlite::Error },

    /// A stored value could not be decoded into a domain value
    #[snafu(display("Corrupt record '{unit_id}': {message}"))]
    Decode { unit_id: String, message: String },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },

    /// TOML serialization error
    #[snafu(display("TOML serialize error: {source}"))]
    TomlSe { source: toml::ser::Error },
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<rusqlite::Error> for Error {
    fn from(source: rusqlite::Error) -> Self {
        Error::Database { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

impl From<toml::ser::Error> for Error {
    fn from(source: toml::ser::Error) -> Self {
        Error::TomlSe { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
