//! Error types for vimrly-core

use thiserror::Error;

/// Result type alias for vimrly operations
pub type Result<T> = std::result::Result<T, VimrlyError>;

/// Result type returned by every editor driver operation
pub type DriverResult<T> = std::result::Result<T, DriverError>;

/// Main error type for vimrly operations
#[derive(Error, Debug)]
pub enum VimrlyError {
    /// Configuration errors
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Host message errors
    #[error("Message error: {0}")]
    Message(String),

    /// The session runner has stopped
    #[error("Session closed")]
    SessionClosed,
}

/// Failures reported by an editor driver.
///
/// None of these are fatal: the dispatcher logs them and carries on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DriverError {
    /// The embedded editor surface could not be located
    #[error("Editor surface unavailable")]
    EditorUnavailable,

    /// Clipboard access was refused or failed
    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("TOML parse error: {0}")]
    Parse(String),

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err.to_string())
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

/// A mode name outside the known set
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown mode: {0}")]
pub struct ParseModeError(pub String);

impl From<serde_json::Error> for VimrlyError {
    fn from(err: serde_json::Error) -> Self {
        VimrlyError::Message(err.to_string())
    }
}
