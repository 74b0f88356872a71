//! Domain error types

use thiserror::Error;

/// Interval string that is not `ms`/`s`/`m` components
#[derive(Debug, Clone, Error)]
#[error("Invalid interval: \"{input}\". Expected format: <number>ms, <number>s, <number>m or a combination (e.g., 500ms, 3s, 1m30s)")]
pub struct DurationParseError {
    pub input: String,
}

/// Error when parsing a `#rrggbb` color
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid color: \"{input}\". Expected #rrggbb")]
pub struct ColorParseError {
    pub input: String,
}

/// Toast backend name outside the known set
#[derive(Debug, Clone, Error)]
#[error("Invalid toast backend: \"{input}\". Valid backends are: desktop, terminal, none")]
pub struct InvalidToastBackendError {
    pub input: String,
}

/// Config file failures
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Cannot read config: {0}")]
    ReadError(String),

    #[error("Config is not valid TOML: {0}")]
    ParseError(String),

    #[error("Cannot write config: {0}")]
    WriteError(String),

    #[error("Bad value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config already exists at {0}")]
    AlreadyExists(String),
}
