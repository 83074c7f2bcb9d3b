//! Domain error types

use thiserror::Error;

/// Error when parsing a poll interval string
#[derive(Debug, Clone, Error)]
#[error("Invalid interval: \"{input}\". Expected <number>ms, <number>s or <number>s<number>ms of at least 50ms (e.g., 250ms, 1s, 1s500ms)")]
pub struct IntervalParseError {
    pub input: String,
}

/// Error when an accelerator string cannot be parsed
#[derive(Debug, Clone, Error)]
#[error("Invalid accelerator: \"{input}\". {reason}")]
pub struct AcceleratorParseError {
    pub input: String,
    pub reason: String,
}

/// Error when a display entry describes an unusable work area
#[derive(Debug, Clone, Error)]
#[error("Invalid display {id}: {reason}")]
pub struct DisplayConfigError {
    pub id: u32,
    pub reason: String,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
