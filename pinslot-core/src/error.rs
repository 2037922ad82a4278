//! Error types for pinslot
//!
//! The controller itself is fail-soft: malformed events are dropped rather
//! than reported. These errors cover construction, configuration and the
//! event script format.

use thiserror::Error;

/// Main error type for the pinslot crates
#[derive(Error, Debug)]
pub enum PinslotError {
    /// Errors related to configuration loading/parsing
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Errors related to controller construction and slot access
    #[error("Slot error: {0}")]
    Slot(#[from] SlotError),

    /// Errors found while parsing an event script
    #[error("Script error: {0}")]
    Script(#[from] ScriptError),

    /// Generic I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing errors
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization errors
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration file: {path}")]
    LoadFailed { path: String },

    #[error("Failed to save configuration file: {path}")]
    SaveFailed { path: String },

    #[error("Configuration validation error: {message}")]
    ValidationError { message: String },

    #[error("I/O error: {message}")]
    IoError { message: String },
}

/// Controller construction and slot access errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlotError {
    #[error("Slot count must be at least 1")]
    ZeroSlots,

    #[error("Slot index {index} is out of range for {slot_count} slots")]
    IndexOutOfRange { index: usize, slot_count: usize },
}

/// Event script parsing errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: missing {argument} argument")]
    MissingArgument { line: usize, argument: String },

    #[error("line {line}: invalid slot index '{value}'")]
    InvalidIndex { line: usize, value: String },

    #[error("line {line}: unexpected argument '{value}'")]
    UnexpectedArgument { line: usize, value: String },
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, PinslotError>;
