//! Unified error type for onstep-config
//!
//! Every fallible operation of the store, the preset codec and the renderer
//! reports through [`ConfigError`].

use std::fmt;

use crate::preset::PresetFormat;

/// Unified error type for onstep-config
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Lookup of a key that was never seeded nor written
    UnknownKey { key: String },
    /// The renderer's fixed key list references a key absent from the store
    MissingOption { key: String },
    /// Malformed preset content
    DecodeFailed { format: PresetFormat, message: String },
    /// Preset serialization error
    EncodeFailed { format: PresetFormat, message: String },
    /// Preset file name without a `.json` or `.csv` suffix
    UnsupportedFormat { name: String },
    /// File I/O error while reading a preset
    FileRead { path: String, message: String },
    /// File I/O error while writing a preset
    FileWrite { path: String, message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownKey { key } => {
                write!(f, "Unknown option '{}'", key)
            }
            ConfigError::MissingOption { key } => {
                write!(f, "Option '{}' is referenced by the config template but missing from the store", key)
            }
            ConfigError::DecodeFailed { format, message } => {
                write!(f, "Failed to decode {} preset: {}", format, message)
            }
            ConfigError::EncodeFailed { format, message } => {
                write!(f, "Failed to encode {} preset: {}", format, message)
            }
            ConfigError::UnsupportedFormat { name } => {
                write!(f, "Unsupported preset file '{}', expected a .json or .csv file", name)
            }
            ConfigError::FileRead { path, message } => {
                write!(f, "Failed to read preset file '{}': {}", path, message)
            }
            ConfigError::FileWrite { path, message } => {
                write!(f, "Failed to write preset file '{}': {}", path, message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
