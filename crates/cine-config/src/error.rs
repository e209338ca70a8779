//! Error types for cine configuration.

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use toml::de;

use crate::MAX_WEIGHT;

/// Errors that can occur when loading or processing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to parse TOML configuration.
    #[error("failed to parse config file {path}: {source}")]
    ParseToml {
        /// Path to the file that could not be parsed.
        path: PathBuf,
        /// Underlying TOML parse error.
        source: de::Error,
    },

    /// Failed to determine home directory.
    #[error("could not determine home directory")]
    NoHomeDirectory,

    /// A field weight is negative or too large.
    #[error("invalid weight {value} for field '{field}' in {path}: weights must be between 0 and {max}", max = MAX_WEIGHT)]
    InvalidWeight {
        /// Config file declaring the weight.
        path: PathBuf,
        /// Field name as written in the file.
        field: String,
        /// The rejected value.
        value: i64,
    },
}
