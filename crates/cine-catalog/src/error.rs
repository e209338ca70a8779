//! Error types for the movie catalog.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur when loading or querying the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Failed to read a catalog file.
    #[error("failed to read catalog {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The catalog file is not a valid JSON array of records.
    #[error("failed to parse catalog {path}: {source}")]
    Parse {
        /// Path to the file that could not be parsed.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// No record carries the requested identifier.
    #[error("record not found: {id}")]
    NotFound {
        /// The identifier that was looked up.
        id: String,
    },
}
