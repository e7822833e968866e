//! Error types for catalog loading

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading repository or facet data
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The data file could not be read
    #[error("Failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The data file is not valid catalog JSON
    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}
