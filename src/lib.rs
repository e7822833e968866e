//! Repocat - browse an open-source repository catalog
//!
//! This library filters, sorts and paginates a catalog of repositories by
//! agency, language, license and usage type. It reads initial filters from
//! a URL and projects application state into render-ready view state.

use thiserror::Error;

pub mod browse;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod filters;
pub mod location;
pub mod normalize;
pub mod output;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum RepocatError {
    /// Catalog data could not be loaded
    #[error("Catalog error: {0}")]
    CatalogError(#[from] catalog::CatalogError),
    /// Filter given on the command line is malformed
    #[error("Filter error: {0}")]
    FilterError(#[from] filters::FilterError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// JSON output could not be produced
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
