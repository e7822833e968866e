//! Error types for filter input parsing
//!
//! Selections themselves never fail; these errors only surface when a
//! filter is spelled out as text, e.g. `languages=python` on the command line.

use thiserror::Error;

/// Errors that can occur while parsing filter input
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    /// Category name is not one of the known filter categories
    #[error("Unknown filter category '{0}' (expected agencies, languages, licenses or usageTypes)")]
    UnknownCategory(String),

    /// Change is not of the form `category=value`
    #[error("Malformed filter '{0}': expected category=value")]
    MalformedChange(String),
}
