//! Filter selection state
//!
//! This module holds what the user has chosen to filter the catalog by. A
//! selection is a per-category set of normalized values with two idempotent
//! transitions, add and remove.
//!
//! # Examples
//!
//! ```
//! use repocat::filters::{Category, FilterChange, FilterSelections};
//!
//! let mut selections = FilterSelections::new();
//! selections.add(Category::Agencies, "NASA");
//! selections.apply(&FilterChange::add(Category::Languages, "Python"));
//!
//! assert_eq!(selections.get(Category::Agencies), ["nasa"]);
//! assert!(selections.contains(Category::Languages, "python"));
//! ```

pub mod error;
pub mod types;

pub use error::FilterError;
pub use types::{Category, ChangeKind, FilterChange, FilterSelections};
