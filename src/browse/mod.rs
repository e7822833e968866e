//! Browse module - filter, sort and paginate the catalog
//!
//! This module turns filter selections and a repository list into the
//! render-ready state of the browse and search pages. It is UI-agnostic:
//! any frontend feeds events in and renders the `ViewState` it gets back.
//!
//! # Architecture
//!
//! - `models`: Core data types (`BrowseParams`, `SortKey`, `ViewState`, ...)
//! - `sort`: Comparators and the sort-key lookup table
//! - `filter`: Per-repository selection matching
//! - `tags`: Filter chip construction
//! - `project`: The pure state → view projection
//! - `actions`: UI event → state update mapping
//! - `session`: Application state driven by the host

pub mod actions;
pub mod filter;
pub mod models;
pub mod project;
pub mod session;
pub mod sort;
pub mod tags;

pub use actions::{BrowseEvent, ParamsUpdate, StateUpdate, dispatch};
pub use filter::{EXEMPT_MARKER, RepoKeys, matches};
pub use models::{Boxes, BrowseParams, CheckBox, FilterTag, SortKey, SortOption, ViewState};
pub use project::{build_boxes, project, sort_options};
pub use session::{AppState, ScopeState};
pub use sort::{Comparator, comparator_for, sort_repos};
pub use tags::build_tags;
