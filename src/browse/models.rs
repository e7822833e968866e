//! Data models for browse functionality
//!
//! These are pure data structures with minimal logic. `BrowseParams` is the
//! pagination/sort input of a projection; `ViewState` and its parts are the
//! render-ready output.

use crate::catalog::Repository;
use crate::filters::Category;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Sorting
// ============================================================================

/// Closed set of sort orders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    #[serde(rename = "best_match")]
    BestMatch,
    #[serde(rename = "data_quality")]
    DataQuality,
    #[serde(rename = "a-z")]
    AToZ,
    #[serde(rename = "last_updated")]
    LastUpdated,
}

impl SortKey {
    pub const ALL: [Self; 4] = [
        Self::BestMatch,
        Self::DataQuality,
        Self::AToZ,
        Self::LastUpdated,
    ];

    /// Sort orders offered on the browse page, in display order
    pub const BROWSE_OPTIONS: [Self; 3] = [Self::DataQuality, Self::AToZ, Self::LastUpdated];

    /// Sort orders offered on the search page; relevance comes first
    pub const SEARCH_OPTIONS: [Self; 4] = [
        Self::BestMatch,
        Self::DataQuality,
        Self::AToZ,
        Self::LastUpdated,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BestMatch => "best_match",
            Self::DataQuality => "data_quality",
            Self::AToZ => "a-z",
            Self::LastUpdated => "last_updated",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::BestMatch => "Best Match",
            Self::DataQuality => "Data Quality",
            Self::AToZ => "A-Z",
            Self::LastUpdated => "Last Updated",
        }
    }

    /// Parse a raw sort key, mapping anything unrecognized to `None`
    ///
    /// `None` is the identity order: repositories keep their input order.
    #[must_use]
    pub fn from_key(raw: &str) -> Option<Self> {
        let parsed = raw.parse().ok();
        if parsed.is_none() {
            tracing::warn!(sort = raw, "unrecognized sort key, keeping input order");
        }
        parsed
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s.trim())
            .ok_or_else(|| format!("unknown sort key '{s}'"))
    }
}

// ============================================================================
// Browse parameters
// ============================================================================

/// Pagination and sort state
///
/// `page` is 1-indexed and `size` is positive; both are clamped to 1 when
/// given 0. A `sort` of `None` keeps the input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BrowseParams {
    page: usize,
    size: usize,
    sort: Option<SortKey>,
}

impl BrowseParams {
    pub const DEFAULT_PAGE_SIZE: usize = 10;

    #[must_use]
    pub fn new(page: usize, size: usize, sort: Option<SortKey>) -> Self {
        let mut params = Self {
            page: 1,
            size: 1,
            sort,
        };
        params.set_page(page);
        params.set_size(size);
        params
    }

    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub const fn sort(&self) -> Option<SortKey> {
        self.sort
    }

    pub fn set_page(&mut self, page: usize) {
        if page == 0 {
            tracing::warn!("page 0 requested, clamping to 1");
        }
        self.page = page.max(1);
    }

    pub fn set_size(&mut self, size: usize) {
        if size == 0 {
            tracing::warn!("page size 0 requested, clamping to 1");
        }
        self.size = size.max(1);
    }

    pub const fn set_sort(&mut self, sort: Option<SortKey>) {
        self.sort = sort;
    }

    /// Index of the first item on the current page
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.size)
    }
}

impl Default for BrowseParams {
    fn default() -> Self {
        Self::new(1, Self::DEFAULT_PAGE_SIZE, Some(SortKey::DataQuality))
    }
}

// ============================================================================
// View state
// ============================================================================

/// One facet checkbox
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckBox {
    pub name: String,
    pub value: String,
    pub checked: bool,
}

/// Checkbox lists per category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Boxes {
    pub agencies: Vec<CheckBox>,
    pub languages: Vec<CheckBox>,
    pub licenses: Vec<CheckBox>,
    pub usage_types: Vec<CheckBox>,
}

impl Boxes {
    #[must_use]
    pub fn get(&self, category: Category) -> &[CheckBox] {
        match category {
            Category::Agencies => &self.agencies,
            Category::Languages => &self.languages,
            Category::Licenses => &self.licenses,
            Category::UsageTypes => &self.usage_types,
        }
    }

    pub(crate) fn set(&mut self, category: Category, boxes: Vec<CheckBox>) {
        match category {
            Category::Agencies => self.agencies = boxes,
            Category::Languages => self.languages = boxes,
            Category::Licenses => self.licenses = boxes,
            Category::UsageTypes => self.usage_types = boxes,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        Category::ALL.iter().all(|c| self.get(*c).is_empty())
    }
}

/// A removable chip for one active selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterTag {
    pub category: Category,
    /// Facet display label, or the raw value when no facet matches
    pub label: String,
    /// Normalized selected value
    pub value: String,
}

/// One entry of the sort dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortOption {
    pub label: &'static str,
    pub value: SortKey,
    pub selected: bool,
}

/// Render-ready output of a projection
///
/// `search_results` is `None` while facets or repositories are not loaded yet,
/// which is distinct from `Some(vec![])` (loaded, zero matches).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState<'a> {
    pub boxes: Boxes,
    pub filter_tags: Vec<FilterTag>,
    pub search_results: Option<Vec<&'a Repository>>,
    /// Match count after filtering, before pagination
    pub total: usize,
    pub sort_options: Vec<SortOption>,
    pub params: BrowseParams,
}

impl ViewState<'_> {
    /// Number of pages needed to show `total` results
    #[must_use]
    pub const fn page_count(&self) -> usize {
        self.total.div_ceil(self.params.size())
    }
}
