//! Filter selection data structures
//!
//! - `Category`: the four filterable repository attributes
//! - `FilterSelections`: the normalized values chosen per category
//! - `FilterChange`: a single add/remove transition on a selection

use super::error::FilterError;
use crate::normalize::normalize;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Filterable repository attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Agencies,
    Languages,
    Licenses,
    UsageTypes,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Self; 4] = [
        Self::Agencies,
        Self::Languages,
        Self::Licenses,
        Self::UsageTypes,
    ];

    /// Key used in URLs and serialized state
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Agencies => "agencies",
            Self::Languages => "languages",
            Self::Licenses => "licenses",
            Self::UsageTypes => "usageTypes",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "agencies" => Ok(Self::Agencies),
            "languages" => Ok(Self::Languages),
            "licenses" => Ok(Self::Licenses),
            "usageTypes" | "usage_types" | "usage-types" => Ok(Self::UsageTypes),
            other => Err(FilterError::UnknownCategory(other.to_string())),
        }
    }
}

/// Whether a change adds or removes a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Add,
    Remove,
}

/// A single transition on one category's selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterChange {
    pub category: Category,
    pub value: String,
    pub kind: ChangeKind,
}

impl FilterChange {
    #[must_use]
    pub fn add(category: Category, value: impl Into<String>) -> Self {
        Self {
            category,
            value: value.into(),
            kind: ChangeKind::Add,
        }
    }

    #[must_use]
    pub fn remove(category: Category, value: impl Into<String>) -> Self {
        Self {
            category,
            value: value.into(),
            kind: ChangeKind::Remove,
        }
    }
}

impl FromStr for FilterChange {
    type Err = FilterError;

    /// Parse `category=value` into an add change
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (category, value) = s
            .split_once('=')
            .ok_or_else(|| FilterError::MalformedChange(s.to_string()))?;
        let value = value.trim();
        if value.is_empty() {
            return Err(FilterError::MalformedChange(s.to_string()));
        }
        Ok(Self::add(category.parse()?, value))
    }
}

/// Values chosen per category
///
/// Every stored value is normalized on the way in, and each category keeps
/// insertion order without duplicates. An empty category means "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawSelections")]
pub struct FilterSelections {
    agencies: Vec<String>,
    languages: Vec<String>,
    licenses: Vec<String>,
    usage_types: Vec<String>,
}

/// Selections as they appear on the wire, before normalization
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSelections {
    #[serde(default)]
    agencies: Vec<String>,
    #[serde(default)]
    languages: Vec<String>,
    #[serde(default)]
    licenses: Vec<String>,
    #[serde(default)]
    usage_types: Vec<String>,
}

impl From<RawSelections> for FilterSelections {
    fn from(raw: RawSelections) -> Self {
        let mut selections = Self::new();
        selections.add_all(Category::Agencies, raw.agencies);
        selections.add_all(Category::Languages, raw.languages);
        selections.add_all(Category::Licenses, raw.licenses);
        selections.add_all(Category::UsageTypes, raw.usage_types);
        selections
    }
}

impl FilterSelections {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected values for a category, in selection order
    #[must_use]
    pub fn get(&self, category: Category) -> &[String] {
        match category {
            Category::Agencies => &self.agencies,
            Category::Languages => &self.languages,
            Category::Licenses => &self.licenses,
            Category::UsageTypes => &self.usage_types,
        }
    }

    const fn values_mut(&mut self, category: Category) -> &mut Vec<String> {
        match category {
            Category::Agencies => &mut self.agencies,
            Category::Languages => &mut self.languages,
            Category::Licenses => &mut self.licenses,
            Category::UsageTypes => &mut self.usage_types,
        }
    }

    /// Whether the normalized form of `value` is selected
    #[must_use]
    pub fn contains(&self, category: Category, value: &str) -> bool {
        let value = normalize(value);
        self.get(category).contains(&value)
    }

    /// Add a value; returns `false` if it was already present or empty
    pub fn add(&mut self, category: Category, value: &str) -> bool {
        let value = normalize(value);
        let values = self.values_mut(category);
        if value.is_empty() || values.contains(&value) {
            return false;
        }
        values.push(value);
        true
    }

    /// Add several values, keeping the ones already selected
    ///
    /// Returns the number of values that were newly added.
    pub fn add_all<I, S>(&mut self, category: Category, values: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        values
            .into_iter()
            .filter(|v| self.add(category, v.as_ref()))
            .count()
    }

    /// Remove a value; returns `false` if it was not present
    pub fn remove(&mut self, category: Category, value: &str) -> bool {
        let value = normalize(value);
        let values = self.values_mut(category);
        let before = values.len();
        values.retain(|v| *v != value);
        values.len() != before
    }

    /// Apply an add/remove transition; returns whether the selection changed
    pub fn apply(&mut self, change: &FilterChange) -> bool {
        match change.kind {
            ChangeKind::Add => self.add(change.category, &change.value),
            ChangeKind::Remove => self.remove(change.category, &change.value),
        }
    }

    /// Whether no category has an active selection
    #[must_use]
    pub fn is_empty(&self) -> bool {
        Category::ALL.iter().all(|c| self.get(*c).is_empty())
    }

    /// Total number of selected values across all categories
    #[must_use]
    pub fn len(&self) -> usize {
        Category::ALL.iter().map(|c| self.get(*c).len()).sum()
    }
}
