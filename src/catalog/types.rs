//! Catalog data structures
//!
//! Repositories and facets arrive already parsed from an upstream data source.
//! Field names follow the upstream JSON (`usageType`, `lastModified`, ...) via
//! serde renames; nothing in this crate mutates a loaded `Repository`.

use crate::filters::Category;
use crate::normalize::normalize;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// A single open-source repository in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repository {
    /// Display name
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Owning agency
    pub agency: Agency,

    /// Programming languages used by the repository
    #[serde(default)]
    pub languages: Vec<String>,

    /// Usage type and licenses
    #[serde(default)]
    pub permissions: Permissions,

    #[serde(default)]
    pub date: RepoDate,

    /// Precomputed data-quality score
    #[serde(default)]
    pub score: Option<f64>,

    /// Relevance ranking supplied by the search backend
    #[serde(default)]
    pub search_score: Option<f64>,
}

/// Agency that published a repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agency {
    pub acronym: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Permissions {
    /// e.g. `openSource`, `governmentWideReuse`, `exemptByLaw`
    #[serde(default)]
    pub usage_type: String,
    #[serde(default)]
    pub licenses: Vec<License>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// Creation and modification timestamps
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoDate {
    #[serde(default, deserialize_with = "lenient_date")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient_date")]
    pub last_modified: Option<DateTime<Utc>>,
}

/// Accept RFC 3339 timestamps or plain `YYYY-MM-DD` dates; anything else is absent
fn lenient_date<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_date))
}

/// Parse a catalog date string
#[must_use]
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

impl Repository {
    /// Create a repository with the required attributes and empty metadata
    #[must_use]
    pub fn new(name: impl Into<String>, agency_acronym: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            agency: Agency {
                acronym: agency_acronym.into(),
                name: String::new(),
            },
            languages: Vec::new(),
            permissions: Permissions::default(),
            date: RepoDate::default(),
            score: None,
            search_score: None,
        }
    }

    #[must_use]
    pub fn has_license(&self) -> bool {
        !self.permissions.licenses.is_empty()
    }
}

/// One selectable value of a filter category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetEntry {
    /// Display label
    pub name: String,
    /// Raw value; compared against selections after normalization
    pub value: String,
}

impl FacetEntry {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Available filter choices per category, independent of selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Facets {
    #[serde(default)]
    pub agencies: Vec<FacetEntry>,
    #[serde(default)]
    pub languages: Vec<FacetEntry>,
    #[serde(default)]
    pub licenses: Vec<FacetEntry>,
    #[serde(default)]
    pub usage_types: Vec<FacetEntry>,
}

impl Facets {
    /// Entries for a category, in their supplied order
    #[must_use]
    pub fn get(&self, category: Category) -> &[FacetEntry] {
        match category {
            Category::Agencies => &self.agencies,
            Category::Languages => &self.languages,
            Category::Licenses => &self.licenses,
            Category::UsageTypes => &self.usage_types,
        }
    }

    /// Display label for a normalized selection value, if a facet entry matches it
    #[must_use]
    pub fn label_for(&self, category: Category, value: &str) -> Option<&str> {
        self.get(category)
            .iter()
            .find(|entry| normalize(&entry.value) == value)
            .map(|entry| entry.name.as_str())
    }

    /// Build facets from the distinct attribute values of a repository list
    ///
    /// Used when no facet list is supplied. Values are deduplicated by their
    /// normalized form (first spelling wins) and sorted case-insensitively.
    #[must_use]
    pub fn derive(repos: &[Repository]) -> Self {
        let mut agencies = BTreeMap::new();
        let mut languages = BTreeMap::new();
        let mut licenses = BTreeMap::new();
        let mut usage_types = BTreeMap::new();

        for repo in repos {
            let label = if repo.agency.name.is_empty() {
                repo.agency.acronym.clone()
            } else {
                repo.agency.name.clone()
            };
            insert_entry(&mut agencies, &repo.agency.acronym, label);

            for lang in &repo.languages {
                insert_entry(&mut languages, lang, lang.clone());
            }
            for license in &repo.permissions.licenses {
                insert_entry(&mut licenses, &license.name, license.name.clone());
            }
            let usage = &repo.permissions.usage_type;
            insert_entry(&mut usage_types, usage, usage.clone());
        }

        Self {
            agencies: agencies.into_values().collect(),
            languages: languages.into_values().collect(),
            licenses: licenses.into_values().collect(),
            usage_types: usage_types.into_values().collect(),
        }
    }
}

fn insert_entry(map: &mut BTreeMap<String, FacetEntry>, value: &str, label: String) {
    let key = normalize(value);
    if key.is_empty() {
        return;
    }
    map.entry(key)
        .or_insert_with(|| FacetEntry::new(label, value.trim()));
}
