//! Repository filtering against active selections
//!
//! A repository's attributes are normalized once into [`RepoKeys`], then
//! checked category by category. Categories combine with AND; values within
//! a category combine with OR.

use crate::catalog::Repository;
use crate::filters::{Category, FilterSelections};
use crate::normalize::{normalize, normalize_all};

/// Usage-type marker for repositories that are never listed
pub const EXEMPT_MARKER: &str = "exempt";

/// Normalized filterable attributes of one repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoKeys {
    pub agency: String,
    pub languages: Vec<String>,
    pub licenses: Vec<String>,
    pub usage_type: String,
}

impl From<&Repository> for RepoKeys {
    fn from(repo: &Repository) -> Self {
        Self {
            agency: normalize(&repo.agency.acronym),
            languages: normalize_all(&repo.languages),
            licenses: repo
                .permissions
                .licenses
                .iter()
                .map(|license| normalize(&license.name))
                .collect(),
            usage_type: normalize(&repo.permissions.usage_type),
        }
    }
}

impl RepoKeys {
    /// Whether the usage type marks the repository as exempt
    #[must_use]
    pub fn is_exempt(&self) -> bool {
        self.usage_type.contains(EXEMPT_MARKER)
    }

    /// Whether this repository passes one category's selection
    ///
    /// An empty selection always passes. A license filter rejects
    /// repositories that carry no license at all.
    #[must_use]
    pub fn passes(&self, category: Category, selected: &[String]) -> bool {
        if selected.is_empty() {
            return true;
        }
        match category {
            Category::Agencies => selected.contains(&self.agency),
            Category::Languages => overlaps(&self.languages, selected),
            Category::Licenses => !self.licenses.is_empty() && overlaps(&self.licenses, selected),
            Category::UsageTypes => selected.contains(&self.usage_type),
        }
    }
}

/// Whether a repository is shown under the given selections
///
/// Exempt repositories are rejected regardless of selections, including an
/// explicit exempt usage-type selection.
#[must_use]
pub fn matches(repo: &Repository, selections: &FilterSelections) -> bool {
    let keys = RepoKeys::from(repo);

    if let Some(category) = Category::ALL
        .into_iter()
        .find(|c| !keys.passes(*c, selections.get(*c)))
    {
        tracing::trace!(repo = %repo.name, %category, "excluded by selection");
        return false;
    }

    if keys.is_exempt() {
        tracing::trace!(repo = %repo.name, "excluded as exempt");
        return false;
    }

    true
}

fn overlaps(values: &[String], selected: &[String]) -> bool {
    values.iter().any(|v| selected.contains(v))
}
