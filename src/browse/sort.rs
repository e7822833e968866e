//! Repository sort strategies
//!
//! Each strategy is a plain comparator over two repositories. The sort key
//! enum maps to its comparator through [`COMPARATORS`]; sorting is always
//! stable, so ties keep their input order.

use super::models::SortKey;
use crate::catalog::Repository;
use std::cmp::Ordering;

/// Comparator over two repositories
pub type Comparator = fn(&Repository, &Repository) -> Ordering;

/// Lookup table from sort key to comparator
pub const COMPARATORS: [(SortKey, Comparator); 4] = [
    (SortKey::BestMatch, by_best_match as Comparator),
    (SortKey::DataQuality, by_data_quality as Comparator),
    (SortKey::AToZ, by_name as Comparator),
    (SortKey::LastUpdated, by_last_updated as Comparator),
];

/// Comparator for a sort key
#[must_use]
pub fn comparator_for(key: SortKey) -> Comparator {
    COMPARATORS
        .iter()
        .find(|(k, _)| *k == key)
        .map_or(identity as Comparator, |(_, cmp)| *cmp)
}

/// Sort in place by the given key; `None` leaves the order untouched
pub fn sort_repos(repos: &mut [&Repository], key: Option<SortKey>) {
    if let Some(key) = key {
        let cmp = comparator_for(key);
        repos.sort_by(|a, b| cmp(a, b));
    }
}

/// Every pair compares equal, so a stable sort keeps input order
#[must_use]
pub const fn identity(_a: &Repository, _b: &Repository) -> Ordering {
    Ordering::Equal
}

/// Descending by the relevance ranking supplied by search
#[must_use]
pub fn by_best_match(a: &Repository, b: &Repository) -> Ordering {
    descending(a.search_score, b.search_score)
}

/// Descending by data-quality score
#[must_use]
pub fn by_data_quality(a: &Repository, b: &Repository) -> Ordering {
    descending(a.score, b.score)
}

/// Case-insensitive ascending by name
#[must_use]
pub fn by_name(a: &Repository, b: &Repository) -> Ordering {
    a.name.to_lowercase().cmp(&b.name.to_lowercase())
}

/// Most recently modified first; undated repositories last
#[must_use]
pub fn by_last_updated(a: &Repository, b: &Repository) -> Ordering {
    match (a.date.last_modified, b.date.last_modified) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

// missing scores count as 0.0
fn descending(a: Option<f64>, b: Option<f64>) -> Ordering {
    b.unwrap_or(0.0).total_cmp(&a.unwrap_or(0.0))
}
