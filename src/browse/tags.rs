//! Filter chip construction
//!
//! Turns active selections into a flat list of removable chips, labelled
//! from the facet list when possible.

use super::models::FilterTag;
use crate::catalog::Facets;
use crate::filters::{Category, FilterSelections};

/// Build one chip per selected value
///
/// Categories appear in [`Category::ALL`] order and values in selection
/// order. A value with no matching facet entry, or any value while facets are
/// not loaded, is labelled with the value itself.
#[must_use]
pub fn build_tags(selections: &FilterSelections, facets: Option<&Facets>) -> Vec<FilterTag> {
    Category::ALL
        .into_iter()
        .flat_map(|category| {
            selections.get(category).iter().map(move |value| FilterTag {
                category,
                label: facets
                    .and_then(|f| f.label_for(category, value))
                    .unwrap_or(value.as_str())
                    .to_string(),
                value: value.clone(),
            })
        })
        .collect()
}
