//! View-state projection
//!
//! [`project`] is the single place where selections, facets, the repository
//! list and browse parameters meet. It is a pure function: the same inputs
//! always give the same `ViewState`, and nothing is mutated.

use super::filter::matches;
use super::models::{Boxes, BrowseParams, CheckBox, SortKey, SortOption, ViewState};
use super::sort::sort_repos;
use super::tags::build_tags;
use crate::catalog::{Facets, Repository};
use crate::filters::{Category, FilterSelections};
use crate::normalize::normalize;

/// Project state into render-ready view state
///
/// 1. Without facets, `boxes` is empty and `search_results` is `None`.
/// 2. Without repositories, `search_results` is `None`.
/// 3. Otherwise repositories are sorted by `params.sort`, filtered by the
///    selections (exempt repositories always dropped), counted into `total`,
///    and sliced to the requested page. A page past the end is empty.
#[must_use]
pub fn project<'a>(
    selections: &FilterSelections,
    facets: Option<&Facets>,
    repos: Option<&'a [Repository]>,
    params: &BrowseParams,
) -> ViewState<'a> {
    let boxes = facets.map(|f| build_boxes(f, selections)).unwrap_or_default();

    let (search_results, total) = match (facets, repos) {
        (Some(_), Some(repos)) => {
            let mut ordered: Vec<&Repository> = repos.iter().collect();
            sort_repos(&mut ordered, params.sort());

            let filtered: Vec<&Repository> = ordered
                .into_iter()
                .filter(|repo| matches(repo, selections))
                .collect();
            let total = filtered.len();

            let page: Vec<&Repository> = filtered
                .into_iter()
                .skip(params.offset())
                .take(params.size())
                .collect();

            tracing::debug!(
                repos = repos.len(),
                total,
                page = params.page(),
                shown = page.len(),
                "projected browse view"
            );
            (Some(page), total)
        }
        _ => {
            tracing::debug!(
                facets_loaded = facets.is_some(),
                repos_loaded = repos.is_some(),
                "catalog not ready, skipping filtering"
            );
            (None, 0)
        }
    };

    ViewState {
        boxes,
        filter_tags: build_tags(selections, facets),
        search_results,
        total,
        sort_options: sort_options(&SortKey::BROWSE_OPTIONS, params.sort()),
        params: *params,
    }
}

/// Checkbox lists with `checked` set from the selections
#[must_use]
pub fn build_boxes(facets: &Facets, selections: &FilterSelections) -> Boxes {
    let mut boxes = Boxes::default();
    for category in Category::ALL {
        let selected = selections.get(category);
        let entries = facets
            .get(category)
            .iter()
            .map(|entry| CheckBox {
                name: entry.name.clone(),
                value: entry.value.clone(),
                checked: selected.contains(&normalize(&entry.value)),
            })
            .collect();
        boxes.set(category, entries);
    }
    boxes
}

/// Sort dropdown entries for `offered`, with the active one marked
#[must_use]
pub fn sort_options(offered: &[SortKey], selected: Option<SortKey>) -> Vec<SortOption> {
    offered
        .iter()
        .map(|&key| SortOption {
            label: key.label(),
            value: key,
            selected: selected == Some(key),
        })
        .collect()
}
