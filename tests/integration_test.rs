//! Integration tests for repocat
//!
//! These tests load catalog files from a temporary directory and drive the
//! full mount → event → projection workflow through the public API.

use repocat::{
    browse::{AppState, BrowseEvent, BrowseParams, SortKey},
    catalog::Catalog,
    filters::Category,
    location::{Location, Scope, UrlParams, share_query},
};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const REPOS_JSON: &str = r#"{
  "repos": [
    {
      "name": "Open MCT",
      "agency": { "acronym": "NASA", "name": "National Aeronautics and Space Administration" },
      "languages": ["JavaScript", "Vue"],
      "permissions": { "usageType": "openSource", "licenses": [{ "name": "Apache-2.0" }] },
      "date": { "lastModified": "2024-05-01T12:00:00Z" },
      "score": 9.5
    },
    {
      "name": "code-gov",
      "agency": { "acronym": "GSA", "name": "General Services Administration" },
      "languages": ["JavaScript"],
      "permissions": { "usageType": "governmentWideReuse", "licenses": [{ "name": "CC0-1.0" }] },
      "date": { "lastModified": "2023-01-15" },
      "score": 7.0
    },
    {
      "name": "fprime",
      "agency": { "acronym": "NASA" },
      "languages": ["C++", "Python"],
      "permissions": { "usageType": "openSource", "licenses": [] },
      "date": { "lastModified": "not a date" },
      "score": 8.25
    },
    {
      "name": "classified-tool",
      "agency": { "acronym": "DOD" },
      "languages": ["Python"],
      "permissions": { "usageType": "exemptByLaw", "licenses": [{ "name": "MIT" }] },
      "score": 10.0
    }
  ]
}"#;

const FACETS_JSON: &str = r#"{
  "agencies": [
    { "name": "National Aeronautics and Space Administration", "value": "NASA" },
    { "name": "General Services Administration", "value": "GSA" },
    { "name": "Department of Defense", "value": "DOD" }
  ],
  "languages": [
    { "name": "JavaScript", "value": "JavaScript" },
    { "name": "Python", "value": "Python" }
  ],
  "licenses": [
    { "name": "Apache License 2.0", "value": "Apache-2.0" }
  ],
  "usageTypes": [
    { "name": "Open Source", "value": "openSource" }
  ]
}"#;

/// Helper to write the sample catalog into a temporary directory
fn write_catalog(dir: &Path) -> (PathBuf, PathBuf) {
    let repos = dir.join("repos.json");
    let facets = dir.join("facets.json");
    fs::write(&repos, REPOS_JSON).unwrap();
    fs::write(&facets, FACETS_JSON).unwrap();
    (repos, facets)
}

fn loaded_state(dir: &TempDir, url: &str) -> AppState {
    let (repos, facets) = write_catalog(dir.path());
    let mut state = AppState::new(BrowseParams::default());
    state.mount(&Location::parse(url));
    state.set_catalog(Catalog::load(&repos, Some(&facets)).unwrap());
    state
}

fn names(state: &AppState, scope: Scope) -> Vec<String> {
    state
        .view(scope)
        .search_results
        .unwrap_or_default()
        .iter()
        .map(|repo| repo.name.clone())
        .collect()
}

#[test]
fn test_browse_defaults_sort_by_data_quality_and_hide_exempt() {
    let dir = TempDir::new().unwrap();
    let state = loaded_state(&dir, "/browse-projects");

    assert_eq!(names(&state, Scope::Browse), ["Open MCT", "fprime", "code-gov"]);
    assert_eq!(state.browse_view().total, 3);
}

#[test]
fn test_shared_link_preselects_filters_and_chips() {
    let dir = TempDir::new().unwrap();
    let state = loaded_state(&dir, "https://code.gov/browse-projects?agencies=nasa&languages=Python");

    let view = state.browse_view();
    assert_eq!(view.total, 1);
    assert_eq!(names(&state, Scope::Browse), ["fprime"]);

    let labels: Vec<_> = view.filter_tags.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, ["National Aeronautics and Space Administration", "Python"]);

    let nasa = view
        .boxes
        .get(Category::Agencies)
        .iter()
        .find(|b| b.value == "NASA")
        .unwrap();
    assert!(nasa.checked);
}

#[test]
fn test_license_filter_excludes_unlicensed() {
    let dir = TempDir::new().unwrap();
    let mut state = loaded_state(&dir, "/browse-projects");

    state.handle(
        Scope::Browse,
        BrowseEvent::FilterBoxChanged {
            category: Category::Agencies,
            value: "NASA".into(),
            checked: true,
        },
    );
    state.handle(
        Scope::Browse,
        BrowseEvent::FilterBoxChanged {
            category: Category::Licenses,
            value: "apache-2.0".into(),
            checked: true,
        },
    );

    assert_eq!(names(&state, Scope::Browse), ["Open MCT"]);
}

#[test]
fn test_explicit_exempt_selection_still_hidden() {
    let dir = TempDir::new().unwrap();
    let state = loaded_state(&dir, "/browse-projects?agencies=DOD");

    let view = state.browse_view();
    assert_eq!(view.total, 0);
    assert_eq!(view.search_results.map(|r| r.len()), Some(0));
}

#[test]
fn test_sort_and_paging_events() {
    let dir = TempDir::new().unwrap();
    let mut state = loaded_state(&dir, "/browse-projects");

    state.handle(Scope::Browse, BrowseEvent::PageSizeChanged(2));
    state.handle(Scope::Browse, BrowseEvent::PageChanged(2));
    assert_eq!(names(&state, Scope::Browse), ["code-gov"]);

    state.handle(Scope::Browse, BrowseEvent::SortChanged(SortKey::from_key("a-z")));
    assert_eq!(state.browse.params.page(), 1);
    assert_eq!(names(&state, Scope::Browse), ["code-gov", "fprime"]);

    state.handle(Scope::Browse, BrowseEvent::SortChanged(Some(SortKey::LastUpdated)));
    assert_eq!(names(&state, Scope::Browse), ["Open MCT", "code-gov"]);
}

#[test]
fn test_unknown_sort_keeps_catalog_order() {
    let dir = TempDir::new().unwrap();
    let mut state = loaded_state(&dir, "/browse-projects");

    state.handle(Scope::Browse, BrowseEvent::SortChanged(SortKey::from_key("stars")));
    assert_eq!(names(&state, Scope::Browse), ["Open MCT", "code-gov", "fprime"]);
    assert!(state.browse_view().sort_options.iter().all(|o| !o.selected));
}

#[test]
fn test_search_mount_and_results() {
    let dir = TempDir::new().unwrap();
    let mut state = loaded_state(&dir, "/search?query=%20mission%20&languages=javascript");

    assert!(state.browse.selections.is_empty());
    assert_eq!(state.take_pending_query().as_deref(), Some("mission"));
    assert!(state.search_view().search_results.is_none());

    let mut hits = state.catalog().unwrap().repos.clone();
    hits[1].search_score = Some(3.0);
    hits[0].search_score = Some(1.0);
    state.set_search_results(hits);

    assert_eq!(names(&state, Scope::Search), ["code-gov", "Open MCT"]);
}

#[test]
fn test_chip_removal_round_trips_through_share_link() {
    let dir = TempDir::new().unwrap();
    let mut state = loaded_state(&dir, "/browse-projects?agencies=NASA,GSA&licenses=");

    let query = share_query(&state.browse.selections);
    let reparsed = UrlParams::parse(&query);
    assert_eq!(
        reparsed.values(Category::Agencies),
        Some(["nasa".to_string(), "gsa".to_string()].as_slice())
    );

    let chip = state.browse_view().filter_tags[0].clone();
    state.handle(
        Scope::Browse,
        BrowseEvent::FilterTagClicked {
            category: chip.category,
            value: chip.value,
        },
    );
    assert_eq!(state.browse.selections.get(Category::Agencies), ["gsa"]);
    assert_eq!(names(&state, Scope::Browse), ["code-gov"]);
}

#[test]
fn test_missing_catalog_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let result = Catalog::load(&dir.path().join("missing.json"), None);
    assert!(result.is_err());
}
