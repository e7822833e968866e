//! Testing utilities for repocat
//!
//! Fixture builders for repositories and facets used across unit tests.
//!
//! Only available when compiled with `cfg(test)`.

use crate::catalog::{FacetEntry, Facets, License, Repository};

/// Bare repository with a name and agency acronym
pub fn repo(name: &str, agency: &str) -> Repository {
    Repository::new(name, agency)
}

/// Repository with languages and a usage type
pub fn repo_with(name: &str, agency: &str, languages: &[&str], usage_type: &str) -> Repository {
    let mut repo = Repository::new(name, agency);
    repo.languages = languages.iter().map(ToString::to_string).collect();
    repo.permissions.usage_type = usage_type.to_string();
    repo
}

/// Attach licenses to a repository
pub fn licensed(mut repo: Repository, licenses: &[&str]) -> Repository {
    repo.permissions.licenses = licenses
        .iter()
        .map(|name| License {
            name: (*name).to_string(),
            url: None,
        })
        .collect();
    repo
}

/// `count` open-source NASA repositories named `repo-00`, `repo-01`, ...
pub fn numbered(count: usize) -> Vec<Repository> {
    (0..count)
        .map(|i| repo_with(&format!("repo-{i:02}"), "NASA", &["Python"], "openSource"))
        .collect()
}

/// Small facet list covering every category
pub fn sample_facets() -> Facets {
    Facets {
        agencies: vec![
            FacetEntry::new("National Aeronautics and Space Administration", "NASA"),
            FacetEntry::new("General Services Administration", "GSA"),
        ],
        languages: vec![
            FacetEntry::new("Python", "Python"),
            FacetEntry::new("Go", "Go"),
        ],
        licenses: vec![FacetEntry::new("MIT License", "MIT")],
        usage_types: vec![
            FacetEntry::new("Open Source", "openSource"),
            FacetEntry::new("Government-Wide Reuse", "governmentWideReuse"),
        ],
    }
}
