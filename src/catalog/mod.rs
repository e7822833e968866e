//! Repository catalog data and loading
//!
//! The catalog is the read-only input of every projection: the full list of
//! repositories plus the facet list describing which filter values exist.
//! Both are fetched once and held for the session.
//!
//! # Storage
//!
//! Repositories are read from JSON, either as a bare array or wrapped in the
//! upstream browse envelope `{ "total": n, "repos": [...] }`. Facets are read
//! from a JSON object keyed by `agencies`, `languages`, `licenses` and
//! `usageTypes`.

pub mod error;
pub mod types;

pub use error::CatalogError;
pub use types::{Agency, FacetEntry, Facets, License, Permissions, RepoDate, Repository, parse_date};

use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Repository list and facets held for a session
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub repos: Vec<Repository>,
    pub facets: Option<Facets>,
}

impl Catalog {
    #[must_use]
    pub const fn new(repos: Vec<Repository>, facets: Option<Facets>) -> Self {
        Self { repos, facets }
    }

    /// Load repositories and, if given, facets from JSON files
    ///
    /// When `facets_path` is `None` the facets are derived from the
    /// repositories themselves.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if either file cannot be read or parsed.
    pub fn load(repos_path: &Path, facets_path: Option<&Path>) -> Result<Self, CatalogError> {
        let repos = load_repos(repos_path)?;
        let facets = match facets_path {
            Some(path) => load_facets(path)?,
            None => Facets::derive(&repos),
        };
        tracing::debug!(
            repos = repos.len(),
            derived_facets = facets_path.is_none(),
            "catalog loaded"
        );
        Ok(Self::new(repos, Some(facets)))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RepoDocument {
    List(Vec<Repository>),
    Envelope { repos: Vec<Repository> },
}

/// Parse a repository list from a JSON string
///
/// # Errors
///
/// Returns `CatalogError::Json` if the document is neither an array of
/// repositories nor a `{ "repos": [...] }` envelope.
pub fn parse_repos(json: &str) -> Result<Vec<Repository>, CatalogError> {
    let doc: RepoDocument = serde_json::from_str(json)?;
    Ok(match doc {
        RepoDocument::List(repos) | RepoDocument::Envelope { repos } => repos,
    })
}

/// Read a repository list from a JSON file
///
/// # Errors
///
/// Returns `CatalogError` if the file cannot be read or parsed.
pub fn load_repos(path: &Path) -> Result<Vec<Repository>, CatalogError> {
    let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_repos(&content)
}

/// Read a facet list from a JSON file
///
/// # Errors
///
/// Returns `CatalogError` if the file cannot be read or parsed.
pub fn load_facets(path: &Path) -> Result<Facets, CatalogError> {
    let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const REPOS: &str = r#"[
        { "name": "alpha", "agency": { "acronym": "NASA" }, "languages": ["Python"] },
        { "name": "beta", "agency": { "acronym": "GSA" } }
    ]"#;

    #[test]
    fn test_parse_repos_bare_array() {
        let repos = parse_repos(REPOS).unwrap();
        assert_eq!(repos.len(), 2);
        assert_eq!(repos[0].name, "alpha");
    }

    #[test]
    fn test_parse_repos_envelope() {
        let json = format!(r#"{{ "total": 2, "repos": {REPOS} }}"#);
        let repos = parse_repos(&json).unwrap();
        assert_eq!(repos.len(), 2);
        assert_eq!(repos[1].agency.acronym, "GSA");
    }

    #[test]
    fn test_parse_repos_rejects_garbage() {
        assert!(matches!(parse_repos("{\"nope\": 1}"), Err(CatalogError::Json(_))));
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let err = load_repos(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }

    #[test]
    fn test_catalog_load_derives_facets_without_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(REPOS.as_bytes()).unwrap();

        let catalog = Catalog::load(file.path(), None).unwrap();
        let facets = catalog.facets.unwrap();
        assert_eq!(facets.agencies.len(), 2);
        assert_eq!(facets.languages, vec![FacetEntry::new("Python", "Python")]);
    }

    #[test]
    fn test_catalog_load_reads_facet_file() {
        let mut repos = NamedTempFile::new().unwrap();
        repos.write_all(REPOS.as_bytes()).unwrap();
        let mut facets = NamedTempFile::new().unwrap();
        facets
            .write_all(br#"{ "usageTypes": [{ "name": "Open Source", "value": "openSource" }] }"#)
            .unwrap();

        let catalog = Catalog::load(repos.path(), Some(facets.path())).unwrap();
        let facets = catalog.facets.unwrap();
        assert!(facets.agencies.is_empty());
        assert_eq!(facets.usage_types[0].name, "Open Source");
    }
}
