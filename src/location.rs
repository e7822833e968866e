//! URL handling: query-parameter reading, route resolution, share links
//!
//! On first mount the current location is read once into filter intents:
//!
//! - browse paths (containing `browse-projects`) merge `agencies`,
//!   `languages` and `licenses` into the browse selections;
//! - search paths (containing `search`) merge the same three into the search
//!   selections and forward a non-empty `query` as the initial search.
//!
//! Absent parameters produce no intent, so existing selections are never
//! cleared by URL reading. Unrecognized parameters are ignored.

use crate::filters::{Category, FilterSelections};
use crate::normalize::normalize_list;
use serde::Serialize;
use url::Url;
use url::form_urlencoded;

/// Query parameters that carry filter selections
pub const URL_CATEGORIES: [Category; 3] =
    [Category::Agencies, Category::Languages, Category::Licenses];

/// Path and query string of the current page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub query: String,
}

impl Location {
    #[must_use]
    pub fn new(path: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: query.into(),
        }
    }

    /// Parse an absolute URL or a relative `path?query#fragment`
    ///
    /// Never fails: anything unparseable becomes a path with an empty query.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if let Ok(url) = Url::parse(raw) {
            return Self::new(url.path(), url.query().unwrap_or_default());
        }
        let without_fragment = raw.split_once('#').map_or(raw, |(head, _)| head);
        match without_fragment.split_once('?') {
            Some((path, query)) => Self::new(path, query),
            None => Self::new(without_fragment, ""),
        }
    }

    #[must_use]
    pub fn route(&self) -> Route {
        Route::resolve(&self.path)
    }

    #[must_use]
    pub fn is_browse(&self) -> bool {
        self.path.contains("browse-projects")
    }

    #[must_use]
    pub fn is_search(&self) -> bool {
        self.path.contains("search")
    }
}

/// Top-level pages of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    Home,
    BrowseProjects,
    PrivacyPolicy,
    Roadmap,
    Search,
}

impl Route {
    const MOUNTED: [Self; 4] = [
        Self::BrowseProjects,
        Self::PrivacyPolicy,
        Self::Roadmap,
        Self::Search,
    ];

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::BrowseProjects => "/browse-projects",
            Self::PrivacyPolicy => "/privacy-policy",
            Self::Roadmap => "/roadmap",
            Self::Search => "/search",
        }
    }

    /// Resolve a path to its page; unknown paths redirect home
    ///
    /// A route matches its own path and anything nested below it, so
    /// `/search/results` resolves to `Search`.
    #[must_use]
    pub fn resolve(path: &str) -> Self {
        Self::MOUNTED
            .into_iter()
            .find(|route| {
                path.strip_prefix(route.path())
                    .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
            })
            .unwrap_or(Self::Home)
    }
}

/// Filter values and query read from a query string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlParams {
    pub agencies: Option<Vec<String>>,
    pub languages: Option<Vec<String>>,
    pub licenses: Option<Vec<String>>,
    pub query: Option<String>,
}

impl UrlParams {
    /// Parse a query string (with or without a leading `?`)
    ///
    /// Only the first occurrence of each parameter counts. Filter lists are
    /// comma-separated and normalized; a parameter present with no usable
    /// values yields `Some(vec![])`.
    #[must_use]
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut params = Self::default();

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let slot = match key.as_ref() {
                "agencies" => &mut params.agencies,
                "languages" => &mut params.languages,
                "licenses" => &mut params.licenses,
                "query" => {
                    if params.query.is_none() {
                        params.query = Some(value.into_owned());
                    }
                    continue;
                }
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(normalize_list(&value));
            }
        }

        params
    }

    /// Values for a filter category, if the parameter was present
    #[must_use]
    pub fn values(&self, category: Category) -> Option<&[String]> {
        match category {
            Category::Agencies => self.agencies.as_deref(),
            Category::Languages => self.languages.as_deref(),
            Category::Licenses => self.licenses.as_deref(),
            Category::UsageTypes => None,
        }
    }

    /// The search query if it has any non-whitespace content
    #[must_use]
    pub fn search_query(&self) -> Option<&str> {
        self.query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
    }
}

/// Which selection set an intent targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Browse,
    Search,
}

/// State change requested by the initial URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MountIntent {
    /// Add these values to a category (never replaces existing ones)
    MergeFilters {
        scope: Scope,
        category: Category,
        values: Vec<String>,
    },
    /// Run the search page's initial query
    InitialSearch(String),
}

/// Read the intents implied by a location
#[must_use]
pub fn mount_intents(location: &Location) -> Vec<MountIntent> {
    let params = UrlParams::parse(&location.query);
    let mut intents = Vec::new();

    let merge_into = |scope: Scope, intents: &mut Vec<MountIntent>| {
        for category in URL_CATEGORIES {
            if let Some(values) = params.values(category) {
                intents.push(MountIntent::MergeFilters {
                    scope,
                    category,
                    values: values.to_vec(),
                });
            }
        }
    };

    if location.is_browse() {
        merge_into(Scope::Browse, &mut intents);
    }
    if location.is_search() {
        if let Some(query) = params.search_query() {
            intents.push(MountIntent::InitialSearch(query.to_string()));
        }
        merge_into(Scope::Search, &mut intents);
    }

    tracing::debug!(
        path = %location.path,
        intents = intents.len(),
        "read intents from url"
    );
    intents
}

/// Serialize the URL-carried selections back into a query string
///
/// The result parses back to the same agency, language and license
/// selections via [`UrlParams::parse`].
#[must_use]
pub fn share_query(selections: &FilterSelections) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for category in URL_CATEGORIES {
        let values = selections.get(category);
        if !values.is_empty() {
            serializer.append_pair(category.as_str(), &values.join(","));
        }
    }
    serializer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_parse_relative_and_absolute() {
        let loc = Location::parse("/browse-projects?agencies=NASA#top");
        assert_eq!(loc, Location::new("/browse-projects", "agencies=NASA"));

        let loc = Location::parse("https://code.gov/search?query=rockets");
        assert_eq!(loc, Location::new("/search", "query=rockets"));

        let loc = Location::parse("/roadmap");
        assert_eq!(loc, Location::new("/roadmap", ""));
    }

    #[test]
    fn test_route_resolution() {
        assert_eq!(Route::resolve("/"), Route::Home);
        assert_eq!(Route::resolve("/browse-projects"), Route::BrowseProjects);
        assert_eq!(Route::resolve("/search/more"), Route::Search);
        assert_eq!(Route::resolve("/privacy-policy"), Route::PrivacyPolicy);
        assert_eq!(Route::resolve("/roadmap"), Route::Roadmap);
        assert_eq!(Route::resolve("/searching"), Route::Home);
        assert_eq!(Route::resolve("/nowhere"), Route::Home);
    }

    #[test]
    fn test_url_params_parse() {
        let params = UrlParams::parse("?agencies=NASA,%20GSA&languages=Python&utm=x");
        assert_eq!(params.agencies, Some(vec!["nasa".into(), "gsa".into()]));
        assert_eq!(params.languages, Some(vec!["python".into()]));
        assert_eq!(params.licenses, None);
        assert_eq!(params.query, None);
    }

    #[test]
    fn test_url_params_first_occurrence_wins() {
        let params = UrlParams::parse("languages=go&languages=rust");
        assert_eq!(params.languages, Some(vec!["go".into()]));
    }

    #[test]
    fn test_url_params_empty_value_is_present_but_empty() {
        let params = UrlParams::parse("licenses=");
        assert_eq!(params.licenses, Some(vec![]));
    }

    #[test]
    fn test_search_query_requires_content() {
        assert_eq!(UrlParams::parse("query=+space+").search_query(), Some("space"));
        assert_eq!(UrlParams::parse("query=").search_query(), None);
        assert_eq!(UrlParams::parse("").search_query(), None);
    }

    #[test]
    fn test_browse_intents() {
        let loc = Location::parse("/browse-projects?languages=Go&query=ignored");
        assert_eq!(
            mount_intents(&loc),
            vec![MountIntent::MergeFilters {
                scope: Scope::Browse,
                category: Category::Languages,
                values: vec!["go".into()],
            }]
        );
    }

    #[test]
    fn test_search_intents_include_query() {
        let loc = Location::parse("/search?query=satellite&agencies=NASA");
        assert_eq!(
            mount_intents(&loc),
            vec![
                MountIntent::InitialSearch("satellite".into()),
                MountIntent::MergeFilters {
                    scope: Scope::Search,
                    category: Category::Agencies,
                    values: vec!["nasa".into()],
                },
            ]
        );
    }

    #[test]
    fn test_other_paths_produce_nothing() {
        let loc = Location::parse("/roadmap?agencies=NASA");
        assert!(mount_intents(&loc).is_empty());
    }

    #[test]
    fn test_share_query_round_trips() {
        let mut selections = FilterSelections::new();
        selections.add_all(Category::Agencies, ["NASA", "GSA"]);
        selections.add(Category::Licenses, "Apache 2.0");
        selections.add(Category::UsageTypes, "openSource");

        let query = share_query(&selections);
        let params = UrlParams::parse(&query);
        assert_eq!(params.values(Category::Agencies), Some(selections.get(Category::Agencies)));
        assert_eq!(params.values(Category::Licenses), Some(selections.get(Category::Licenses)));
        assert_eq!(params.languages, None);
        assert!(!query.contains("usageTypes"));
    }
}
