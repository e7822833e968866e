//! Application state and its update loop
//!
//! [`AppState`] replaces a reactive store: the host owns one value, feeds it
//! UI events or URL intents, and asks for a fresh projection after each
//! change.
//!
//! # Workflow
//!
//! ```text
//! AppState::new(params)
//!     ↓
//! mount(location)        (first call only: URL → selections, initial query)
//!     ↓
//! set_catalog(..)        (repositories + facets from the data source)
//!     ↓
//! ┌─→ browse_view() / search_view()   (pure projection)
//! │       ↓
//! │   UI event → actions::dispatch → handle(scope, event)
//! └───────┘
//! ```

use super::actions::{self, BrowseEvent, ParamsUpdate, StateUpdate};
use super::models::{BrowseParams, SortKey, ViewState};
use super::project::{project, sort_options};
use crate::catalog::{Catalog, Facets, Repository};
use crate::filters::FilterSelections;
use crate::location::{Location, MountIntent, Scope, mount_intents};

/// Selections and pagination for one page (browse or search)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeState {
    pub selections: FilterSelections,
    pub params: BrowseParams,
}

impl ScopeState {
    #[must_use]
    pub fn new(params: BrowseParams) -> Self {
        Self {
            selections: FilterSelections::new(),
            params,
        }
    }

    /// Apply a state update; returns whether anything changed
    pub fn apply(&mut self, update: &StateUpdate) -> bool {
        match update {
            StateUpdate::Filters(change) => self.selections.apply(change),
            StateUpdate::Params(update) => self.apply_params(*update),
        }
    }

    fn apply_params(&mut self, update: ParamsUpdate) -> bool {
        let before = self.params;
        if let Some(sort) = update.sort {
            self.params.set_sort(sort);
        }
        if let Some(size) = update.size {
            self.params.set_size(size);
        }
        if let Some(page) = update.page {
            self.params.set_page(page);
        }
        self.params != before
    }
}

/// Whole-application state owned by the host
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub browse: ScopeState,
    pub search: ScopeState,
    catalog: Option<Catalog>,
    search_results: Option<Vec<Repository>>,
    pending_query: Option<String>,
    mounted: bool,
}

impl AppState {
    /// Empty state; browse uses `params`, search starts on best-match order
    #[must_use]
    pub fn new(params: BrowseParams) -> Self {
        let search_params = BrowseParams::new(1, params.size(), Some(SortKey::BestMatch));
        Self {
            browse: ScopeState::new(params),
            search: ScopeState::new(search_params),
            ..Self::default()
        }
    }

    /// Read the initial location into state
    ///
    /// Runs once; later calls leave state untouched and return `false`.
    pub fn mount(&mut self, location: &Location) -> bool {
        if self.mounted {
            tracing::debug!(path = %location.path, "already mounted, ignoring location");
            return false;
        }
        self.mounted = true;

        for intent in mount_intents(location) {
            match intent {
                MountIntent::MergeFilters {
                    scope,
                    category,
                    values,
                } => {
                    self.scope_mut(scope)
                        .selections
                        .add_all(category, &values);
                }
                MountIntent::InitialSearch(query) => self.pending_query = Some(query),
            }
        }
        true
    }

    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.mounted
    }

    #[must_use]
    pub const fn scope(&self, scope: Scope) -> &ScopeState {
        match scope {
            Scope::Browse => &self.browse,
            Scope::Search => &self.search,
        }
    }

    pub const fn scope_mut(&mut self, scope: Scope) -> &mut ScopeState {
        match scope {
            Scope::Browse => &mut self.browse,
            Scope::Search => &mut self.search,
        }
    }

    /// Dispatch a UI event and apply the resulting update
    pub fn handle(&mut self, scope: Scope, event: BrowseEvent) -> bool {
        let update = actions::dispatch(event);
        tracing::debug!(?scope, ?update, "applying update");
        self.scope_mut(scope).apply(&update)
    }

    pub fn set_catalog(&mut self, catalog: Catalog) {
        self.catalog = Some(catalog);
    }

    #[must_use]
    pub const fn catalog(&self) -> Option<&Catalog> {
        self.catalog.as_ref()
    }

    fn facets(&self) -> Option<&Facets> {
        self.catalog.as_ref().and_then(|c| c.facets.as_ref())
    }

    /// Initial search query read from the URL, consumed by the search backend
    pub fn take_pending_query(&mut self) -> Option<String> {
        self.pending_query.take()
    }

    #[must_use]
    pub fn pending_query(&self) -> Option<&str> {
        self.pending_query.as_deref()
    }

    /// Store results returned by the search backend
    pub fn set_search_results(&mut self, results: Vec<Repository>) {
        self.search_results = Some(results);
    }

    /// Project the browse page
    #[must_use]
    pub fn browse_view(&self) -> ViewState<'_> {
        project(
            &self.browse.selections,
            self.facets(),
            self.catalog.as_ref().map(|c| c.repos.as_slice()),
            &self.browse.params,
        )
    }

    /// Project the search page over the backend's results
    ///
    /// Search offers best-match ordering in its sort dropdown as well.
    #[must_use]
    pub fn search_view(&self) -> ViewState<'_> {
        let mut view = project(
            &self.search.selections,
            self.facets(),
            self.search_results.as_deref(),
            &self.search.params,
        );
        view.sort_options = sort_options(&SortKey::SEARCH_OPTIONS, self.search.params.sort());
        view
    }

    /// Project whichever page a scope refers to
    #[must_use]
    pub fn view(&self, scope: Scope) -> ViewState<'_> {
        match scope {
            Scope::Browse => self.browse_view(),
            Scope::Search => self.search_view(),
        }
    }
}
