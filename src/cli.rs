//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for repocat using the `clap` crate.
//! The terminal host plays the part of the UI: it reads a URL once, turns
//! flags into UI events, and prints the projected view.
//!
//! # Commands
//!
//! - **browse**: Filter, sort and page through the catalog (default)
//! - **search**: Same view over search-backend results, seeded by `?query=`
//! - **route**: Show which page a path resolves to
//!
//! # Examples
//!
//! ```text
//! repocat browse --repos repos.json --url "/browse-projects?agencies=NASA"
//! repocat browse --repos repos.json --filter languages=Python --sort a-z --page 2
//! repocat search --repos repos.json --url "/search?query=satellite" --json
//! ```

use crate::browse::{BrowseEvent, SortKey};
use crate::filters::{FilterChange, FilterError};
use crate::location::Scope;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Browse an open-source repository catalog
#[derive(Parser, Debug)]
#[command(name = "repocat", version, about)]
pub struct Cli {
    /// Only print repository names
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Show debug logging on stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Use this configuration file instead of the default one
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The subcommand to run, defaulting to `browse` with no options
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or_else(|| Commands::Browse(ViewArgs::default()))
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Filter, sort and page through the catalog
    #[command(visible_alias = "b")]
    Browse(ViewArgs),

    /// Browse search results, seeded from a search URL
    #[command(visible_alias = "s")]
    Search {
        #[command(flatten)]
        view: ViewArgs,

        /// Ranked results from the search backend (defaults to the repository list)
        #[arg(long, value_name = "FILE")]
        results: Option<PathBuf>,
    },

    /// Show which page a path resolves to
    Route {
        /// Path or URL, e.g. /browse-projects?agencies=NASA
        path: String,
    },
}

/// Options shared by the browse and search views
#[derive(Args, Debug, Clone, Default)]
pub struct ViewArgs {
    /// Repository list (JSON array or {"repos": [...]})
    #[arg(long, value_name = "FILE")]
    pub repos: Option<PathBuf>,

    /// Facet list (JSON); derived from the repositories when omitted
    #[arg(long, value_name = "FILE")]
    pub facets: Option<PathBuf>,

    /// Page URL read once on startup, e.g. "/browse-projects?languages=Go"
    #[arg(long)]
    pub url: Option<String>,

    /// Tick a facet checkbox (repeatable), e.g. --filter agencies=NASA
    #[arg(short, long = "filter", value_name = "CATEGORY=VALUE")]
    pub filters: Vec<String>,

    /// Remove a filter chip (repeatable)
    #[arg(short, long = "remove", value_name = "CATEGORY=VALUE")]
    pub removals: Vec<String>,

    /// Sort order: best_match, data_quality, a-z or last_updated
    #[arg(long)]
    pub sort: Option<String>,

    /// Page number (1-based)
    #[arg(long)]
    pub page: Option<usize>,

    /// Results per page
    #[arg(long)]
    pub size: Option<usize>,

    /// Also print the facet checkboxes
    #[arg(long)]
    pub show_facets: bool,

    /// Print the view as JSON
    #[arg(long)]
    pub json: bool,

    /// Print a shareable query string for the active filters
    #[arg(long)]
    pub share: bool,
}

impl ViewArgs {
    /// Turn the flags into UI events, in the order a user would raise them
    ///
    /// Checkbox ticks come first, then chip removals, sort, page size, and
    /// finally the page, so an explicit `--page` survives the page reset that
    /// sort and size changes cause.
    ///
    /// # Errors
    ///
    /// Returns `FilterError` if a `--filter` or `--remove` value is not of
    /// the form `category=value` with a known category.
    pub fn events(&self) -> Result<Vec<BrowseEvent>, FilterError> {
        let mut events = Vec::new();

        for raw in &self.filters {
            let change: FilterChange = raw.parse()?;
            events.push(BrowseEvent::FilterBoxChanged {
                category: change.category,
                value: change.value,
                checked: true,
            });
        }
        for raw in &self.removals {
            let change: FilterChange = raw.parse()?;
            events.push(BrowseEvent::FilterTagClicked {
                category: change.category,
                value: change.value,
            });
        }
        if let Some(sort) = &self.sort {
            events.push(BrowseEvent::SortChanged(SortKey::from_key(sort)));
        }
        if let Some(size) = self.size {
            events.push(BrowseEvent::PageSizeChanged(size));
        }
        if let Some(page) = self.page {
            events.push(BrowseEvent::PageChanged(page));
        }

        Ok(events)
    }

    /// URL to mount, defaulting to the scope's own page
    #[must_use]
    pub fn url_or_default(&self, scope: Scope) -> &str {
        self.url.as_deref().unwrap_or(match scope {
            Scope::Browse => "/browse-projects",
            Scope::Search => "/search",
        })
    }
}
