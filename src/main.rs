//! Repocat CLI application entry point
//!
//! A terminal host for the browse core. Each run mounts one URL, replays the
//! command-line flags as UI events and prints the resulting page.
//!
//! # Usage
//!
//! ```bash
//! # Browse with the configured catalog (default command)
//! repocat
//! repocat browse --repos repos.json
//!
//! # Start from a shared link, then narrow it down
//! repocat browse --url "/browse-projects?agencies=NASA" -f languages=Python
//!
//! # Search results, filtered and paged the same way
//! repocat search --results hits.json --url "/search?query=mars&licenses=MIT"
//!
//! # Where does a path lead?
//! repocat route /privacy-policy
//! ```
//!
//! # Configuration
//!
//! Defaults live in the user's config directory (`~/.config/repocat/config.toml`
//! on Linux) and can be overridden with `REPOCAT_*` environment variables.
//! Logging goes to stderr and follows `RUST_LOG`.

use repocat::{
    RepocatError,
    browse::AppState,
    catalog::{Catalog, load_repos},
    cli::{Cli, Commands, ViewArgs},
    config::RepocatConfig,
    location::{Location, Route, Scope, share_query},
    output,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

type Result<T> = std::result::Result<T, RepocatError>;

fn init_logging(verbose: bool) {
    let default = if verbose { "repocat=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(cli: &Cli) -> Result<RepocatConfig> {
    let config = match &cli.config {
        Some(path) => RepocatConfig::load_from(path)?,
        None => RepocatConfig::load()?,
    };
    Ok(config)
}

fn repos_path(view: &ViewArgs, config: &RepocatConfig) -> Result<PathBuf> {
    view.repos
        .clone()
        .or_else(|| config.repos_path.clone())
        .ok_or_else(|| {
            RepocatError::InvalidInput(
                "No repository list given. Use --repos or set repos_path in the config".to_string(),
            )
        })
}

/// Mount the URL, replay flag events and print the page for `scope`
fn show(
    scope: Scope,
    view: &ViewArgs,
    results: Option<PathBuf>,
    config: &RepocatConfig,
    quiet: bool,
) -> Result<()> {
    let mut state = AppState::new(config.browse_params());
    state.mount(&Location::parse(view.url_or_default(scope)));

    let repos = repos_path(view, config)?;
    let facets = view.facets.clone().or_else(|| config.facets_path.clone());
    state.set_catalog(Catalog::load(&repos, facets.as_deref())?);

    if scope == Scope::Search {
        // The backend ranks results itself; the query is only shown.
        let query = state.take_pending_query();
        if let Some(query) = query.filter(|_| !quiet && !view.json) {
            println!("Results for \"{query}\"");
        }
        let hits = match results {
            Some(path) => load_repos(&path)?,
            None => state.catalog().map(|c| c.repos.clone()).unwrap_or_default(),
        };
        state.set_search_results(hits);
    }

    for event in view.events()? {
        state.handle(scope, event);
    }

    let page = state.view(scope);
    if view.json {
        println!("{}", serde_json::to_string_pretty(&page)?);
    } else {
        for line in output::render_view(&page, view.show_facets, quiet) {
            println!("{line}");
        }
    }

    if view.share {
        let query = share_query(&state.scope(scope).selections);
        let route = match scope {
            Scope::Browse => Route::BrowseProjects,
            Scope::Search => Route::Search,
        };
        if query.is_empty() {
            println!("{}", route.path());
        } else {
            println!("{}?{query}", route.path());
        }
    }

    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let quiet = cli.quiet || config.quiet;

    match cli.get_command() {
        Commands::Browse(view) => show(Scope::Browse, &view, None, &config, quiet),
        Commands::Search { view, results } => show(Scope::Search, &view, results, &config, quiet),
        Commands::Route { path } => {
            let location = Location::parse(&path);
            let route = location.route();
            if quiet {
                println!("{}", route.path());
            } else {
                println!("{} -> {}", location.path, route.path());
            }
            Ok(())
        }
    }
}

fn main() {
    let cli = Cli::parse_args();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
