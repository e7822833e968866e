//! Output formatting for CLI display
//!
//! Renders a projected `ViewState` as plain lines for the terminal. Quiet
//! mode prints repository names only, one per line, for scripting.

use crate::browse::{CheckBox, FilterTag, SortOption, ViewState};
use crate::catalog::Repository;
use crate::filters::Category;
use colored::Colorize;

/// Format a repository as a single result line
#[must_use]
pub fn repo_line(repo: &Repository, quiet: bool) -> String {
    if quiet {
        return repo.name.clone();
    }

    let mut line = format!("  {} [{}]", repo.name.bold(), repo.agency.acronym);
    if !repo.languages.is_empty() {
        line.push_str(&format!(" {}", repo.languages.join(", ").cyan()));
    }
    if let Some(updated) = repo.date.last_modified {
        line.push_str(&format!(" {}", updated.format("%Y-%m-%d").to_string().dimmed()));
    }
    line
}

/// Format active filter chips, e.g. `agencies: NASA ×`
#[must_use]
pub fn tags_line(tags: &[FilterTag]) -> Option<String> {
    if tags.is_empty() {
        return None;
    }
    let chips: Vec<String> = tags
        .iter()
        .map(|tag| format!("{}: {} ×", tag.category, tag.label.yellow()))
        .collect();
    Some(format!("Filters: {}", chips.join("  ")))
}

/// Format the sort dropdown with the selected entry highlighted
#[must_use]
pub fn sort_line(options: &[SortOption]) -> String {
    let labels: Vec<String> = options
        .iter()
        .map(|option| {
            if option.selected {
                format!("[{}]", option.label).green().to_string()
            } else {
                option.label.to_string()
            }
        })
        .collect();
    format!("Sort: {}", labels.join(" | "))
}

/// Format one category's checkboxes
#[must_use]
pub fn boxes_line(category: Category, boxes: &[CheckBox]) -> String {
    let entries: Vec<String> = boxes
        .iter()
        .map(|b| {
            let mark = if b.checked { "[x]" } else { "[ ]" };
            format!("{mark} {}", b.name)
        })
        .collect();
    format!("{category}: {}", entries.join("  "))
}

/// Render a full view
///
/// When results are not available yet a single loading line is printed
/// instead of an empty result list.
#[must_use]
pub fn render_view(view: &ViewState<'_>, show_facets: bool, quiet: bool) -> Vec<String> {
    let Some(results) = view.search_results.as_ref() else {
        return if quiet {
            Vec::new()
        } else {
            vec!["Catalog not loaded yet".dimmed().to_string()]
        };
    };

    if quiet {
        return results.iter().map(|repo| repo_line(repo, true)).collect();
    }

    let mut lines = Vec::new();
    if show_facets {
        for category in Category::ALL {
            let boxes = view.boxes.get(category);
            if !boxes.is_empty() {
                lines.push(boxes_line(category, boxes));
            }
        }
    }
    if let Some(tags) = tags_line(&view.filter_tags) {
        lines.push(tags);
    }
    lines.push(sort_line(&view.sort_options));

    if results.is_empty() {
        lines.push("No repositories match the selected filters".to_string());
        return lines;
    }

    let first = view.params.offset() + 1;
    let last = view.params.offset() + results.len();
    lines.push(format!("Showing {first}-{last} of {} repositories", view.total));
    lines.extend(results.iter().map(|repo| repo_line(repo, false)));
    lines.push(
        format!("Page {} of {}", view.params.page(), view.page_count())
            .dimmed()
            .to_string(),
    );
    lines
}
