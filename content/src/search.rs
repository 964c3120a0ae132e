//! Case-insensitive substring filter over project cards.
//!
//! The filter is a pure function of `(query, projects)` and is recomputed on
//! every keystroke. The list is small and fixed, so there is no index, no
//! ranking and no debouncing.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use crate::projects::Project;

/// Return the projects whose folded haystack contains the folded query.
///
/// A blank query (empty or whitespace only) keeps every project. Order is
/// always the input order.
#[must_use]
pub fn filter_projects<'a>(query: &str, projects: &'a [Project]) -> Vec<&'a Project> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return projects.iter().collect();
    }
    projects
        .iter()
        .filter(|project| project.haystack().contains(&needle))
        .collect()
}

/// Label for the result-count pill next to the search box.
#[must_use]
pub fn shown_label(count: usize) -> String {
    format!("{count} shown")
}
