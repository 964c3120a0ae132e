//! One-of-N selections for the tabbed panels.
//!
//! DESIGN
//! ======
//! Each selection is a `Copy` enum held in an `RwSignal` by the component
//! that renders it. Any variant is reachable from any other in one step and
//! there is no terminal state. `select` reports whether anything changed so
//! callers can skip notifying subscribers on a reselect.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use content::{EXCEL_SNIPPET, Snippet, VBA_SNIPPET};

/// Which snippet the Excel/VBA panel shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SnippetTab {
    #[default]
    Excel,
    Vba,
}

impl SnippetTab {
    pub const ALL: [Self; 2] = [Self::Excel, Self::Vba];

    pub fn label(self) -> &'static str {
        match self {
            Self::Excel => "Excel",
            Self::Vba => "VBA",
        }
    }

    /// The single snippet rendered for this tab.
    pub fn snippet(self) -> &'static Snippet {
        match self {
            Self::Excel => &EXCEL_SNIPPET,
            Self::Vba => &VBA_SNIPPET,
        }
    }
}

/// Tabs of the notebook viewer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotebookTab {
    #[default]
    Rendered,
    Cells,
    Notes,
}

impl NotebookTab {
    pub const ALL: [Self; 3] = [Self::Rendered, Self::Cells, Self::Notes];

    pub fn label(self) -> &'static str {
        match self {
            Self::Rendered => "Rendered",
            Self::Cells => "Cells",
            Self::Notes => "Recruiter notes",
        }
    }

    /// DOM id suffix, also used for `aria-controls`.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Rendered => "render",
            Self::Cells => "cells",
            Self::Notes => "notes",
        }
    }
}

/// Move `current` to `next`. Returns `false` when it was already selected.
pub fn select<T: Copy + PartialEq>(current: &mut T, next: T) -> bool {
    if *current == next {
        return false;
    }
    *current = next;
    true
}

/// Button variant class for a tab trigger.
pub fn tab_button_class(active: bool) -> &'static str {
    if active { "btn btn--primary" } else { "btn btn--secondary" }
}
