use super::*;

// =============================================================
// SnippetTab
// =============================================================

#[test]
fn snippet_tab_default_is_excel() {
    assert_eq!(SnippetTab::default(), SnippetTab::Excel);
}

#[test]
fn snippet_tab_shows_exactly_one_snippet() {
    for tab in SnippetTab::ALL {
        let shown = tab.snippet();
        let others: Vec<_> = SnippetTab::ALL.iter().filter(|t| **t != tab).map(|t| t.snippet()).collect();
        assert_eq!(others.len(), 1);
        assert_ne!(shown, others[0]);
    }
}

#[test]
fn snippet_tabs_map_to_expected_titles() {
    assert_eq!(SnippetTab::Excel.snippet().title, "Example Excel formula (LET + SUMIFS)");
    assert_eq!(SnippetTab::Vba.snippet().title, "Example VBA macro (refresh + export)");
}

#[test]
fn snippet_toggle_alternates() {
    let mut tab = SnippetTab::default();
    assert!(select(&mut tab, SnippetTab::Vba));
    assert_eq!(tab.snippet().title, VBA_SNIPPET.title);
    assert!(select(&mut tab, SnippetTab::Excel));
    assert_eq!(tab.snippet().title, EXCEL_SNIPPET.title);
}

// =============================================================
// NotebookTab
// =============================================================

#[test]
fn notebook_tab_default_is_rendered() {
    assert_eq!(NotebookTab::default(), NotebookTab::Rendered);
}

#[test]
fn notebook_tab_labels_and_slugs_are_distinct() {
    let labels: Vec<_> = NotebookTab::ALL.iter().map(|t| t.label()).collect();
    assert_eq!(labels, ["Rendered", "Cells", "Recruiter notes"]);
    let slugs: Vec<_> = NotebookTab::ALL.iter().map(|t| t.slug()).collect();
    assert_eq!(slugs, ["render", "cells", "notes"]);
}

#[test]
fn every_notebook_tab_reachable_in_one_step() {
    for from in NotebookTab::ALL {
        for to in NotebookTab::ALL {
            let mut tab = from;
            let changed = select(&mut tab, to);
            assert_eq!(tab, to);
            assert_eq!(changed, from != to);
        }
    }
}

#[test]
fn reselecting_same_tab_is_noop() {
    let mut tab = NotebookTab::Cells;
    assert!(!select(&mut tab, NotebookTab::Cells));
    assert!(!select(&mut tab, NotebookTab::Cells));
    assert_eq!(tab, NotebookTab::Cells);
}

// =============================================================
// tab_button_class
// =============================================================

#[test]
fn tab_button_class_marks_active_variant() {
    assert_eq!(tab_button_class(true), "btn btn--primary");
    assert_eq!(tab_button_class(false), "btn btn--secondary");
}
