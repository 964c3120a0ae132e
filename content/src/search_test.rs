use super::*;
use crate::projects::PROJECTS;

fn titles(found: &[&Project]) -> Vec<&'static str> {
    found.iter().map(|p| p.title).collect()
}

fn is_subsequence(found: &[&Project], all: &[Project]) -> bool {
    let mut rest = all.iter();
    found.iter().all(|f| rest.any(|p| p == *f))
}

#[test]
fn empty_query_returns_all_projects_in_order() {
    let found = filter_projects("", &PROJECTS);
    assert_eq!(found.len(), 3);
    assert_eq!(
        titles(&found),
        PROJECTS.iter().map(|p| p.title).collect::<Vec<_>>()
    );
}

#[test]
fn whitespace_query_returns_all_projects() {
    assert_eq!(filter_projects("   \t ", &PROJECTS).len(), 3);
}

#[test]
fn tableau_matches_forecasting_tag_only() {
    let found = filter_projects("tableau", &PROJECTS);
    assert_eq!(titles(&found), ["Forecasting + decision support dashboard"]);
    assert!(!titles(&found).contains(&"Excel automation pack"));
}

#[test]
fn matching_ignores_case() {
    assert_eq!(filter_projects("ETL", &PROJECTS), filter_projects("etl", &PROJECTS));
    assert_eq!(filter_projects("VbA", &PROJECTS).len(), 1);
}

#[test]
fn query_is_trimmed_before_matching() {
    let found = filter_projects("  excel  ", &PROJECTS);
    assert_eq!(titles(&found), ["Excel automation pack"]);
}

#[test]
fn description_text_is_searched() {
    let found = filter_projects("stakeholders", &PROJECTS);
    assert_eq!(titles(&found), ["Forecasting + decision support dashboard"]);
}

#[test]
fn match_may_span_field_boundary() {
    // title and description are joined with a single space
    let found = filter_projects("pack native", &PROJECTS);
    assert_eq!(titles(&found), ["Excel automation pack"]);
}

#[test]
fn highlights_are_not_searched() {
    assert!(filter_projects("guardrails", &PROJECTS).is_empty());
}

#[test]
fn no_match_yields_empty() {
    assert!(filter_projects("kubernetes", &PROJECTS).is_empty());
}

#[test]
fn results_are_order_preserving_subsequences() {
    for query in ["", "a", "re", "forecast", "automation", "data", "x", "zzz", " SQL "] {
        let found = filter_projects(query, &PROJECTS);
        assert!(is_subsequence(&found, &PROJECTS), "query {query:?}");
    }
}

#[test]
fn shared_word_matches_multiple_projects() {
    // "automation" appears in the ETL tags and the Excel title
    let found = filter_projects("automation", &PROJECTS);
    assert_eq!(
        titles(&found),
        ["ETL + reporting pipeline (template)", "Excel automation pack"]
    );
}

#[test]
fn shown_label_formats_count() {
    assert_eq!(shown_label(3), "3 shown");
    assert_eq!(shown_label(0), "0 shown");
}
