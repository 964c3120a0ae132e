use content::{EXCEL_SNIPPET, VBA_SNIPPET};

use super::*;

fn render_block(tab: SnippetTab) -> String {
    Owner::new().with(|| snippet_block(tab).to_html())
}

#[test]
fn panel_shows_excel_snippet_only_by_default() {
    let html = Owner::new().with(|| view! { <SnippetPanel/> }.to_html());
    assert!(html.contains(EXCEL_SNIPPET.title));
    assert!(!html.contains(VBA_SNIPPET.title));
    assert_eq!(html.matches("code-block__body").count(), 1);
}

#[test]
fn each_tab_shows_exactly_one_snippet() {
    for tab in SnippetTab::ALL {
        let html = render_block(tab);
        let shown = [EXCEL_SNIPPET.title, VBA_SNIPPET.title].iter().filter(|t| html.contains(**t)).count();
        assert_eq!(shown, 1);
        assert!(html.contains(tab.snippet().title));
        assert_eq!(html.matches("code-block__body").count(), 1);
    }
}

#[test]
fn panel_renders_both_toggle_buttons() {
    let html = Owner::new().with(|| view! { <SnippetPanel/> }.to_html());
    for tab in SnippetTab::ALL {
        assert!(html.contains(tab.label()));
    }
}
