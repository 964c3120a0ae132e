use super::*;

const RENDERED_MARKER: &str = "Key takeaways";
const CELLS_MARKER: &str = "Load + shape data";
const NOTES_MARKER: &str = "How to review";

fn render_panel(tab: NotebookTab) -> String {
    Owner::new().with(|| notebook_panel(tab).to_html())
}

fn markers(html: &str) -> [bool; 3] {
    [html.contains(RENDERED_MARKER), html.contains(CELLS_MARKER), html.contains(NOTES_MARKER)]
}

#[test]
fn section_mounts_only_default_panel() {
    let html = Owner::new().with(|| view! { <NotebookSection/> }.to_html());
    assert_eq!(markers(&html), [true, false, false]);
    assert_eq!(html.matches("role=\"tabpanel\"").count(), 1);
    assert!(html.contains("aria-labelledby=\"notebook-tab-render\""));
}

#[test]
fn each_tab_renders_only_its_panel() {
    assert_eq!(markers(&render_panel(NotebookTab::Rendered)), [true, false, false]);
    assert_eq!(markers(&render_panel(NotebookTab::Cells)), [false, true, false]);
    assert_eq!(markers(&render_panel(NotebookTab::Notes)), [false, false, true]);
}

#[test]
fn cells_panel_lists_every_code_cell() {
    let html = render_panel(NotebookTab::Cells);
    assert!(html.contains("Baseline forecast (moving average)"));
    assert!(html.contains("2.78  # MAE (synthetic)"));
}

#[test]
fn section_renders_all_tab_buttons() {
    let html = Owner::new().with(|| view! { <NotebookSection/> }.to_html());
    for tab in NotebookTab::ALL {
        assert!(html.contains(&format!("notebook-tab-{}", tab.slug())));
    }
}
