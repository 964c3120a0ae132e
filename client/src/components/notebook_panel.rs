//! Tabbed notebook viewer: rendered summary, raw cells, reviewer notes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the selected `NotebookTab`. Only the selected panel is mounted;
//! reselecting the current tab does not notify subscribers.

use leptos::prelude::*;

use content::{Icon, NOTEBOOK, NotebookCell};

use crate::components::charts::{DashboardCard, LineChart, demand_series, month_labels};
use crate::components::code_block::{CodeBlock, OutputBlock};
use crate::components::common::SectionTitle;
use crate::state::ui::{NotebookTab, select, tab_button_class};

#[cfg(all(test, feature = "ssr"))]
#[path = "notebook_panel_test.rs"]
mod notebook_panel_test;

pub const NOTEBOOK_ANCHOR: &str = "notebook";

#[component]
pub fn NotebookSection() -> impl IntoView {
    let tab = RwSignal::new(NotebookTab::default());

    view! {
        <section id=NOTEBOOK_ANCHOR class="section">
            <SectionTitle icon=Icon::Code title="Notebook demo" subtitle="Jupyter-style analysis (demo content)"/>
            <div class="card notebook">
                <div class="tabs" role="tablist">
                    {NotebookTab::ALL
                        .into_iter()
                        .map(|t| {
                            view! {
                                <button
                                    role="tab"
                                    id=format!("notebook-tab-{}", t.slug())
                                    aria-controls=format!("notebook-panel-{}", t.slug())
                                    aria-selected=move || if tab.get() == t { "true" } else { "false" }
                                    class=move || tab_button_class(tab.get() == t)
                                    on:click=move |_| {
                                        tab.maybe_update(|current| select(current, t));
                                    }
                                >
                                    {t.label()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                {move || {
                    let current = tab.get();
                    let panel = notebook_panel(current);
                    view! {
                        <div
                            class="tabs__panel"
                            role="tabpanel"
                            id=format!("notebook-panel-{}", current.slug())
                            aria-labelledby=format!("notebook-tab-{}", current.slug())
                        >
                            {panel}
                        </div>
                    }
                }}
            </div>
        </section>
    }
}

/// Body of the selected tab. The other panels are not built at all.
pub fn notebook_panel(tab: NotebookTab) -> AnyView {
    match tab {
        NotebookTab::Rendered => view! { <RenderedPanel/> }.into_any(),
        NotebookTab::Cells => view! { <CellsPanel/> }.into_any(),
        NotebookTab::Notes => view! { <NotesPanel/> }.into_any(),
    }
}

#[component]
fn RenderedPanel() -> impl IntoView {
    view! {
        <div class="stack">
            <div class="note-tile">
                <div class="note-tile__title">"What this shows"</div>
                <div class="note-tile__body">
                    "A typical approach: define the question, shape data, establish a baseline, validate, then package results. Replace this demo with a real notebook export later if you’d like."
                </div>
            </div>
            <div class="grid grid--2">
                <DashboardCard title="Forecast baseline" subtitle="Simple benchmark for validation">
                    <LineChart labels=month_labels() series=vec![demand_series()]/>
                </DashboardCard>
                <div class="card">
                    <div class="note-tile__title">"Key takeaways"</div>
                    <ul class="bullets">
                        <li>"Start with a baseline and document assumptions"</li>
                        <li>"Validate outputs and build trust with stakeholders"</li>
                        <li>"Package analysis into dashboards and changelogs"</li>
                    </ul>
                    <hr class="separator"/>
                    <div class="muted small">
                        "Want a real notebook? Replace demo cells in the NOTEBOOK array and add links to GitHub or a hosted HTML export."
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn CellsPanel() -> impl IntoView {
    view! {
        <div class="stack">
            {NOTEBOOK
                .iter()
                .enumerate()
                .map(|(idx, cell)| match *cell {
                    NotebookCell::Markdown { content } => {
                        view! {
                            <div class="note-tile">
                                <div class="note-tile__label">{cell.kind_label()}</div>
                                <div class="note-tile__markdown">{content}</div>
                            </div>
                        }
                            .into_any()
                    }
                    NotebookCell::Code { content, .. } => {
                        view! { <CodeBlock title=cell.display_title(idx) code=content/> }.into_any()
                    }
                    NotebookCell::Output { content } => view! { <OutputBlock text=content/> }.into_any(),
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[component]
fn NotesPanel() -> impl IntoView {
    view! {
        <div class="grid grid--3">
            <div class="note-tile">
                <div class="note-tile__title">"How to review"</div>
                <div class="note-tile__body">
                    "This page is designed for quick scanning: skills → examples → approach. Recruiters can click CV and reach out."
                </div>
            </div>
            <div class="note-tile">
                <div class="note-tile__title">"What I deliver"</div>
                <ul class="bullets">
                    <li>"Clean, tested datasets and definitions"</li>
                    <li>"Repeatable analysis and forecasts"</li>
                    <li>"Dashboards + stakeholder-ready summaries"</li>
                </ul>
            </div>
            <div class="note-tile">
                <div class="note-tile__title">"Next step"</div>
                <div class="note-tile__body">
                    "If you’d like a role-specific version of this page, I can create a tailored case study section for the job."
                </div>
            </div>
        </div>
    }
}
