//! Excel/VBA snippet switcher.

use leptos::prelude::*;

use content::Icon;

use crate::components::code_block::CodeBlock;
use crate::components::common::IconGlyph;
use crate::state::ui::{SnippetTab, select, tab_button_class};

#[cfg(all(test, feature = "ssr"))]
#[path = "snippet_panel_test.rs"]
mod snippet_panel_test;

/// Two toggle buttons over a single code block. Exactly one snippet is
/// mounted at a time.
#[component]
pub fn SnippetPanel() -> impl IntoView {
    let tab = RwSignal::new(SnippetTab::default());

    view! {
        <div class="card snippet-panel">
            <div class="snippet-panel__header">
                <div>
                    <div class="snippet-panel__title">
                        <IconGlyph icon=Icon::Table/>
                        " Excel + VBA examples"
                    </div>
                    <div class="snippet-panel__subtitle">
                        "Native Excel workflows, automation, and reproducible reporting."
                    </div>
                </div>
                <div class="snippet-panel__toggle">
                    {SnippetTab::ALL
                        .into_iter()
                        .map(|t| {
                            view! {
                                <button
                                    class=move || format!("{} btn--sm", tab_button_class(tab.get() == t))
                                    aria-pressed=move || if tab.get() == t { "true" } else { "false" }
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
            </div>
            {move || snippet_block(tab.get())}
        </div>
    }
}

/// The one code block shown for `tab`.
pub fn snippet_block(tab: SnippetTab) -> AnyView {
    let snippet = tab.snippet();
    view! { <CodeBlock title=snippet.title code=snippet.code/> }.into_any()
}
