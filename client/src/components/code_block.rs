//! Code and output blocks for the notebook cells and snippet panel.

use leptos::prelude::*;

use content::Icon;

use crate::components::common::IconGlyph;
use crate::util::clipboard::{CopyFeedback, copy_button_label, copy_text};

/// Titled code listing with a copy-to-clipboard button.
#[component]
pub fn CodeBlock(#[prop(into)] title: String, code: &'static str) -> impl IntoView {
    let feedback = RwSignal::new(CopyFeedback::default());

    let on_copy = move |_| {
        if !copy_text(code) {
            return;
        }
        let Some(generation) = feedback.try_update(CopyFeedback::start) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let hold = std::time::Duration::from_millis(crate::util::clipboard::COPIED_LABEL_MS);
                gloo_timers::future::sleep(hold).await;
                let _ = feedback.try_maybe_update(|f| (f.expire(generation), ()));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = generation;
    };

    view! {
        <div class="code-block">
            <div class="code-block__header">
                <div class="code-block__title">
                    <IconGlyph icon=Icon::Code/>
                    <span>{title}</span>
                </div>
                <button class="btn btn--ghost btn--sm" title="Copy to clipboard" on:click=on_copy>
                    {move || copy_button_label(feedback.get().copied)}
                </button>
            </div>
            <pre class="code-block__body">
                <code>{code}</code>
            </pre>
        </div>
    }
}

/// Captured output of a notebook cell.
#[component]
pub fn OutputBlock(text: &'static str) -> impl IntoView {
    view! {
        <div class="output-block">
            <div class="output-block__label">"Output"</div>
            <pre class="output-block__body">
                <code>{text}</code>
            </pre>
        </div>
    }
}
