//! Static ETL delivery-flow diagram.

use leptos::prelude::*;

use content::pipeline::has_arrow_after;
use content::{Icon, PIPELINE};

use crate::components::common::IconGlyph;

#[component]
pub fn PipelineDiagram() -> impl IntoView {
    view! {
        <div class="card pipeline">
            <div class="pipeline__title">
                <IconGlyph icon=Icon::Database/>
                " ETL / Analytics Delivery Flow"
            </div>
            <div class="pipeline__subtitle">
                "Example of how I structure an end-to-end analytics pipeline for reliability."
            </div>
            <ol class="pipeline__stages">
                {PIPELINE
                    .iter()
                    .enumerate()
                    .map(|(i, stage)| {
                        view! {
                            <li class="pipeline__stage">
                                <div class="pipeline__stage-name">{stage.name}</div>
                                <div class="pipeline__stage-detail">{stage.detail}</div>
                                {has_arrow_after(i)
                                    .then(|| view! { <IconGlyph icon=Icon::ArrowRight class="pipeline__arrow"/> })}
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ol>
        </div>
    }
}
