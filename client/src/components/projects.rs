//! Searchable project list.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the search text. The filtered view is a `Memo` over
//! `content::filter_projects`, recomputed on every keystroke.

use leptos::prelude::*;

use content::search::shown_label;
use content::{Icon, PROJECTS, Project, filter_projects};

use crate::components::common::{IconGlyph, Pill, SectionTitle};

pub const PROJECTS_ANCHOR: &str = "projects";

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let query = RwSignal::new(String::new());
    let filtered = Memo::new(move |_| filter_projects(&query.get(), &PROJECTS));

    view! {
        <section id=PROJECTS_ANCHOR class="section">
            <SectionTitle icon=Icon::Sparkles title="Projects" subtitle="A few representative examples (demo)"/>
            <div class="projects__toolbar">
                <label class="search">
                    <IconGlyph icon=Icon::Search class="search__icon"/>
                    <input
                        class="search__input"
                        type="search"
                        aria-label="Search projects"
                        placeholder="Search projects (e.g., forecasting, ETL, Tableau)"
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                    />
                </label>
                <Pill>{move || shown_label(filtered.get().len())}</Pill>
            </div>
            <div class="grid grid--3">
                {move || {
                    filtered
                        .get()
                        .into_iter()
                        .map(|project| view! { <ProjectCard project=project/> })
                        .collect::<Vec<_>>()
                }}
            </div>
        </section>
    }
}

#[component]
pub fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <article class="card project-card">
            <div class="project-card__header">
                <div>
                    <h3 class="project-card__title">{project.title}</h3>
                    <p class="project-card__description">{project.description}</p>
                    <div class="pill-row">
                        {project.tags.iter().map(|tag| view! { <Pill>{*tag}</Pill> }).collect::<Vec<_>>()}
                    </div>
                </div>
                <div class="icon-tile">
                    <IconGlyph icon=Icon::Sparkles/>
                </div>
            </div>
            <hr class="separator"/>
            <ul class="project-card__highlights">
                {project.highlights.iter().map(|h| view! { <li>{*h}</li> }).collect::<Vec<_>>()}
            </ul>
        </article>
    }
}
