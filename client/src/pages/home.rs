//! The portfolio landing page.

use leptos::prelude::*;

use crate::components::charts::DashboardsSection;
use crate::components::footer::Footer;
use crate::components::hero::{ContactCard, HeroCard};
use crate::components::notebook_panel::NotebookSection;
use crate::components::pipeline_diagram::PipelineDiagram;
use crate::components::projects::ProjectsSection;
use crate::components::snippet_panel::SnippetPanel;

/// Hero, projects, dashboards, notebook, pipeline + snippets, footer.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="page">
            <div class="page__inner">
                <div class="hero-grid">
                    <HeroCard/>
                    <ContactCard/>
                </div>
                <ProjectsSection/>
                <DashboardsSection/>
                <NotebookSection/>
                <div class="grid grid--2 section">
                    <PipelineDiagram/>
                    <SnippetPanel/>
                </div>
                <Footer/>
            </div>
        </main>
    }
}

#[cfg(test)]
mod tests {
    const STYLESHEET: &str = include_str!("../../../style/main.css");

    #[test]
    fn sections_fade_in_from_below() {
        assert!(STYLESHEET.contains(".section, .hero-grid { animation: section-enter 0.5s"));
        assert!(STYLESHEET.contains("@keyframes section-enter"));
        assert!(STYLESHEET.contains("from { opacity: 0; transform: translateY(10px); }"));
    }

    #[test]
    fn entrance_respects_reduced_motion() {
        assert!(STYLESHEET.contains("prefers-reduced-motion: reduce"));
    }
}
