//! Small presentational building blocks shared by every section.

use content::Icon;
use leptos::prelude::*;

/// Text glyph standing in for an icon.
#[component]
pub fn IconGlyph(icon: Icon, #[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <span class=format!("icon {class}") role="img" aria-label=icon.label()>
            {icon.glyph()}
        </span>
    }
}

/// Rounded badge used for skills, tags and status labels.
#[component]
pub fn Pill(children: Children) -> impl IntoView {
    view! { <span class="pill">{children()}</span> }
}

/// Section header with an icon tile, a title and an optional subtitle.
#[component]
pub fn SectionTitle(
    icon: Icon,
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="section-title">
            <div class="section-title__icon">
                <IconGlyph icon=icon/>
            </div>
            <div>
                <h2 class="section-title__heading">{title}</h2>
                {subtitle.map(|s| view! { <p class="section-title__subtitle">{s}</p> })}
            </div>
        </div>
    }
}

/// Outbound link opened in a new tab.
#[component]
pub fn ExternalLink(
    href: &'static str,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <a href=href class=class target="_blank" rel="noreferrer">
            {children()}
        </a>
    }
}
