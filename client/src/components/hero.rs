//! Hero card and contact card at the top of the page.

#[cfg(test)]
#[path = "hero_test.rs"]
mod hero_test;

use leptos::prelude::*;

use content::{AVAILABILITY, HERO_FACTS, Icon, PROFILE, SKILL_GROUPS};

use crate::components::common::{ExternalLink, IconGlyph, Pill, SectionTitle};
use crate::components::notebook_panel::NOTEBOOK_ANCHOR;
use crate::components::projects::PROJECTS_ANCHOR;
use crate::util::scroll::{scroll_to_section, section_href};

/// Anchor button that smooth-scrolls when hydrated and falls back to the
/// fragment link otherwise.
#[component]
fn JumpButton(target: &'static str, class: &'static str, children: Children) -> impl IntoView {
    let on_click = move |ev: leptos::ev::MouseEvent| {
        if scroll_to_section(target) {
            ev.prevent_default();
        }
    };
    view! {
        <a class=class href=section_href(target) on:click=on_click>
            {children()}
        </a>
    }
}

#[component]
pub fn HeroCard() -> impl IntoView {
    view! {
        <div class="card hero">
            <div class="hero__top">
                <div>
                    <h1 class="hero__name">{PROFILE.name}</h1>
                    <div class="hero__title">{PROFILE.title}</div>
                    <div class="hero__tagline">{PROFILE.tagline}</div>

                    <div class="pill-row hero__availability">
                        {AVAILABILITY.iter().map(|a| view! { <Pill>{*a}</Pill> }).collect::<Vec<_>>()}
                    </div>

                    <div class="hero__actions">
                        <JumpButton target=PROJECTS_ANCHOR class="btn btn--primary">
                            "View work "
                            <IconGlyph icon=Icon::ArrowRight/>
                        </JumpButton>
                        <JumpButton target=NOTEBOOK_ANCHOR class="btn btn--secondary">
                            "Notebook demo"
                        </JumpButton>
                        <ExternalLink href=PROFILE.cv_url class="btn btn--outline">
                            <IconGlyph icon=Icon::Download/>
                            " Download CV"
                        </ExternalLink>
                    </div>
                </div>

                <div class="hero__facts">
                    {HERO_FACTS
                        .iter()
                        .map(|fact| {
                            view! {
                                <div class="hero__fact">
                                    <IconGlyph icon=fact.icon/>
                                    " "
                                    {fact.text}
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>

            <hr class="separator"/>
            <div class="grid grid--3">
                {SKILL_GROUPS
                    .iter()
                    .map(|group| {
                        view! {
                            <div class="skill-group">
                                <div class="skill-group__header">
                                    <IconGlyph icon=group.icon/>
                                    <div class="skill-group__title">{group.title}</div>
                                </div>
                                <div class="pill-row">
                                    {group.items.iter().map(|item| view! { <Pill>{*item}</Pill> }).collect::<Vec<_>>()}
                                </div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

/// CSS class for a contact row; placeholder links are dimmed.
pub fn contact_row_class(placeholder: bool) -> &'static str {
    if placeholder { "contact-row contact-row--placeholder" } else { "contact-row" }
}

#[component]
fn ContactRow(
    href: String,
    icon: Icon,
    label: &'static str,
    #[prop(optional)] external: bool,
    #[prop(optional)] placeholder: bool,
) -> impl IntoView {
    let (target, rel) = if external { (Some("_blank"), Some("noreferrer")) } else { (None, None) };
    view! {
        <a href=href target=target rel=rel class=contact_row_class(placeholder)>
            <span class="contact-row__label">
                <IconGlyph icon=icon/>
                <span>{label}</span>
            </span>
            <IconGlyph icon=Icon::ArrowRight class="muted"/>
        </a>
    }
}

#[component]
pub fn ContactCard() -> impl IntoView {
    view! {
        <div class="card contact">
            <SectionTitle icon=Icon::Mail title="Contact" subtitle="Fastest way to reach me"/>
            <div class="contact__rows">
                <ContactRow href=PROFILE.mailto() icon=Icon::Mail label=PROFILE.email/>
                <ContactRow href=PROFILE.linkedin.to_owned() icon=Icon::Linkedin label="LinkedIn" external=true/>
                <ContactRow
                    href=PROFILE.github.to_owned()
                    icon=Icon::Github
                    label="GitHub (optional)"
                    external=true
                    placeholder=PROFILE.github_is_placeholder()
                />
                <ContactRow
                    href=PROFILE.cv_url.to_owned()
                    icon=Icon::Document
                    label="CV (PDF)"
                    external=true
                    placeholder=PROFILE.cv_is_placeholder()
                />
            </div>
            <hr class="separator"/>
            <p class="contact__note">
                <span class="strong">"Note:"</span>
                " This portfolio contains demo data and examples to showcase approach and tooling. Replace placeholders with real screenshots or case studies as available."
            </p>
        </div>
    }
}
