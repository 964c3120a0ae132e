//! Page footer with contact links and copyright line.

use leptos::prelude::*;

use content::{Icon, PROFILE};

use crate::components::common::{ExternalLink, IconGlyph};
use crate::util::year::current_year;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__links">
                <ExternalLink href=PROFILE.linkedin class="footer__link">
                    <IconGlyph icon=Icon::Linkedin/>
                    " LinkedIn"
                </ExternalLink>
                <span class="footer__dot">"•"</span>
                <a href=PROFILE.mailto() class="footer__link">
                    <IconGlyph icon=Icon::Mail/>
                    " Email"
                </a>
                <span class="footer__dot">"•"</span>
                <ExternalLink href=PROFILE.cv_url class="footer__link">
                    <IconGlyph icon=Icon::Document/>
                    " CV"
                </ExternalLink>
            </div>
            <div class="footer__copyright">{PROFILE.copyright_line(current_year())}</div>
        </footer>
    }
}
