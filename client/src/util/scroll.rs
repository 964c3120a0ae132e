//! Smooth scrolling to in-page sections.

/// Scroll the element with `id` into view. Returns `false` on SSR or when the
/// element is missing, in which case the caller's fragment link still works.
pub fn scroll_to_section(id: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        else {
            return false;
        };
        let opts = web_sys::ScrollIntoViewOptions::new();
        opts.set_behavior(web_sys::ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
        true
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        false
    }
}

/// `href` for a section anchor.
pub fn section_href(id: &str) -> String {
    format!("#{id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_href_prefixes_hash() {
        assert_eq!(section_href("projects"), "#projects");
    }

    #[cfg(not(feature = "hydrate"))]
    #[test]
    fn scroll_is_noop_outside_browser() {
        assert!(!scroll_to_section("notebook"));
    }
}
