use super::*;

#[test]
fn contact_row_class_dims_placeholders() {
    assert_eq!(contact_row_class(false), "contact-row");
    assert_eq!(contact_row_class(true), "contact-row contact-row--placeholder");
}

#[test]
fn hero_actions_target_section_anchors() {
    assert_eq!(section_href(PROJECTS_ANCHOR), "#projects");
    assert_eq!(section_href(NOTEBOOK_ANCHOR), "#notebook");
}
