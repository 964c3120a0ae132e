//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the portfolio sections from `content` constants. The
//! only state they hold is local: search text, selected tabs and copy
//! feedback.

pub mod charts;
pub mod code_block;
pub mod common;
pub mod footer;
pub mod hero;
pub mod notebook_panel;
pub mod pipeline_diagram;
pub mod projects;
pub mod snippet_panel;
