//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (clipboard, scrolling, clock)
//! from components. Each one no-ops or falls back cleanly during SSR.

pub mod clipboard;
pub mod scroll;
pub mod year;
