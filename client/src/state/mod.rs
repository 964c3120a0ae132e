//! Transient UI state types.
//!
//! Nothing here is persisted; every value resets on page load.

pub mod ui;
