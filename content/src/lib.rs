//! Static portfolio content and the small amount of logic derived from it.
//!
//! This crate is UI-framework agnostic so the Leptos client and the CLI can
//! both consume it. Every record is a compile-time constant; nothing here is
//! created, mutated or persisted at runtime.

pub mod chart;
pub mod icon;
pub mod notebook;
pub mod pipeline;
pub mod profile;
pub mod projects;
pub mod search;
pub mod series;

pub use icon::Icon;
pub use notebook::{NOTEBOOK, NotebookCell};
pub use pipeline::{EXCEL_SNIPPET, PIPELINE, PipelineStage, Snippet, VBA_SNIPPET};
pub use profile::{AVAILABILITY, HERO_FACTS, HeroFact, PROFILE, Profile, SKILL_GROUPS, SkillGroup};
pub use projects::{PROJECTS, Project};
pub use search::filter_projects;
pub use series::{ANOMALY, AnomalyPoint, DEMAND_SUPPLY, DemandPoint, KPIS, Kpi};
