//! Seeded project records shown as cards in the projects section.

use serde::Serialize;

/// A static description of a past engagement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub highlights: &'static [&'static str],
}

impl Project {
    /// Lowercased `title description tags...` text the search matches against.
    #[must_use]
    pub fn haystack(&self) -> String {
        let mut text = String::with_capacity(self.title.len() + self.description.len() + 64);
        text.push_str(self.title);
        text.push(' ');
        text.push_str(self.description);
        text.push(' ');
        text.push_str(&self.tags.join(" "));
        text.to_lowercase()
    }
}

pub const PROJECTS: [Project; 3] = [
    Project {
        title: "Forecasting + decision support dashboard",
        description: "Example end-to-end workflow: prepare data, build baseline forecasts, publish KPIs, and communicate risk/uncertainty to stakeholders.",
        tags: &["Python", "SQL", "Tableau-style", "Forecasting"],
        highlights: &[
            "Designed KPIs and definitions to ensure consistent reporting",
            "Created repeatable analysis with clear assumptions and validation",
            "Packaged outputs for business users (dashboard + changelog)",
        ],
    },
    Project {
        title: "ETL + reporting pipeline (template)",
        description: "Demonstration of how I structure an analytics pipeline with validation, transformations, and monitoring.",
        tags: &["ETL", "Data quality", "Automation"],
        highlights: &[
            "Schema checks and tests to prevent silent failures",
            "Version-controlled transformations and release notes",
            "Monitoring for freshness and anomaly detection",
        ],
    },
    Project {
        title: "Excel automation pack",
        description: "Native Excel workflows for non-technical teams: templates, pivots, controlled inputs, and VBA automation for repeatable exports.",
        tags: &["Excel", "VBA", "Reporting"],
        highlights: &[
            "Time-saving refresh/export routines",
            "Clear instructions and guardrails for end users",
            "Audit-friendly outputs and change tracking",
        ],
    },
];
