//! Profile, availability and skill group constants for the hero section.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use serde::Serialize;

use crate::icon::Icon;

/// Identity and contact links shown in the hero, contact card and footer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub location: &'static str,
    pub email: &'static str,
    pub linkedin: &'static str,
    pub github: &'static str,
    pub cv_url: &'static str,
}

impl Profile {
    #[must_use]
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// True while the code-hosting link still points at the template handle.
    #[must_use]
    pub fn github_is_placeholder(&self) -> bool {
        self.github.contains("your-handle")
    }

    #[must_use]
    pub fn cv_is_placeholder(&self) -> bool {
        self.cv_url == "#"
    }

    #[must_use]
    pub fn copyright_line(&self, year: i32) -> String {
        format!("© {year} {}. Built as a lightweight portfolio page.", self.name)
    }
}

pub const PROFILE: Profile = Profile {
    name: "Kieran Wong",
    title: "Remote Data & Analytics Contractor",
    tagline: "Forecasting • Automation • Decision Support | Python • SQL • Tableau | UK-based (tax) | Fully Remote",
    location: "Prestwich, England (Remote)",
    email: "Kieran.Wong336@gmail.com",
    linkedin: "https://www.linkedin.com/in/kieranw7799",
    github: "https://github.com/Kcp787",
    cv_url: "https://github.com/Kcp787/UU_Personal/blob/76a801fd5ae39fc7f0bfcd3ac25e3c5086402f91/Kieran_Wong_Remote_Analytics_Contractor.pdf",
};

pub const AVAILABILITY: [&str; 3] = [
    "Available: Remote contracts",
    "Day rate: £450–£550",
    "Timezone: UK / overlap-friendly",
];

/// One icon + text row in the hero's right column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct HeroFact {
    pub icon: Icon,
    pub text: &'static str,
}

pub const HERO_FACTS: [HeroFact; 3] = [
    HeroFact { icon: Icon::MapPin, text: PROFILE.location },
    HeroFact { icon: Icon::Briefcase, text: "Open to remote contract/consultancy" },
    HeroFact { icon: Icon::ShieldCheck, text: "Output-focused, async-friendly" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SkillGroup {
    pub title: &'static str,
    pub icon: Icon,
    pub items: &'static [&'static str],
}

pub const SKILL_GROUPS: [SkillGroup; 3] = [
    SkillGroup {
        title: "Core",
        icon: Icon::Code,
        items: &["Python", "SQL", "Tableau", "Streamlit", "VBA", "DAX"],
    },
    SkillGroup {
        title: "Analytics",
        icon: Icon::Dashboard,
        items: &[
            "Forecasting",
            "Scenario modelling",
            "Time series analysis",
            "Decision support",
            "Stakeholder reporting",
        ],
    },
    SkillGroup {
        title: "Delivery",
        icon: Icon::ShieldCheck,
        items: &[
            "Remote collaboration",
            "Git (Azure Repos / GitLab)",
            "Data quality checks",
            "Reproducible workflows",
            "Regulatory / exec reporting",
        ],
    },
];
