//! Text glyph icons used by section headers, links and cards.

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    ArrowRight,
    Briefcase,
    Code,
    Dashboard,
    Database,
    Document,
    Download,
    Github,
    Linkedin,
    Mail,
    MapPin,
    Search,
    ShieldCheck,
    Sparkles,
    Table,
}

impl Icon {
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::ArrowRight => "→",
            Self::Briefcase => "💼",
            Self::Code => "</>",
            Self::Dashboard => "▦",
            Self::Database => "⛁",
            Self::Document => "📄",
            Self::Download => "⤓",
            Self::Github => "⌥",
            Self::Linkedin => "in",
            Self::Mail => "✉",
            Self::MapPin => "⌖",
            Self::Search => "⌕",
            Self::ShieldCheck => "✔",
            Self::Sparkles => "✦",
            Self::Table => "▤",
        }
    }

    /// Accessible name for the glyph.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::ArrowRight => "arrow",
            Self::Briefcase => "briefcase",
            Self::Code => "code",
            Self::Dashboard => "dashboard",
            Self::Database => "database",
            Self::Document => "document",
            Self::Download => "download",
            Self::Github => "GitHub",
            Self::Linkedin => "LinkedIn",
            Self::Mail => "mail",
            Self::MapPin => "location",
            Self::Search => "search",
            Self::ShieldCheck => "check",
            Self::Sparkles => "sparkles",
            Self::Table => "table",
        }
    }
}
