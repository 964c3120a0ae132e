//! Canned notebook cells for the notebook demo.
//!
//! Cells are rendered verbatim in order. The content is synthetic and only
//! illustrates how an analysis is structured.

#[cfg(test)]
#[path = "notebook_test.rs"]
mod notebook_test;

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NotebookCell {
    Markdown { content: &'static str },
    Code { title: Option<&'static str>, content: &'static str },
    Output { content: &'static str },
}

impl NotebookCell {
    #[must_use]
    pub fn content(&self) -> &'static str {
        match self {
            Self::Markdown { content } | Self::Code { content, .. } | Self::Output { content } => content,
        }
    }

    /// Header text for a code cell; untitled cells fall back to their 1-based position.
    #[must_use]
    pub fn display_title(&self, index: usize) -> String {
        match self {
            Self::Code { title: Some(title), .. } => (*title).to_owned(),
            _ => format!("Code cell {}", index + 1),
        }
    }

    #[must_use]
    pub fn kind_label(&self) -> &'static str {
        match self {
            Self::Markdown { .. } => "Markdown",
            Self::Code { .. } => "Code",
            Self::Output { .. } => "Output",
        }
    }
}

pub const NOTEBOOK: [NotebookCell; 6] = [
    NotebookCell::Markdown {
        content: "# Forecasting demo (sample notebook)\nThis mini-notebook shows a typical workflow: cleaning, feature engineering, baseline forecast, and quick validation. The data here is synthetic — the goal is to demonstrate how I structure analysis and communicate results.",
    },
    NotebookCell::Code {
        title: Some("Load + shape data"),
        content: r#"import pandas as pd

# Synthetic monthly series
df = pd.DataFrame({
  "month": ["Jan","Feb","Mar","Apr","May","Jun","Jul","Aug","Sep","Oct","Nov","Dec"],
  "demand": [102,108,111,118,125,131,140,136,129,121,112,106],
  "supply": [110,112,113,116,120,124,128,127,125,122,118,114]
})

df["gap"] = df["supply"] - df["demand"]
df.head()"#,
    },
    NotebookCell::Output {
        content: "month  demand  supply  gap\nJan    102     110      8\nFeb    108     112      4\nMar    111     113      2\nApr    118     116     -2\nMay    125     120     -5",
    },
    NotebookCell::Code {
        title: Some("Baseline forecast (moving average)"),
        content: r#"# 3-month moving average baseline
df["forecast"] = df["demand"].rolling(3).mean()
# Simple error metric on months where forecast exists
df_eval = df.dropna().copy()
mae = (df_eval["demand"] - df_eval["forecast"]).abs().mean()
mae"#,
    },
    NotebookCell::Output { content: "2.78  # MAE (synthetic)" },
    NotebookCell::Markdown {
        content: "**Interpretation:** A quick baseline gives a useful benchmark. In a real engagement, I’d compare baselines, add covariates, and validate across seasons/segments, then package outputs into a dashboard for stakeholders.",
    },
];
