use std::fmt::Write as _;

use clap::{Parser, Subcommand};
use content::{NOTEBOOK, PROFILE, PROJECTS, Project, filter_projects};
use serde::Serialize;
use serde_json::Value;


#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("health check failed: HTTP {0}")]
    Unhealthy(u16),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "portfolio", about = "Inspect portfolio content and probe the server")]
struct Cli {
    #[arg(long, env = "PORTFOLIO_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Call `/healthz` on a running server.
    Ping,
    /// List projects, optionally filtered by a search query.
    Projects {
        #[arg(long, short)]
        query: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Print the profile record.
    Profile {
        #[arg(long)]
        json: bool,
    },
    /// Print the notebook cells in order.
    Notebook,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Ping => run_ping(&cli.base_url).await,
        Command::Projects { query, json } => {
            let found = filter_projects(query.as_deref().unwrap_or(""), &PROJECTS);
            if json {
                print_json(&found)
            } else {
                print!("{}", render_projects(&found));
                Ok(())
            }
        }
        Command::Profile { json } => {
            if json {
                print_json(&PROFILE)
            } else {
                print!("{}", render_profile());
                Ok(())
            }
        }
        Command::Notebook => {
            print!("{}", render_notebook());
            Ok(())
        }
    }
}

async fn run_ping(base_url: &str) -> Result<(), CliError> {
    let client = reqwest::Client::new();
    let url = format!("{}/healthz", base_url.trim_end_matches('/'));
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::Unhealthy(status.as_u16()));
    }
    let body: Value = response.json().await?;
    println!("ok {}", body["version"].as_str().unwrap_or("unknown"));
    Ok(())
}

fn render_projects(found: &[&Project]) -> String {
    let mut out = String::new();
    for project in found {
        let _ = writeln!(out, "{}", project.title);
        let _ = writeln!(out, "  {}", project.description);
        let _ = writeln!(out, "  tags: {}", project.tags.join(", "));
        for highlight in project.highlights {
            let _ = writeln!(out, "  - {highlight}");
        }
    }
    let _ = writeln!(out, "{}", content::search::shown_label(found.len()));
    out
}

fn render_profile() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} | {}", PROFILE.name, PROFILE.title);
    let _ = writeln!(out, "{}", PROFILE.tagline);
    let _ = writeln!(out, "location: {}", PROFILE.location);
    let _ = writeln!(out, "email:    {}", PROFILE.email);
    let _ = writeln!(out, "linkedin: {}", PROFILE.linkedin);
    let _ = writeln!(out, "github:   {}", PROFILE.github);
    let _ = writeln!(out, "cv:       {}", PROFILE.cv_url);
    out
}

fn render_notebook() -> String {
    let mut out = String::new();
    for (idx, cell) in NOTEBOOK.iter().enumerate() {
        let header = match cell {
            content::NotebookCell::Code { .. } => cell.display_title(idx),
            _ => cell.kind_label().to_owned(),
        };
        let _ = writeln!(out, "[{}] {header}", idx + 1);
        let _ = writeln!(out, "{}\n", cell.content());
    }
    out
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
