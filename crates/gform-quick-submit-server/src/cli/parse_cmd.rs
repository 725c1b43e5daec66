//! `gform-quick-submit parse <url>`: list a form's entry IDs.

use anyhow::{bail, Result};
use clap::ValueEnum;
use gform_quick_submit::{is_google_form_url, render_snippet, FormEntry, GformClient};

/// How scraped entries are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Snippet,
}

/// Run the parse command.
pub async fn run(url: &str, any_url: bool, format: OutputFormat) -> Result<()> {
    if !any_url && !is_google_form_url(url) {
        bail!("'{url}' is not a Google Form viewform URL (pass --any-url to skip this check)");
    }

    let client = GformClient::from_env()?;
    let entries = client.fetch_entries(url).await?;
    print!("{}", render(&entries, format)?);
    Ok(())
}

/// Format entries for output.
pub fn render(entries: &[FormEntry], format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Table => render_table(entries),
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(entries)?),
        OutputFormat::Snippet => render_snippet(entries),
    })
}

fn render_table(entries: &[FormEntry]) -> String {
    if entries.is_empty() {
        return "No entries found.\n".to_string();
    }

    let width = entries
        .iter()
        .map(|e| e.label.chars().count())
        .max()
        .unwrap_or(0)
        .max("LABEL".len());

    let mut out = format!("{:<width$}  ENTRY ID\n", "LABEL");
    for entry in entries {
        let pad = width - entry.label.chars().count();
        out.push_str(&format!("{}{}  {}\n", entry.label, " ".repeat(pad), entry.id));
    }
    out
}
