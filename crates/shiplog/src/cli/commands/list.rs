//! List command

use clap::Args;
use console::style;
use tracing::info;

use crate::cli::{output, AppContext, Cli, OutputFormat};

/// Longest entry text shown before truncation
const PREVIEW_LEN: usize = 70;

/// List changelog entries, newest first
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Show at most N entries
    #[arg(short, long)]
    pub num: Option<usize>,
}

impl ListCommand {
    /// Execute the list command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(num = ?self.num, "executing list command");
        let ctx = AppContext::discover()?;
        let mut entries = ctx.store().load()?;

        if let Some(num) = self.num {
            entries.truncate(num);
        }

        if entries.is_empty() {
            if !cli.quiet {
                println!("{}", style("Changelog is empty.").yellow());
            }
            return Ok(());
        }

        match cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            }
            OutputFormat::Text => {
                for entry in &entries {
                    println!(
                        "{} {} {}",
                        output::operation_tag(entry.operation),
                        preview(&entry.text),
                        output::timestamp_style().apply_to(&entry.timestamp),
                    );
                }
            }
        }

        Ok(())
    }
}

/// Single-line preview of the entry text, truncated like the list view
fn preview(text: &str) -> String {
    let flat = text.replace('\n', " ");
    if flat.chars().count() > PREVIEW_LEN {
        let truncated: String = flat.chars().take(PREVIEW_LEN).collect();
        format!("{}...", truncated)
    } else {
        flat
    }
}
