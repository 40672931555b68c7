//! Export command

use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use shiplog_core::error::ReportError;

use crate::cli::{output, AppContext, Cli};
use crate::exit_codes;

/// Export the changelog as a styled report
#[derive(Debug, Args)]
pub struct ExportCommand {
    /// Destination file (defaults to the configured report file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl ExportCommand {
    /// Execute the export command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(output = ?self.output, "executing export command");
        let ctx = AppContext::discover()?;

        let entries = ctx.store().load()?;
        let renderer = ctx.renderer();
        let destination = self.output.clone().unwrap_or_else(|| ctx.report_path());

        match renderer.render_to_file(&entries, &destination) {
            Ok(()) => {
                if !cli.quiet {
                    output::success(&format!(
                        "Report written to {}",
                        output::path_style().apply_to(destination.display())
                    ));
                }
                Ok(())
            }
            Err(ReportError::Empty) => {
                if !cli.quiet {
                    println!(
                        "{}",
                        style("Changelog is empty. Add some entries first.").yellow()
                    );
                }
                Ok(())
            }
            Err(err @ ReportError::Write { .. }) => {
                output::error(&err.to_string());
                std::process::exit(exit_codes::EXPORT_ERROR);
            }
        }
    }
}
