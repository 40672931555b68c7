//! Add command

use clap::Args;
use console::style;
use tracing::info;

use shiplog_core::error::StoreError;

use crate::cli::{output, AppContext, Cli, OperationArg};
use crate::exit_codes;

/// Add a changelog entry
#[derive(Debug, Args)]
pub struct AddCommand {
    /// Classification of the change being logged
    #[arg(short, long, value_enum, default_value = "created")]
    pub operation: OperationArg,

    /// Entry text; opens your editor when omitted
    #[arg(short, long)]
    pub message: Option<String>,
}

impl AddCommand {
    /// Execute the add command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(operation = ?self.operation, "executing add command");
        let ctx = AppContext::discover()?;
        let store = ctx.store();

        let text = match &self.message {
            Some(message) => message.clone(),
            None => match dialoguer::Editor::new().edit("")? {
                Some(text) => text,
                None => {
                    println!("{}", style("Aborted.").yellow());
                    return Ok(());
                }
            },
        };

        match store.append(self.operation.into(), &text) {
            Ok(entry) => {
                if !cli.quiet {
                    output::success(&format!(
                        "Entry added at {}",
                        output::timestamp_style().apply_to(&entry.timestamp)
                    ));
                }
                Ok(())
            }
            Err(StoreError::EmptyText) => {
                output::error("Changelog text cannot be empty.");
                std::process::exit(exit_codes::VALIDATION_ERROR);
            }
            Err(err) => Err(err.into()),
        }
    }
}
