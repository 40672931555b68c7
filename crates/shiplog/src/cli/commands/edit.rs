//! Edit command

use clap::Args;
use console::style;
use tracing::info;

use shiplog_core::error::StoreError;
use shiplog_store::Operation;

use crate::cli::{output, AppContext, Cli, OperationArg};
use crate::exit_codes;

/// Edit an existing entry by its timestamp
#[derive(Debug, Args)]
pub struct EditCommand {
    /// Timestamp identifying the entry
    pub timestamp: String,

    /// New operation tag (default: keep the current one)
    #[arg(short, long, value_enum)]
    pub operation: Option<OperationArg>,

    /// New entry text; opens your editor with the current text when omitted
    #[arg(short, long)]
    pub message: Option<String>,
}

impl EditCommand {
    /// Execute the edit command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(timestamp = %self.timestamp, "executing edit command");
        let ctx = AppContext::discover()?;
        let store = ctx.store();

        let entries = store.load()?;
        let current = match entries.iter().find(|e| e.timestamp == self.timestamp) {
            Some(entry) => entry,
            None => {
                output::error("Could not find the entry to edit. It may have been deleted.");
                std::process::exit(exit_codes::NOT_FOUND);
            }
        };

        let operation: Operation = self
            .operation
            .map(Operation::from)
            .unwrap_or(current.operation);

        let text = match &self.message {
            Some(message) => message.clone(),
            None => match dialoguer::Editor::new().edit(&current.text)? {
                Some(text) => text,
                None => {
                    println!("{}", style("Aborted.").yellow());
                    return Ok(());
                }
            },
        };

        match store.update(&self.timestamp, operation, &text) {
            Ok(entry) => {
                if !cli.quiet {
                    output::success(&format!(
                        "Entry {} updated",
                        output::timestamp_style().apply_to(&entry.timestamp)
                    ));
                }
                Ok(())
            }
            Err(StoreError::EmptyText) => {
                output::error("Changelog text cannot be empty.");
                std::process::exit(exit_codes::VALIDATION_ERROR);
            }
            Err(StoreError::EntryNotFound(_)) => {
                output::error("Could not find the entry to edit. It may have been deleted.");
                std::process::exit(exit_codes::NOT_FOUND);
            }
            Err(err) => Err(err.into()),
        }
    }
}
