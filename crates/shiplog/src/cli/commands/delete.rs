//! Delete command

use clap::Args;
use console::style;
use dialoguer::Confirm;
use tracing::info;

use shiplog_core::error::StoreError;

use crate::cli::{output, AppContext, Cli};
use crate::exit_codes;

/// Delete an entry by its timestamp
#[derive(Debug, Args)]
pub struct DeleteCommand {
    /// Timestamp identifying the entry
    pub timestamp: String,

    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,
}

impl DeleteCommand {
    /// Execute the delete command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(timestamp = %self.timestamp, yes = self.yes, "executing delete command");
        let ctx = AppContext::discover()?;
        let store = ctx.store();

        let entries = store.load()?;
        let entry = match entries.iter().find(|e| e.timestamp == self.timestamp) {
            Some(entry) => entry,
            None => {
                output::error("Could not find the entry to delete.");
                std::process::exit(exit_codes::NOT_FOUND);
            }
        };

        if !self.yes {
            let confirmed = Confirm::new()
                .with_prompt(format!(
                    "Permanently delete {} \"{}\"?",
                    output::operation_tag(entry.operation),
                    entry.text
                ))
                .default(false)
                .interact()?;

            if !confirmed {
                println!("{}", style("Aborted.").yellow());
                return Ok(());
            }
        }

        match store.remove(&self.timestamp) {
            Ok(_) => {
                if !cli.quiet {
                    output::success("Entry deleted.");
                }
                Ok(())
            }
            Err(StoreError::EntryNotFound(_)) => {
                output::error("Could not find the entry to delete.");
                std::process::exit(exit_codes::NOT_FOUND);
            }
            Err(err) => Err(err.into()),
        }
    }
}
