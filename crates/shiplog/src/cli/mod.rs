//! CLI definition and command handling

pub mod commands;
pub mod output;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use shiplog_core::config::{load_config_or_default, Config};
use shiplog_report::ReportRenderer;
use shiplog_store::{EntryStore, Operation};

use commands::{
    AddCommand, DeleteCommand, EditCommand, ExportCommand, InitCommand, ListCommand,
};

/// Shiplog - Single-user changelog editor
#[derive(Debug, Parser)]
#[command(name = "shiplog")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Working directory
    #[arg(short = 'C', long, global = true)]
    pub directory: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Operation tag as accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OperationArg {
    /// Something was created
    Created,
    /// Something was changed
    Edited,
    /// Something was removed
    Deleted,
}

impl From<OperationArg> for Operation {
    fn from(arg: OperationArg) -> Self {
        match arg {
            OperationArg::Created => Operation::Created,
            OperationArg::Edited => Operation::Edited,
            OperationArg::Deleted => Operation::Deleted,
        }
    }
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Initialize a new shiplog configuration
    Init(InitCommand),

    /// Add a changelog entry
    Add(AddCommand),

    /// List changelog entries, newest first
    List(ListCommand),

    /// Edit an existing entry by its timestamp
    Edit(EditCommand),

    /// Delete an entry by its timestamp
    Delete(DeleteCommand),

    /// Export the changelog as a styled report
    Export(ExportCommand),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> anyhow::Result<()> {
        // Change to specified directory if provided
        if let Some(dir) = &self.directory {
            std::env::set_current_dir(dir)?;
        }

        match self.command {
            Commands::Init(ref cmd) => cmd.execute(&self),
            Commands::Add(ref cmd) => cmd.execute(&self),
            Commands::List(ref cmd) => cmd.execute(&self),
            Commands::Edit(ref cmd) => cmd.execute(&self),
            Commands::Delete(ref cmd) => cmd.execute(&self),
            Commands::Export(ref cmd) => cmd.execute(&self),
        }
    }
}

/// Configuration plus the directory its relative paths resolve against.
///
/// Paths in the config file resolve relative to the file's directory; with
/// no config file everything is relative to the working directory.
pub struct AppContext {
    pub config: Config,
    pub base_dir: PathBuf,
}

impl AppContext {
    /// Discover configuration starting from the working directory
    pub fn discover() -> anyhow::Result<Self> {
        let cwd = std::env::current_dir()?;
        let (config, config_path) = load_config_or_default(&cwd);
        let base_dir = config_path
            .as_deref()
            .and_then(Path::parent)
            .map(Path::to_path_buf)
            .unwrap_or(cwd);

        Ok(Self { config, base_dir })
    }

    /// The entry store at the configured document path
    pub fn store(&self) -> EntryStore {
        EntryStore::new(self.base_dir.join(&self.config.store.file))
            .with_strict_load(self.config.store.strict_load)
    }

    /// A renderer for the configured report settings
    pub fn renderer(&self) -> ReportRenderer {
        ReportRenderer::new(self.config.report.clone())
    }

    /// Default destination for exported reports
    pub fn report_path(&self) -> PathBuf {
        self.base_dir.join(&self.config.report.file)
    }
}
