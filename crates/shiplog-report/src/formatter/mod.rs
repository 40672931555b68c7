//! Report formatters

mod html;
mod registry;

pub use html::HtmlFormatter;
pub use registry::FormatterRegistry;

use shiplog_core::config::ReportConfig;
use shiplog_store::Entry;

/// Trait for report formatters
pub trait ReportFormatter: Send + Sync {
    /// Format the entry set to a complete document
    fn format(&self, entries: &[Entry], config: &ReportConfig) -> String;

    /// Get the file extension for this format
    fn extension(&self) -> &'static str;
}
