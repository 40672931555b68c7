//! Report rendering front-end

use std::path::Path;

use tracing::{info, instrument};

use shiplog_core::config::ReportConfig;
use shiplog_core::error::ReportError;
use shiplog_store::Entry;

use crate::formatter::{HtmlFormatter, ReportFormatter};

/// Renders the current entry set into a static report.
///
/// Stateless apart from its configuration: entries come in as given
/// (newest first, per the store's sort) and are rendered in that order.
pub struct ReportRenderer {
    formatter: Box<dyn ReportFormatter>,
    config: ReportConfig,
}

impl ReportRenderer {
    /// Create a renderer with the default HTML formatter
    pub fn new(config: ReportConfig) -> Self {
        Self {
            formatter: Box::new(HtmlFormatter::new()),
            config,
        }
    }

    /// Use a custom formatter
    pub fn with_formatter<F: ReportFormatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    /// File extension of the configured formatter
    pub fn extension(&self) -> &'static str {
        self.formatter.extension()
    }

    /// Render the entry set to a document string.
    ///
    /// An empty set is a refusal, not an empty document - the caller
    /// decides how to tell the user there is nothing to export.
    #[instrument(skip(self, entries), fields(entry_count = entries.len()))]
    pub fn render(&self, entries: &[Entry]) -> Result<String, ReportError> {
        if entries.is_empty() {
            return Err(ReportError::Empty);
        }

        let output = self.formatter.format(entries, &self.config);
        info!(entry_count = entries.len(), output_len = output.len(), "report rendered");
        Ok(output)
    }

    /// Render and write to the destination path.
    ///
    /// Nothing is written when the entry set is empty or the destination
    /// is not writable; the error is the caller's to surface.
    #[instrument(skip(self, entries), fields(entry_count = entries.len(), path = %path.display()))]
    pub fn render_to_file(&self, entries: &[Entry], path: &Path) -> Result<(), ReportError> {
        let content = self.render(entries)?;

        std::fs::write(path, content).map_err(|e| ReportError::Write {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        info!(path = %path.display(), "report written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shiplog_store::Operation;
    use tempfile::TempDir;

    fn sample_entries() -> Vec<Entry> {
        vec![Entry::new(
            "2024-03-01T18:00:00+00:00",
            Operation::Created,
            "Initial release",
        )]
    }

    #[test]
    fn test_render_empty_set_is_refused() {
        let renderer = ReportRenderer::new(ReportConfig::default());
        assert!(matches!(renderer.render(&[]), Err(ReportError::Empty)));
    }

    #[test]
    fn test_render_to_file_writes_document() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("changelog.html");

        let renderer = ReportRenderer::new(ReportConfig::default());
        renderer.render_to_file(&sample_entries(), &dest).unwrap();

        let content = std::fs::read_to_string(&dest).unwrap();
        assert!(content.contains("Initial release"));
    }

    #[test]
    fn test_render_to_file_refuses_empty_set_without_writing() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("changelog.html");

        let renderer = ReportRenderer::new(ReportConfig::default());
        let result = renderer.render_to_file(&[], &dest);

        assert!(matches!(result, Err(ReportError::Empty)));
        assert!(!dest.exists());
    }

    #[test]
    fn test_render_to_file_surfaces_write_failure() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("missing").join("changelog.html");

        let renderer = ReportRenderer::new(ReportConfig::default());
        let result = renderer.render_to_file(&sample_entries(), &dest);

        assert!(matches!(result, Err(ReportError::Write { .. })));
    }
}
