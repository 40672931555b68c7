//! Formatter registry

use std::sync::Arc;

use super::HtmlFormatter;
use super::ReportFormatter;

/// Registry of available report formatters
pub struct FormatterRegistry {
    formatters: Vec<Arc<dyn ReportFormatter>>,
}

impl FormatterRegistry {
    /// Create a new registry with all built-in formatters
    pub fn new() -> Self {
        Self {
            formatters: vec![Arc::new(HtmlFormatter::new())],
        }
    }

    /// Create an empty registry
    pub fn empty() -> Self {
        Self {
            formatters: Vec::new(),
        }
    }

    /// Register a formatter
    pub fn register<F: ReportFormatter + 'static>(&mut self, formatter: F) {
        self.formatters.push(Arc::new(formatter));
    }

    /// Get formatter by file extension
    pub fn get(&self, extension: &str) -> Option<Arc<dyn ReportFormatter>> {
        self.formatters
            .iter()
            .find(|f| f.extension() == extension)
            .cloned()
    }

    /// Get all supported file extensions
    pub fn extensions(&self) -> Vec<&'static str> {
        self.formatters.iter().map(|f| f.extension()).collect()
    }
}

impl Default for FormatterRegistry {
    fn default() -> Self {
        Self::new()
    }
}
