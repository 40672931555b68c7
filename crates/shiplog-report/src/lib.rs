//! Shiplog Report - Static report rendering for the shiplog changelog editor
//!
//! Turns the current entry set into a single self-contained document. The
//! renderer is a pure consumer: it never touches the store and renders
//! entries in the order it receives them.

pub mod formatter;
pub mod renderer;

pub use formatter::{FormatterRegistry, HtmlFormatter, ReportFormatter};
pub use renderer::ReportRenderer;
