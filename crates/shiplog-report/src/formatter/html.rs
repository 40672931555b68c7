//! HTML report formatter

use chrono::{DateTime, NaiveDateTime};
use tracing::{debug, instrument};

use shiplog_core::config::ReportConfig;
use shiplog_store::Entry;

use super::ReportFormatter;

/// Self-contained HTML report formatter.
///
/// Produces a standalone document with an inline stylesheet - no external
/// resource references - so the report renders anywhere a browser does.
pub struct HtmlFormatter;

impl HtmlFormatter {
    /// Create a new HTML formatter
    pub fn new() -> Self {
        Self
    }
}

impl Default for HtmlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for HtmlFormatter {
    #[instrument(skip(self, entries, config), fields(entry_count = entries.len()))]
    fn format(&self, entries: &[Entry], config: &ReportConfig) -> String {
        let mut blocks = String::new();

        for entry in entries {
            blocks.push_str(&format!(
                r#"        <div class="entry">
            <span class="tag {}">{}</span>
            <span class="text">{}</span>
            <span class="date">{}</span>
        </div>
"#,
                entry.operation.css_class(),
                entry.operation.label(),
                escape_html(&entry.text),
                format_timestamp(&entry.timestamp),
            ));
        }

        let output = format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n\
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
             <title>{title}</title>\n<style>{style}</style>\n</head>\n<body>\n\
             <div class=\"container\">\n<h1>{title}</h1>\n{blocks}</div>\n</body>\n</html>\n",
            title = escape_html(&config.title),
            style = STYLESHEET,
            blocks = blocks,
        );

        debug!(output_len = output.len(), "html report formatted");
        output
    }

    fn extension(&self) -> &'static str {
        "html"
    }
}

/// Inline stylesheet; each operation tag gets a fixed distinct color.
const STYLESHEET: &str = "\
body{font-family:-apple-system,BlinkMacSystemFont,\"Segoe UI\",Roboto,Helvetica,Arial,sans-serif;\
line-height:1.6;background-color:#f4f7f9;color:#333;margin:0;padding:2em;}\
.container{max-width:800px;margin:0 auto;background-color:#ffffff;padding:2em;\
border-radius:8px;box-shadow:0 4px 12px rgba(0,0,0,0.08);}\
h1{color:#1a253c;border-bottom:2px solid #eef2f5;padding-bottom:0.5em;margin-top:0;}\
.entry{padding:1em 0;border-bottom:1px solid #eef2f5;display:flex;align-items:flex-start;flex-wrap:wrap;}\
.entry:last-child{border-bottom:none;}\
.tag{font-weight:600;padding:0.2em 0.6em;border-radius:12px;color:#fff;font-size:0.85em;\
margin-right:1em;flex-shrink:0;}\
.tag.created{background-color:#28a745;}\
.tag.edited{background-color:#007bff;}\
.tag.deleted{background-color:#dc3545;}\
.text{flex-grow:1;word-break:break-word;}\
.date{font-size:0.8em;color:#888;margin-left:1.5em;flex-shrink:0;align-self:center;}\
@media (max-width:600px){.entry{flex-direction:column;align-items:flex-start;}\
.date{margin-left:0;margin-top:0.5em;}}";

/// Render a stored timestamp as `YYYY-MM-DD HH:MM:SS`.
///
/// Documents written by the legacy editor carry naive local timestamps
/// without an offset, so both forms are accepted. Anything unparsable is
/// shown raw rather than dropped.
fn format_timestamp(timestamp: &str) -> String {
    if let Ok(stamped) = DateTime::parse_from_rfc3339(timestamp) {
        return stamped.format("%Y-%m-%d %H:%M:%S").to_string();
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f") {
        return naive.format("%Y-%m-%d %H:%M:%S").to_string();
    }
    timestamp.to_string()
}

/// Escape special HTML characters
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
