//! Output formatting utilities

use console::{style, Style};

use shiplog_store::Operation;

/// Print a success message
pub fn success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", style("✗").red().bold(), message);
}

/// Print an info message
pub fn info(message: &str) {
    println!("{} {}", style("→").blue(), message);
}

/// Style for entry timestamps
pub fn timestamp_style() -> Style {
    Style::new().dim()
}

/// Style for paths
pub fn path_style() -> Style {
    Style::new().cyan()
}

/// Styled operation tag, colored to match the report
pub fn operation_tag(operation: Operation) -> String {
    let styled = match operation {
        Operation::Created => style(operation.label()).green(),
        Operation::Edited => style(operation.label()).blue(),
        Operation::Deleted => style(operation.label()).red(),
    };
    format!("[{}]", styled.bold())
}
