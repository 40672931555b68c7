//! Exit codes for the CLI

/// Rejected input, e.g. empty entry text
pub const VALIDATION_ERROR: i32 = 2;

/// No entry with the requested timestamp
pub const NOT_FOUND: i32 = 3;

/// Report could not be written
pub const EXPORT_ERROR: i32 = 4;
