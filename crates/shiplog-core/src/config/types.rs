//! Configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for shiplog
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Project name
    pub name: Option<String>,

    /// Entry store configuration
    pub store: StoreConfig,

    /// Report configuration
    pub report: ReportConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: None,
            store: StoreConfig::default(),
            report: ReportConfig::default(),
        }
    }
}

/// Entry store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Path to the changelog document, relative to the config file
    pub file: PathBuf,

    /// Fail on a malformed document instead of starting from an empty set
    pub strict_load: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("changelog.json"),
            strict_load: false,
        }
    }
}

/// Report configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Title rendered at the top of the report
    pub title: String,

    /// Default output file for exports
    pub file: PathBuf,

    /// Report format
    pub format: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: "Project Changelog".to_string(),
            file: PathBuf::from("changelog.html"),
            format: "html".to_string(),
        }
    }
}
