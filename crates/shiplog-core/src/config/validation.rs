//! Configuration validation

use tracing::debug;

use crate::error::ConfigError;

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    debug!("validating configuration");
    validate_store(config)?;
    validate_report(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn validate_store(config: &Config) -> Result<(), ConfigError> {
    if config.store.file.as_os_str().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "store.file".to_string(),
            message: "file cannot be empty".to_string(),
        });
    }

    Ok(())
}

fn validate_report(config: &Config) -> Result<(), ConfigError> {
    let valid_formats = ["html"];
    if !valid_formats.contains(&config.report.format.as_str()) {
        return Err(ConfigError::InvalidValue {
            field: "report.format".to_string(),
            message: format!("must be one of: {}", valid_formats.join(", ")),
        });
    }

    if config.report.title.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "report.title".to_string(),
            message: "title cannot be empty".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_rejects_unknown_report_format() {
        let mut config = Config::default();
        config.report.format = "pdf".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_rejects_empty_store_file() {
        let mut config = Config::default();
        config.store.file = Default::default();
        assert!(validate_config(&config).is_err());
    }
}
