use crate::config::types::{Config, InputConfig, OutputConfig, SearcherConfig};
use crate::ConfigError;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_searcher_config(&config.searcher)?;
    validate_input_config(&config.input)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates search behavior configuration
fn validate_searcher_config(config: &SearcherConfig) -> Result<(), ConfigError> {
    if config.keyword.trim().is_empty() {
        return Err(ConfigError::Validation(
            "keyword cannot be blank".to_string(),
        ));
    }

    if config.worker_count < 1 || config.worker_count > 100 {
        return Err(ConfigError::Validation(format!(
            "worker_count must be between 1 and 100, got {}",
            config.worker_count
        )));
    }

    if config.fetch_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "fetch_timeout_secs must be >= 1, got {}",
            config.fetch_timeout_secs
        )));
    }

    Ok(())
}

/// Validates input list configuration
fn validate_input_config(config: &InputConfig) -> Result<(), ConfigError> {
    if config.list_source.trim().is_empty() {
        return Err(ConfigError::Validation(
            "list_source cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.root_path.trim().is_empty() {
        return Err(ConfigError::Validation(
            "root_path cannot be empty".to_string(),
        ));
    }

    Ok(())
}
