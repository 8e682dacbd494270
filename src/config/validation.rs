use crate::config::types::{Config, FetchConfig};
use crate::ConfigError;
use scraper::Selector;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_fetch_config(&config.fetch)?;
    Ok(())
}

/// Validates page fetching configuration
fn validate_fetch_config(config: &FetchConfig) -> Result<(), ConfigError> {
    let base = Url::parse(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base-url: {}", e)))?;

    if base.scheme() != "http" && base.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "base-url must use the http or https scheme, got '{}'",
            base.scheme()
        )));
    }

    if config.timeout_ms == 0 {
        return Err(ConfigError::Validation(
            "timeout-ms must be nonzero".to_string(),
        ));
    }

    Selector::parse(&config.region_selector).map_err(|e| {
        ConfigError::InvalidSelector(format!("Invalid region-selector '{}': {}", config.region_selector, e))
    })?;

    if config.user_agent.is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}
