use crate::config::types::FetcherConfig;
use crate::{ConfigError, ConfigResult};

const MIN_TIMEOUT_MS: u64 = 100;
const MAX_TIMEOUT_MS: u64 = 600_000;
const MAX_REDIRECT_LIMIT: usize = 50;

/// Validates the fetcher configuration
pub fn validate(config: &FetcherConfig) -> ConfigResult<()> {
    validate_user_agent(&config.user_agent)?;

    if config.timeout_ms < MIN_TIMEOUT_MS || config.timeout_ms > MAX_TIMEOUT_MS {
        return Err(ConfigError::Validation(format!(
            "timeout_ms must be between {} and {}, got {}",
            MIN_TIMEOUT_MS, MAX_TIMEOUT_MS, config.timeout_ms
        )));
    }

    if config.max_redirects > MAX_REDIRECT_LIMIT {
        return Err(ConfigError::Validation(format!(
            "max_redirects must be <= {}, got {}",
            MAX_REDIRECT_LIMIT, config.max_redirects
        )));
    }

    Ok(())
}

/// Validates a user agent header value
fn validate_user_agent(user_agent: &str) -> ConfigResult<()> {
    if user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    // Must be usable as a header value
    if user_agent.chars().any(|c| c.is_control()) {
        return Err(ConfigError::Validation(format!(
            "user_agent contains control characters: {:?}",
            user_agent
        )));
    }

    Ok(())
}
