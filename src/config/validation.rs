use crate::config::types::{Config, CrawlerConfig, UserAgentConfig};
use crate::url::PatternSet;
use crate::ConfigError;
use url::Url;

const MAX_PARALLELISM: usize = 512;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_user_agent_config(&config.user_agent)?;
    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    // max_depth and popular_word_count are unsigned, so no lower bound check needed

    if config.start_pages.is_empty() {
        return Err(ConfigError::Validation(
            "start_pages must contain at least one URL".to_string(),
        ));
    }

    for page in &config.start_pages {
        validate_start_page(page)?;
    }

    validate_patterns("ignored_urls", &config.ignored_urls)?;
    validate_patterns("ignored_words", &config.ignored_words)?;

    if config.parallelism < 1 || config.parallelism > MAX_PARALLELISM {
        return Err(ConfigError::Validation(format!(
            "parallelism must be between 1 and {}, got {}",
            MAX_PARALLELISM, config.parallelism
        )));
    }

    if !config.timeout_seconds.is_finite() || config.timeout_seconds < 0.0 {
        return Err(ConfigError::Validation(format!(
            "timeout_seconds must be a non-negative number, got {}",
            config.timeout_seconds
        )));
    }

    Ok(())
}

/// Validates a seed address: absolute http, https or file URL
fn validate_start_page(page: &str) -> Result<(), ConfigError> {
    let url = Url::parse(page)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid start page '{}': {}", page, e)))?;

    match url.scheme() {
        "http" | "https" | "file" => Ok(()),
        other => Err(ConfigError::InvalidUrl(format!(
            "Start page '{}' uses unsupported scheme '{}'",
            page, other
        ))),
    }
}

fn validate_patterns(field: &str, patterns: &[String]) -> Result<(), ConfigError> {
    PatternSet::new(patterns)
        .map(|_| ())
        .map_err(|e| ConfigError::InvalidPattern(format!("{}: {}", field, e)))
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    // Validate crawler name: non-empty, alphanumeric + hyphens only
    if config.crawler_name.is_empty() {
        return Err(ConfigError::Validation(
            "crawler_name cannot be empty".to_string(),
        ));
    }

    if !config
        .crawler_name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "crawler_name must contain only alphanumeric characters and hyphens, got '{}'",
            config.crawler_name
        )));
    }

    if let Some(contact_url) = &config.contact_url {
        Url::parse(contact_url)
            .map_err(|e| ConfigError::InvalidUrl(format!("Invalid contact_url: {}", e)))?;
    }

    Ok(())
}
