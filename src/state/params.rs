use crate::config::CrawlerConfig;
use crate::url::PatternSet;
use crate::ConfigError;
use std::time::{Duration, Instant};

/// Crawl limits derived from configuration
///
/// Unlike [`CrawlParameters`], settings carry a relative timeout and can start
/// any number of independent runs.
#[derive(Debug, Clone)]
pub struct CrawlSettings {
    /// Maximum number of link hops, the seed itself counting as one
    pub max_depth: u32,

    /// Time budget for one run
    pub timeout: Duration,

    /// Addresses that are never visited
    pub ignored_urls: PatternSet,

    /// Maximum number of words in the ranked report
    pub popular_word_count: usize,
}

impl CrawlSettings {
    /// Builds settings from the crawler section of the configuration
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlSettings)` - All ignored-url patterns compiled
    /// * `Err(ConfigError)` - A pattern failed to compile or the timeout is invalid
    pub fn from_config(config: &CrawlerConfig) -> Result<Self, ConfigError> {
        let ignored_urls = PatternSet::new(&config.ignored_urls)
            .map_err(|e| ConfigError::InvalidPattern(format!("ignored_urls: {}", e)))?;

        let timeout = Duration::try_from_secs_f64(config.timeout_seconds).map_err(|e| {
            ConfigError::Validation(format!(
                "Invalid timeout_seconds {}: {}",
                config.timeout_seconds, e
            ))
        })?;

        Ok(Self {
            max_depth: config.max_depth,
            timeout,
            ignored_urls,
            popular_word_count: config.popular_word_count,
        })
    }

    /// Fixes the deadline of a run starting at `started_at`
    pub fn start_run(&self, started_at: Instant) -> CrawlParameters {
        // A timeout too large to represent is treated as no deadline at all
        let deadline = started_at
            .checked_add(self.timeout)
            .unwrap_or_else(|| far_future(started_at));

        CrawlParameters {
            max_depth: self.max_depth,
            deadline,
            ignored_urls: self.ignored_urls.clone(),
            popular_word_count: self.popular_word_count,
        }
    }
}

fn far_future(from: Instant) -> Instant {
    // ~30 years
    from + Duration::from_secs(60 * 60 * 24 * 365 * 30)
}

/// Immutable parameters of one crawl run, shared by reference across all tasks
#[derive(Debug, Clone)]
pub struct CrawlParameters {
    pub max_depth: u32,

    /// No new page visit may begin at or after this instant
    pub deadline: Instant,

    pub ignored_urls: PatternSet,

    pub popular_word_count: usize,
}

impl CrawlParameters {
    /// Returns true once `now` has reached the deadline
    pub fn deadline_passed(&self, now: Instant) -> bool {
        now >= self.deadline
    }

    /// Returns true if the address matches any ignored-url pattern
    pub fn is_ignored(&self, url: &str) -> bool {
        self.ignored_urls.matches(url)
    }
}
