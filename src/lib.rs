//! Word-Crawler: a bounded, parallel word-frequency crawler
//!
//! This crate walks a hyperlink graph from a set of seed addresses, counts the
//! words on every page it visits, and reports the most popular words across the
//! whole crawl. Traversal is fork-join: every visited page spawns one task per
//! outbound link onto a work-stealing runtime, bounded by depth and a deadline.

pub mod config;
pub mod crawler;
pub mod output;
pub mod parser;
pub mod profiler;
pub mod state;
pub mod url;

use thiserror::Error;

/// Main error type for Word-Crawler operations
#[derive(Debug, Error)]
pub enum CrawlerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),
}

/// Result type alias for Word-Crawler operations
pub type Result<T> = std::result::Result<T, CrawlerError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{rank_words, CrawlResult, ParallelWebCrawler, WebCrawler};
pub use parser::{HtmlPageParser, PageParser, PageResult, ParseError};
pub use profiler::{Profiled, Profiler};
pub use state::{CrawlParameters, CrawlSettings, CrawlState};
pub use url::PatternSet;
