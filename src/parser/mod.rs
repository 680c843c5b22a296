//! Page parsing for the crawler
//!
//! This module defines the page-parser capability the traversal consumes and
//! its HTML implementation, which:
//! - Fetches `http`/`https` addresses with reqwest, or reads `file` addresses from disk
//! - Counts the words in the page body
//! - Extracts outbound links, resolved against the page address

mod fetcher;
mod html;

pub use fetcher::{build_http_client, fetch_page, FetchedPage};
pub use html::{normalize_word, parse_html};

use crate::config::Config;
use crate::url::PatternSet;
use crate::{ConfigError, CrawlerError};
use async_trait::async_trait;
use reqwest::Client;
use std::collections::HashMap;
use thiserror::Error;

/// Errors raised while fetching or parsing a single page
///
/// The traversal treats every variant the same way: the page is a dead end.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        source: ::url::ParseError,
    },

    #[error("Unsupported scheme '{scheme}' for {url}")]
    UnsupportedScheme { url: String, scheme: String },

    #[error("Cannot map {url} to a local path")]
    InvalidPath { url: String },

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Content type '{content_type}' of {url} is not HTML")]
    ContentMismatch { url: String, content_type: String },

    #[error("IO error for {url}: {source}")]
    Io {
        url: String,
        source: std::io::Error,
    },
}

/// Words and outbound links of one page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageResult {
    /// Occurrences of each word on this page only
    pub word_counts: HashMap<String, u64>,

    /// Outbound addresses in order of appearance, duplicates included
    pub links: Vec<String>,
}

/// Capability that turns an address into its word counts and links
#[async_trait]
pub trait PageParser: Send + Sync {
    async fn parse(&self, url: &str) -> Result<PageResult, ParseError>;
}

/// Page parser backed by reqwest and scraper
#[derive(Debug, Clone)]
pub struct HtmlPageParser {
    client: Client,
    ignored_words: PatternSet,
}

impl HtmlPageParser {
    pub fn new(client: Client, ignored_words: PatternSet) -> Self {
        Self {
            client,
            ignored_words,
        }
    }

    /// Builds the parser from configuration: HTTP client with the configured
    /// user agent, and the compiled ignored-word patterns
    pub fn from_config(config: &Config) -> Result<Self, CrawlerError> {
        let ignored_words = PatternSet::new(&config.crawler.ignored_words)
            .map_err(|e| ConfigError::InvalidPattern(format!("ignored_words: {}", e)))?;
        let client = build_http_client(&config.user_agent)?;

        Ok(Self::new(client, ignored_words))
    }
}

#[async_trait]
impl PageParser for HtmlPageParser {
    async fn parse(&self, url: &str) -> Result<PageResult, ParseError> {
        let page = fetch_page(&self.client, url).await?;
        Ok(parse_html(&page.body, &page.final_url, &self.ignored_words))
    }
}
