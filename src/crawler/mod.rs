//! Crawler module: the parallel traversal engine
//!
//! This module contains the core crawling logic, including:
//! - Fork-join traversal tasks bounded by depth and deadline
//! - Ranking of the aggregated word counts
//! - Overall crawl coordination

mod coordinator;
mod ranker;
mod result;
mod task;

pub use coordinator::ParallelWebCrawler;
pub use ranker::rank_words;
pub use result::CrawlResult;
pub use task::{CrawlContext, TraversalTask, VisitOutcome};

use crate::config::Config;
use crate::parser::{HtmlPageParser, PageParser};
use crate::profiler::Profiler;
use crate::CrawlerError;
use async_trait::async_trait;
use std::sync::Arc;

/// A crawler that turns seed addresses into a ranked word report
///
/// Per-page failures never surface here; they only shrink the result.
#[async_trait]
pub trait WebCrawler: Send + Sync {
    async fn crawl(&self, start_pages: &[String]) -> CrawlResult;
}

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Build the HTML page parser from the configuration
/// 2. Build the parallel crawler
/// 3. Wrap both with the profiler
/// 4. Crawl the configured start pages
///
/// # Returns
///
/// * `Ok(CrawlResult)` - Crawl completed
/// * `Err(CrawlerError)` - The configuration could not be turned into a crawler
pub async fn crawl(config: &Config, profiler: &Profiler) -> Result<CrawlResult, CrawlerError> {
    let parser: Arc<dyn PageParser> = Arc::new(profiler.wrap(HtmlPageParser::from_config(config)?));
    let crawler = profiler.wrap(ParallelWebCrawler::from_config(&config.crawler, parser)?);

    Ok(crawler.crawl(&config.crawler.start_pages).await)
}
