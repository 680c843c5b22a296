//! Crawl orchestration
//!
//! Creates the shared state for one run, starts one root traversal task per
//! seed, waits for the whole task tree, and ranks the aggregated word counts.

use crate::config::CrawlerConfig;
use crate::crawler::ranker::rank_words;
use crate::crawler::task::{join_all, CrawlContext, TraversalTask};
use crate::crawler::{CrawlResult, WebCrawler};
use crate::parser::PageParser;
use crate::state::CrawlSettings;
use crate::ConfigError;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinSet;

/// Crawler that traverses the link graph in parallel on the tokio runtime
///
/// Parallelism is whatever the runtime the crawl is awaited on provides; build
/// a multi-threaded runtime with the desired number of worker threads.
pub struct ParallelWebCrawler {
    settings: CrawlSettings,
    parser: Arc<dyn PageParser>,
}

impl ParallelWebCrawler {
    pub fn new(settings: CrawlSettings, parser: Arc<dyn PageParser>) -> Self {
        Self { settings, parser }
    }

    /// Creates a crawler from the crawler section of the configuration
    ///
    /// # Returns
    ///
    /// * `Ok(ParallelWebCrawler)` - Ready to crawl
    /// * `Err(ConfigError)` - Invalid ignored-url pattern or timeout
    pub fn from_config(
        config: &CrawlerConfig,
        parser: Arc<dyn PageParser>,
    ) -> Result<Self, ConfigError> {
        Ok(Self::new(CrawlSettings::from_config(config)?, parser))
    }

    pub fn settings(&self) -> &CrawlSettings {
        &self.settings
    }
}

#[async_trait]
impl WebCrawler for ParallelWebCrawler {
    async fn crawl(&self, start_pages: &[String]) -> CrawlResult {
        let started_at = Instant::now();
        let params = self.settings.start_run(started_at);
        let max_depth = params.max_depth;
        let popular_word_count = params.popular_word_count;
        let context = Arc::new(CrawlContext::new(params, Arc::clone(&self.parser)));

        tracing::info!(
            "Starting crawl of {} seed pages (max depth {}, timeout {:?})",
            start_pages.len(),
            max_depth,
            self.settings.timeout
        );

        let mut roots = JoinSet::new();
        for page in start_pages {
            let root = TraversalTask::new(page.clone(), max_depth, Arc::clone(&context));
            roots.spawn(root.run());
        }
        join_all(roots).await;

        let counts = context.state.snapshot_counts();
        let urls_visited = context.state.pages_visited();

        tracing::info!(
            "Crawl completed: {} pages visited, {} addresses claimed, {} distinct words in {:?}",
            urls_visited,
            context.state.claimed_count(),
            counts.len(),
            started_at.elapsed()
        );

        CrawlResult {
            word_counts: rank_words(&counts, popular_word_count),
            urls_visited,
        }
    }
}
