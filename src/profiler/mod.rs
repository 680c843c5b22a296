//! Wall-clock profiling of crawler operations
//!
//! [`Profiler::wrap`] decorates a [`PageParser`] or [`WebCrawler`] with a type
//! that forwards every call unchanged and records how long it took. Recorded
//! durations accumulate per `Type#method` key and are written out as text.

mod state;

pub use state::ProfilingState;

use crate::crawler::{CrawlResult, WebCrawler};
use crate::parser::{PageParser, PageResult, ParseError};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

/// Collects timing data for every component it wraps
#[derive(Debug, Clone)]
pub struct Profiler {
    state: Arc<ProfilingState>,
    started_at: DateTime<Utc>,
}

impl Profiler {
    pub fn new() -> Self {
        Self {
            state: Arc::new(ProfilingState::new()),
            started_at: Utc::now(),
        }
    }

    /// Wraps `inner` so that its calls are timed into this profiler
    pub fn wrap<T>(&self, inner: T) -> Profiled<T> {
        Profiled {
            inner,
            type_name: short_type_name::<T>(),
            state: Arc::clone(&self.state),
        }
    }

    pub fn state(&self) -> &ProfilingState {
        &self.state
    }

    /// Writes the run header and one line per profiled method
    ///
    /// ```text
    /// Run at Mon, 19 Oct 2026 10:15:00 GMT
    /// HtmlPageParser#parse took 0m 1s 250ms
    /// ParallelWebCrawler#crawl took 0m 2s 4ms
    /// ```
    pub fn write_data<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(
            writer,
            "Run at {}",
            self.started_at.format("%a, %d %b %Y %H:%M:%S GMT")
        )?;
        self.state.write(writer)?;
        writeln!(writer)?;
        Ok(())
    }

    /// Appends the profiling data to the file at `path`, creating it if needed
    pub fn write_data_to_path(&self, path: &Path) -> io::Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        self.write_data(&mut file)?;
        file.flush()
    }
}

impl Default for Profiler {
    fn default() -> Self {
        Self::new()
    }
}

/// A component whose calls are timed
///
/// Inputs and outputs pass through untouched.
#[derive(Debug)]
pub struct Profiled<T> {
    inner: T,
    type_name: &'static str,
    state: Arc<ProfilingState>,
}

impl<T> Profiled<T> {
    pub fn inner(&self) -> &T {
        &self.inner
    }

    fn record(&self, method: &str, started: Instant) {
        self.state
            .record(&format!("{}#{}", self.type_name, method), started.elapsed());
    }
}

#[async_trait]
impl<T: PageParser> PageParser for Profiled<T> {
    async fn parse(&self, url: &str) -> Result<PageResult, ParseError> {
        let started = Instant::now();
        let result = self.inner.parse(url).await;
        self.record("parse", started);
        result
    }
}

#[async_trait]
impl<T: WebCrawler> WebCrawler for Profiled<T> {
    async fn crawl(&self, start_pages: &[String]) -> CrawlResult {
        let started = Instant::now();
        let result = self.inner.crawl(start_pages).await;
        self.record("crawl", started);
        result
    }
}

/// `word_crawler::parser::HtmlPageParser` -> `HtmlPageParser`
fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    // Generic arguments may contain paths of their own
    let base = full.split('<').next().unwrap_or(full);
    let start = base.rfind("::").map(|i| i + 2).unwrap_or(0);
    &full[start..]
}
