//! Fork-join traversal of the link graph
//!
//! One [`TraversalTask`] decides the fate of one address. When it visits the
//! page it spawns a child task per outbound link onto the runtime and waits
//! for all of them; while it waits, its worker thread is free to run any other
//! pending task.

use crate::parser::PageParser;
use crate::state::{CrawlParameters, CrawlState};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinSet;

/// Everything a traversal task shares with its siblings for one run
pub struct CrawlContext {
    pub params: CrawlParameters,
    pub state: CrawlState,
    pub parser: Arc<dyn PageParser>,
}

impl CrawlContext {
    pub fn new(params: CrawlParameters, parser: Arc<dyn PageParser>) -> Self {
        Self {
            params,
            state: CrawlState::new(),
            parser,
        }
    }
}

/// What happened to one address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisitOutcome {
    /// Parsed, counted, and its links traversed
    Visited,
    /// No depth budget left
    DepthExhausted,
    /// The run deadline had passed at task entry
    DeadlinePassed,
    /// Matched an ignored-url pattern
    Ignored,
    /// Another task claimed the address first
    AlreadyVisited,
    /// The page parser failed; the address is a dead end
    ParseFailed,
}

impl VisitOutcome {
    pub fn is_visited(&self) -> bool {
        matches!(self, Self::Visited)
    }
}

type TaskFuture = Pin<Box<dyn Future<Output = VisitOutcome> + Send + 'static>>;

/// One node of the recursive traversal
pub struct TraversalTask {
    url: String,
    remaining_depth: u32,
    context: Arc<CrawlContext>,
}

impl TraversalTask {
    pub fn new(url: String, remaining_depth: u32, context: Arc<CrawlContext>) -> Self {
        Self {
            url,
            remaining_depth,
            context,
        }
    }

    /// Runs this task and, transitively, all of its children
    ///
    /// Boxed so the recursion through spawned children has a nameable type.
    pub fn run(self) -> TaskFuture {
        Box::pin(self.compute())
    }

    async fn compute(self) -> VisitOutcome {
        let context = &self.context;

        if self.remaining_depth == 0 {
            tracing::trace!(url = %self.url, "depth exhausted");
            return VisitOutcome::DepthExhausted;
        }

        if context.params.deadline_passed(Instant::now()) {
            tracing::trace!(url = %self.url, "deadline passed");
            return VisitOutcome::DeadlinePassed;
        }

        if context.params.is_ignored(&self.url) {
            tracing::debug!(url = %self.url, "ignored by pattern");
            return VisitOutcome::Ignored;
        }

        // The single synchronization point: exactly one task per address gets past here
        if !context.state.try_mark_visited(&self.url) {
            tracing::trace!(url = %self.url, "already visited");
            return VisitOutcome::AlreadyVisited;
        }

        let page = match context.parser.parse(&self.url).await {
            Ok(page) => page,
            Err(e) => {
                tracing::debug!(url = %self.url, error = %e, "parse failed");
                return VisitOutcome::ParseFailed;
            }
        };

        context.state.add_counts(&page.word_counts);
        context.state.record_visit();

        tracing::debug!(
            url = %self.url,
            words = page.word_counts.len(),
            links = page.links.len(),
            remaining_depth = self.remaining_depth,
            "visited"
        );

        let mut children = JoinSet::new();
        for link in page.links {
            let child = TraversalTask::new(link, self.remaining_depth - 1, Arc::clone(context));
            children.spawn(child.run());
        }
        join_all(children).await;

        VisitOutcome::Visited
    }
}

/// Waits for every task in the set
///
/// A panicking task is logged and otherwise treated like a dead end.
pub(crate) async fn join_all(mut tasks: JoinSet<VisitOutcome>) {
    while let Some(joined) = tasks.join_next().await {
        if let Err(e) = joined {
            tracing::error!(error = %e, "traversal task panicked or was cancelled");
        }
    }
}
