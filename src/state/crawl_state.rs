use dashmap::{DashMap, DashSet};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Shared mutable state of a single crawl run
///
/// Holds the set of addresses already claimed by a traversal task and the
/// running word totals across every visited page. Both structures are sharded
/// concurrent collections, so tasks on different workers never contend on a
/// single lock. All mutation goes through the methods below.
#[derive(Debug, Default)]
pub struct CrawlState {
    /// Addresses claimed for visiting
    visited: DashSet<String>,

    /// Word totals across all visited pages
    counts: DashMap<String, u64>,

    /// Addresses whose parse succeeded
    pages_visited: AtomicUsize,
}

impl CrawlState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims `url` for visiting
    ///
    /// Returns true iff this call inserted the address. Check and insert are a
    /// single operation on the owning shard, so among any number of concurrent
    /// callers for the same address exactly one observes `true`.
    pub fn try_mark_visited(&self, url: &str) -> bool {
        self.visited.insert(url.to_string())
    }

    /// Returns whether `url` has been claimed
    pub fn is_visited(&self, url: &str) -> bool {
        self.visited.contains(url)
    }

    /// Merges one page's word counts into the running totals
    ///
    /// Each word is incremented under its shard's write lock, so concurrent
    /// merges never lose an update. The page as a whole is not merged atomically.
    pub fn add_counts(&self, page_counts: &HashMap<String, u64>) {
        for (word, count) in page_counts {
            *self.counts.entry(word.clone()).or_insert(0) += *count;
        }
    }

    /// Records that a claimed address was parsed successfully
    pub fn record_visit(&self) {
        self.pages_visited.fetch_add(1, Ordering::Relaxed);
    }

    /// Number of addresses whose visit completed with a successful parse
    pub fn pages_visited(&self) -> usize {
        self.pages_visited.load(Ordering::Relaxed)
    }

    /// Number of addresses claimed, including those whose parse failed
    pub fn claimed_count(&self) -> usize {
        self.visited.len()
    }

    /// Copies the current word totals
    ///
    /// Intended to be called once all traversal tasks have finished; the copy has
    /// no further relationship with the accumulator.
    pub fn snapshot_counts(&self) -> HashMap<String, u64> {
        self.counts
            .iter()
            .map(|entry| (entry.key().clone(), *entry.value()))
            .collect()
    }
}
