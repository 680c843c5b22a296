//! State module for one crawl run
//!
//! # Components
//!
//! - `CrawlState`: the visited-address set and the word-count accumulator shared by all traversal tasks
//! - `CrawlSettings`: crawl limits derived from configuration, reusable across runs
//! - `CrawlParameters`: the immutable per-run parameters, including the absolute deadline

mod crawl_state;
mod params;

// Re-export main types
pub use crawl_state::CrawlState;
pub use params::{CrawlParameters, CrawlSettings};
