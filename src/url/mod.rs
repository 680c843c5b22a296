//! URL handling module for Word-Crawler
//!
//! This module provides the full-match regular expression matcher used to
//! skip ignored addresses during traversal and ignored words during parsing.

mod matcher;

pub use matcher::PatternSet;
