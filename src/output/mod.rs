//! Output module for crawl results and profiling data
//!
//! This module handles:
//! - Writing the crawl result as JSON to a file or stdout
//! - Appending profiling data to a file or printing it to stdout

mod json;

pub use json::{write_result, write_result_to};

use crate::profiler::Profiler;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to serialize result: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Writes profiling data: appended to `path` if given, otherwise printed to stdout
pub fn write_profile_to(profiler: &Profiler, path: Option<&Path>) -> OutputResult<()> {
    match path {
        Some(path) => {
            profiler.write_data_to_path(path)?;
            tracing::info!("Profile data appended to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            profiler.write_data(&mut handle)?;
        }
    }
    Ok(())
}
