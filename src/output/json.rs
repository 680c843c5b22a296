use crate::crawler::CrawlResult;
use crate::output::OutputResult;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Writes the result as pretty-printed JSON followed by a newline
pub fn write_result<W: Write>(result: &CrawlResult, mut writer: W) -> OutputResult<()> {
    serde_json::to_writer_pretty(&mut writer, result)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Writes the result to `path`, replacing any existing file, or to stdout if no path is given
pub fn write_result_to(result: &CrawlResult, path: Option<&Path>) -> OutputResult<()> {
    match path {
        Some(path) => {
            let file = File::create(path)?;
            write_result(result, BufWriter::new(file))?;
            tracing::info!("Crawl result written to {}", path.display());
        }
        None => write_result(result, io::stdout().lock())?,
    }
    Ok(())
}
