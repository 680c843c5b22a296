use dashmap::DashMap;
use std::io::{self, Write};
use std::time::Duration;

/// Accumulated elapsed time per profiled `Type#method`
#[derive(Debug, Default)]
pub struct ProfilingState {
    totals: DashMap<String, Duration>,
}

impl ProfilingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `elapsed` to the total for `key`
    pub fn record(&self, key: &str, elapsed: Duration) {
        *self.totals.entry(key.to_string()).or_default() += elapsed;
    }

    pub fn total(&self, key: &str) -> Option<Duration> {
        self.totals.get(key).map(|entry| *entry.value())
    }

    /// Writes one line per key, sorted by key
    pub fn write<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        let mut totals: Vec<(String, Duration)> = self
            .totals
            .iter()
            .map(|entry| (entry.key().clone(), *entry.value()))
            .collect();
        totals.sort_by(|a, b| a.0.cmp(&b.0));

        for (key, elapsed) in totals {
            writeln!(writer, "{} took {}", key, format_duration(elapsed))?;
        }
        Ok(())
    }
}

/// Formats as `<minutes>m <seconds>s <millis>ms`
fn format_duration(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{}m {}s {}ms", secs / 60, secs % 60, elapsed.subsec_millis())
}
