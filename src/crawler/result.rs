use serde::ser::Serializer;
use serde::Serialize;

/// Outcome of one crawl run
///
/// Serializes as `{"wordCounts": {"word": count, ...}, "urlsVisited": n}` with
/// the word object in ranked order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrawlResult {
    /// Ranked (word, count) pairs, most popular first
    #[serde(serialize_with = "serialize_ranked")]
    pub word_counts: Vec<(String, u64)>,

    /// Distinct addresses that were parsed successfully
    pub urls_visited: usize,
}

fn serialize_ranked<S: Serializer>(pairs: &[(String, u64)], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_map(pairs.iter().map(|(word, count)| (word, count)))
}
