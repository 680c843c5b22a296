use std::cmp::Ordering;
use std::collections::HashMap;

/// Ranks word counts into a bounded, totally ordered report
///
/// Words are ordered by:
/// 1. Count, highest first
/// 2. Word length, longest first
/// 3. The word itself, alphabetically
///
/// At most `limit` pairs are returned.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use word_crawler::rank_words;
///
/// let counts: HashMap<String, u64> = [("a", 2), ("bb", 3), ("cc", 3), ("d", 5)]
///     .into_iter()
///     .map(|(w, c)| (w.to_string(), c))
///     .collect();
///
/// let ranked = rank_words(&counts, 3);
/// assert_eq!(
///     ranked,
///     vec![("d".to_string(), 5), ("bb".to_string(), 3), ("cc".to_string(), 3)]
/// );
/// ```
pub fn rank_words(counts: &HashMap<String, u64>, limit: usize) -> Vec<(String, u64)> {
    let mut entries: Vec<(&String, &u64)> = counts.iter().collect();
    entries.sort_unstable_by(|a, b| compare_entries((a.0, *a.1), (b.0, *b.1)));

    entries
        .into_iter()
        .take(limit)
        .map(|(word, count)| (word.clone(), *count))
        .collect()
}

fn compare_entries(a: (&str, u64), b: (&str, u64)) -> Ordering {
    b.1.cmp(&a.1)
        .then_with(|| b.0.chars().count().cmp(&a.0.chars().count()))
        .then_with(|| a.0.cmp(b.0))
}
