use crate::support::{crawler, seeds, settings, tangled_graph, GraphParser};
use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Arc;
use std::time::{Duration, Instant};
use word_crawler::{rank_words, CrawlResult, Profiler, WebCrawler};

const AMPLE: Duration = Duration::from_secs(60);

/// Deeper than any test graph is long, so the visited set is the reachable set
/// regardless of which path reaches a page first
const DEEP: u32 = 1000;

fn cycle_graph() -> GraphParser {
    GraphParser::new()
        .page("A", &[("alpha", 1), ("shared", 2)], &["B", "C"])
        .page("B", &[("beta", 3), ("shared", 1)], &["A", "D"])
        .page("C", &[("gamma", 1)], &[])
        .page("D", &[("delta", 4), ("shared", 5)], &[])
}

/// Runs `crawl` on a fresh multi-threaded runtime with the given worker count
fn crawl_with_workers(
    workers: usize,
    parser: &Arc<GraphParser>,
    max_depth: u32,
    popular: usize,
    start: &[&str],
) -> CrawlResult {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(workers)
        .enable_all()
        .build()
        .unwrap();
    let crawler = crawler(settings(max_depth, AMPLE, &[], popular), parser);
    let start = seeds(start);
    runtime.block_on(async move { crawler.crawl(&start).await })
}

/// Addresses reachable from `start` by following links
///
/// With a depth budget larger than the graph, this is exactly what a crawl visits.
fn reachable(parser: &GraphParser, start: &str) -> HashSet<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut queue = VecDeque::from([start.to_string()]);

    while let Some(url) = queue.pop_front() {
        if !seen.insert(url.clone()) {
            continue;
        }
        if let Some(page) = parser.pages().get(&url) {
            queue.extend(page.links.iter().cloned());
        }
    }
    seen
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_cycle_scenario_visits_each_page_once() {
    let parser = Arc::new(cycle_graph());
    let crawler = crawler(settings(3, AMPLE, &[], 10), &parser);

    let result = crawler.crawl(&seeds(&["A"])).await;

    assert_eq!(result.urls_visited, 4);
    let calls = parser.calls();
    assert_eq!(calls.len(), 4);
    for url in ["A", "B", "C", "D"] {
        assert_eq!(calls.get(url), Some(&1), "{} parsed more than once", url);
    }

    assert_eq!(
        result.word_counts,
        vec![
            ("shared".to_string(), 8),
            ("delta".to_string(), 4),
            ("beta".to_string(), 3),
            ("alpha".to_string(), 1),
            ("gamma".to_string(), 1),
        ]
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_max_depth_zero_visits_nothing() {
    let parser = Arc::new(cycle_graph());
    let crawler = crawler(settings(0, AMPLE, &[], 10), &parser);

    let result = crawler.crawl(&seeds(&["A", "B"])).await;

    assert_eq!(result.urls_visited, 0);
    assert!(result.word_counts.is_empty());
    assert_eq!(parser.total_calls(), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_passed_deadline_visits_nothing() {
    let parser = Arc::new(cycle_graph());
    let crawler = crawler(settings(5, Duration::ZERO, &[], 10), &parser);

    let result = crawler.crawl(&seeds(&["A"])).await;

    assert_eq!(result.urls_visited, 0);
    assert!(result.word_counts.is_empty());
    assert_eq!(parser.total_calls(), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_depth_bounds_the_crawl() {
    let parser = Arc::new(cycle_graph());
    let crawler = crawler(settings(2, AMPLE, &[], 10), &parser);

    let result = crawler.crawl(&seeds(&["A"])).await;

    // A at depth 2, B and C at depth 1; D would need a third hop
    assert_eq!(result.urls_visited, 3);
    assert!(!parser.calls().contains_key("D"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_ignored_seed_is_never_visited() {
    let parser = Arc::new(cycle_graph());
    let crawler = crawler(settings(3, AMPLE, &["A"], 10), &parser);

    let result = crawler.crawl(&seeds(&["A"])).await;

    assert_eq!(result.urls_visited, 0);
    assert_eq!(parser.total_calls(), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_ignored_link_is_never_visited() {
    let parser = Arc::new(cycle_graph());
    let crawler = crawler(settings(3, AMPLE, &["B|X"], 10), &parser);

    let result = crawler.crawl(&seeds(&["A"])).await;

    // B is skipped, and D is only reachable through B
    assert_eq!(result.urls_visited, 2);
    let calls = parser.calls();
    assert!(!calls.contains_key("B"));
    assert!(!calls.contains_key("D"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_parse_failures_are_dead_ends() {
    let parser = Arc::new(
        GraphParser::new()
            .page("root", &[("root", 1)], &["missing", "leaf", "missing"])
            .page("leaf", &[("leaf", 1)], &[]),
    );
    let crawler = crawler(settings(3, AMPLE, &[], 10), &parser);

    let result = crawler.crawl(&seeds(&["root", "also-missing"])).await;

    assert_eq!(result.urls_visited, 2);
    assert_eq!(parser.calls().get("missing"), Some(&1));
    assert_eq!(parser.calls().get("also-missing"), Some(&1));
    assert_eq!(
        result.word_counts,
        vec![("leaf".to_string(), 1), ("root".to_string(), 1)]
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_duplicate_seeds_visit_once() {
    let parser = Arc::new(cycle_graph());
    let crawler = crawler(settings(3, AMPLE, &[], 10), &parser);

    let result = crawler.crawl(&seeds(&["A", "A", "B", "C"])).await;

    assert_eq!(result.urls_visited, 4);
    assert!(parser.calls().values().all(|calls| *calls == 1));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_popular_word_count_truncates() {
    let parser = Arc::new(cycle_graph());
    let crawler = crawler(settings(3, AMPLE, &[], 2), &parser);

    let result = crawler.crawl(&seeds(&["A"])).await;

    assert_eq!(
        result.word_counts,
        vec![("shared".to_string(), 8), ("delta".to_string(), 4)]
    );
    assert_eq!(result.urls_visited, 4);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_runs_do_not_share_state() {
    let parser = Arc::new(cycle_graph());
    let crawler = crawler(settings(3, AMPLE, &[], 10), &parser);

    let first = crawler.crawl(&seeds(&["A"])).await;
    let second = crawler.crawl(&seeds(&["A"])).await;

    assert_eq!(first, second);
    assert!(parser.calls().values().all(|calls| *calls == 2));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 16)]
async fn test_tangled_graph_visits_each_page_at_most_once() {
    let parser = Arc::new(tangled_graph(300, 8));
    let crawler = crawler(settings(DEEP, AMPLE, &[], 50), &parser);

    let result = crawler
        .crawl(&seeds(&["node-0", "node-1", "node-2", "node-0"]))
        .await;

    let calls = parser.calls();
    assert!(calls.values().all(|calls| *calls == 1));
    assert_eq!(result.urls_visited, calls.len());

    let mut expected: HashSet<String> = HashSet::new();
    for seed in ["node-0", "node-1", "node-2"] {
        expected.extend(reachable(&parser, seed));
    }
    let visited: HashSet<String> = calls.into_keys().collect();
    assert_eq!(visited, expected);
}

#[test]
fn test_counts_independent_of_worker_count() {
    let parser = Arc::new(tangled_graph(200, 6));
    let single = crawl_with_workers(1, &parser, DEEP, 100, &["node-7"]);

    let parser = Arc::new(tangled_graph(200, 6));
    let many = crawl_with_workers(12, &parser, DEEP, 100, &["node-7"]);

    assert_eq!(single, many);

    // Counts equal the sums over exactly the visited pages
    let mut expected: HashMap<String, u64> = HashMap::new();
    for url in reachable(&parser, "node-7") {
        for (word, count) in &parser.pages()[&url].word_counts {
            *expected.entry(word.clone()).or_insert(0) += count;
        }
    }
    assert_eq!(many.word_counts, rank_words(&expected, 100));
    assert_eq!(
        many.word_counts
            .iter()
            .find(|(word, _)| word == "common")
            .map(|(_, count)| *count),
        Some(many.urls_visited as u64)
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_deadline_stops_new_visits() {
    let mut parser = GraphParser::new();
    for i in 0..200 {
        parser = parser.page(
            &format!("chain-{}", i),
            &[("link", 1)],
            &[&format!("chain-{}", i + 1)],
        );
    }
    let parser = Arc::new(parser.with_delay(Duration::from_millis(20)));
    let crawler = crawler(settings(1000, Duration::from_millis(150), &[], 10), &parser);

    let started = Instant::now();
    let result = crawler.crawl(&seeds(&["chain-0"])).await;

    assert!(result.urls_visited >= 1);
    assert!(result.urls_visited < 200);
    // In-flight parses finish, but nothing new starts after the deadline
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_profiled_crawler_returns_same_result() {
    let parser = Arc::new(cycle_graph());
    let plain = crawler(settings(3, AMPLE, &[], 10), &parser);
    let profiler = Profiler::new();
    let profiled = profiler.wrap(crawler(settings(3, AMPLE, &[], 10), &parser));

    let expected = plain.crawl(&seeds(&["A"])).await;
    let actual = profiled.crawl(&seeds(&["A"])).await;

    assert_eq!(expected, actual);
    assert!(profiler
        .state()
        .total("ParallelWebCrawler#crawl")
        .is_some());
}
