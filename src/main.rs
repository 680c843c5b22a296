//! Word-Crawler main entry point
//!
//! This is the command-line interface for the Word-Crawler.

use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use word_crawler::config::{load_config, Config};
use word_crawler::output::{write_profile_to, write_result_to};
use word_crawler::Profiler;

/// Word-Crawler: a bounded, parallel word-frequency crawler
///
/// Word-Crawler follows links from the configured start pages up to a maximum
/// depth and time budget, counts the words on every page it visits, and
/// reports the most popular ones.
#[derive(Parser, Debug)]
#[command(name = "word-crawler")]
#[command(version)]
#[command(about = "A bounded, parallel word-frequency crawler", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be crawled without actually crawling
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let config = match load_config(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e).context(format!("invalid configuration {}", cli.config.display()));
        }
    };

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.crawler.parallelism)
        .thread_name("word-crawler-worker")
        .enable_all()
        .build()
        .context("failed to start the async runtime")?;

    runtime.block_on(handle_crawl(config))
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("word_crawler=info,warn"),
            1 => EnvFilter::new("word_crawler=debug,info"),
            2 => EnvFilter::new("word_crawler=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    // Logs go to stderr so a result printed to stdout stays valid JSON
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: shows the validated configuration
fn handle_dry_run(config: &Config) {
    println!("=== Word-Crawler Dry Run ===\n");

    println!("Crawler Configuration:");
    println!("  Max depth: {}", config.crawler.max_depth);
    println!("  Timeout: {}s", config.crawler.timeout_seconds);
    println!("  Parallelism: {}", config.crawler.parallelism);
    println!("  Popular word count: {}", config.crawler.popular_word_count);

    println!("\nUser Agent: {}", config.user_agent.header_value());

    println!("\nOutput:");
    println!(
        "  Result: {}",
        config.output.result_path.as_deref().unwrap_or("<stdout>")
    );
    println!(
        "  Profile: {}",
        config
            .output
            .profile_output_path
            .as_deref()
            .unwrap_or("<stdout>")
    );

    println!("\nStart Pages ({}):", config.crawler.start_pages.len());
    for page in &config.crawler.start_pages {
        println!("  - {}", page);
    }

    println!("\nIgnored URL Patterns ({}):", config.crawler.ignored_urls.len());
    for pattern in &config.crawler.ignored_urls {
        println!("  - {}", pattern);
    }

    println!(
        "\nIgnored Word Patterns ({}):",
        config.crawler.ignored_words.len()
    );
    for pattern in &config.crawler.ignored_words {
        println!("  - {}", pattern);
    }

    println!("\n✓ Configuration is valid");
}

/// Handles the main crawl operation
async fn handle_crawl(config: Config) -> anyhow::Result<()> {
    let profiler = Profiler::new();

    let result = word_crawler::crawler::crawl(&config, &profiler)
        .await
        .context("crawl failed")?;

    write_result_to(&result, config.output.result_path.as_deref().map(Path::new))
        .context("failed to write crawl result")?;

    write_profile_to(
        &profiler,
        config.output.profile_output_path.as_deref().map(Path::new),
    )
    .context("failed to write profile data")?;

    Ok(())
}
