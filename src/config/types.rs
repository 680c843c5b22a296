use serde::Deserialize;

/// Main configuration structure for Word-Crawler
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub crawler: CrawlerConfig,
    #[serde(rename = "user-agent", default)]
    pub user_agent: UserAgentConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Seed addresses the crawl starts from
    #[serde(rename = "start-pages")]
    pub start_pages: Vec<String>,

    /// Regular expressions for addresses that are never visited
    #[serde(rename = "ignored-urls", default)]
    pub ignored_urls: Vec<String>,

    /// Regular expressions for words that are never counted
    #[serde(rename = "ignored-words", default)]
    pub ignored_words: Vec<String>,

    /// Number of worker threads driving the crawl
    #[serde(default = "default_parallelism")]
    pub parallelism: usize,

    /// Maximum number of link hops from a seed, the seed itself included
    #[serde(rename = "max-depth")]
    pub max_depth: u32,

    /// Time budget after which no new page visit may begin
    #[serde(rename = "timeout-seconds")]
    pub timeout_seconds: f64,

    /// Maximum number of words in the final report
    #[serde(rename = "popular-word-count")]
    pub popular_word_count: usize,
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the crawler
    #[serde(rename = "contact-url", default)]
    pub contact_url: Option<String>,
}

impl UserAgentConfig {
    /// Formats the User-Agent header: `Name/Version (+ContactURL)`
    pub fn header_value(&self) -> String {
        match &self.contact_url {
            Some(contact) => format!(
                "{}/{} (+{})",
                self.crawler_name, self.crawler_version, contact
            ),
            None => format!("{}/{}", self.crawler_name, self.crawler_version),
        }
    }
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: env!("CARGO_PKG_NAME").to_string(),
            crawler_version: env!("CARGO_PKG_VERSION").to_string(),
            contact_url: None,
        }
    }
}

/// Output configuration
///
/// Absent paths mean standard output.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// Path of the JSON crawl result
    #[serde(rename = "result-path", default)]
    pub result_path: Option<String>,

    /// Path the profiling data is appended to
    #[serde(rename = "profile-output-path", default)]
    pub profile_output_path: Option<String>,
}

fn default_parallelism() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
