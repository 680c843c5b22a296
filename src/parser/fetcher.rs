//! Page fetcher
//!
//! Builds the shared HTTP client and loads the raw body of an address:
//! - `http`/`https` through reqwest, following redirects
//! - `file` from the local filesystem

use crate::config::UserAgentConfig;
use crate::parser::ParseError;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Raw body of a fetched page
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final URL after redirects, used to resolve relative links
    pub final_url: Url,

    pub body: String,
}

/// Builds an HTTP client with proper configuration
///
/// # Example
///
/// ```no_run
/// use word_crawler::config::UserAgentConfig;
/// use word_crawler::parser::build_http_client;
///
/// let client = build_http_client(&UserAgentConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &UserAgentConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.header_value())
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches the body of `url`
///
/// # Returns
///
/// * `Ok(FetchedPage)` - The body and the URL it was finally served from
/// * `Err(ParseError)` - Malformed URL, unsupported scheme, transport error,
///   non-success status, non-HTML content, or unreadable file
pub async fn fetch_page(client: &Client, url: &str) -> Result<FetchedPage, ParseError> {
    let parsed = Url::parse(url).map_err(|source| ParseError::InvalidUrl {
        url: url.to_string(),
        source,
    })?;

    match parsed.scheme() {
        "http" | "https" => fetch_http(client, parsed).await,
        "file" => fetch_file(parsed).await,
        other => Err(ParseError::UnsupportedScheme {
            url: url.to_string(),
            scheme: other.to_string(),
        }),
    }
}

async fn fetch_http(client: &Client, url: Url) -> Result<FetchedPage, ParseError> {
    let http_error = |source: reqwest::Error| ParseError::Http {
        url: url.to_string(),
        source,
    };

    let response = client.get(url.clone()).send().await.map_err(http_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(ParseError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    if let Some(content_type) = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    {
        if !is_textual(content_type) {
            return Err(ParseError::ContentMismatch {
                url: url.to_string(),
                content_type: content_type.to_string(),
            });
        }
    }

    let final_url = response.url().clone();
    let body = response.text().await.map_err(http_error)?;

    Ok(FetchedPage { final_url, body })
}

async fn fetch_file(url: Url) -> Result<FetchedPage, ParseError> {
    let path = url.to_file_path().map_err(|_| ParseError::InvalidPath {
        url: url.to_string(),
    })?;

    let body = tokio::fs::read_to_string(&path)
        .await
        .map_err(|source| ParseError::Io {
            url: url.to_string(),
            source,
        })?;

    Ok(FetchedPage {
        final_url: url,
        body,
    })
}

/// HTML or any text type; binary payloads are not worth tokenizing
fn is_textual(content_type: &str) -> bool {
    let content_type = content_type.to_ascii_lowercase();
    content_type.starts_with("text/") || content_type.contains("html")
}
