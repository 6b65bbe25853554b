//! Web-search snippet fetcher (Tavily).
//!
//! Snippets are grounding context, not answers: losing them degrades quality
//! but must never fail a request. The public [`SnippetFetcher::fetch_text`]
//! therefore absorbs every failure (missing key, network, provider error,
//! decode) into an empty string, logging a `warn!` so the degradation is
//! visible in traces. The fallible path stays available as
//! [`SnippetFetcher::try_search`] for callers that want the real error.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Default Tavily search endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.tavily.com/search";

/// Snippet body is clamped to this many characters per hit.
const SNIPPET_MAX_CHARS: usize = 200;

/// Configuration for the snippet fetcher.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Tavily API key. `None` degrades every fetch to empty results.
    pub api_key: Option<String>,

    /// Search endpoint URL.
    pub endpoint: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl SearchConfig {
    /// Builds a config from the environment (`TAVILY_API_KEY`).
    ///
    /// A missing key is not an error here: the fetcher's contract is to
    /// degrade to empty snippets, so startup must not fail on it.
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("TAVILY_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            endpoint: std::env::var("TAVILY_URL").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string()),
            timeout_secs: 15,
        }
    }
}

/// Errors from the fallible search path.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum SearchError {
    /// No API key configured; no request was attempted.
    #[error("[Snippet Search] no API key configured")]
    MissingApiKey,

    /// Transport-level failure (connect, timeout, TLS).
    #[error("[Snippet Search] transport error: {0}")]
    HttpTransport(#[from] reqwest::Error),

    /// Provider returned a non-successful HTTP status.
    #[error("[Snippet Search] HTTP {status} from provider")]
    HttpStatus {
        /// Numeric HTTP status code.
        status: reqwest::StatusCode,
    },
}

/// Fetches short web snippets from Tavily.
#[derive(Debug)]
pub struct SnippetFetcher {
    client: reqwest::Client,
    cfg: SearchConfig,
}

impl SnippetFetcher {
    /// Creates a fetcher from the given config.
    ///
    /// Building the HTTP client can only fail on a broken TLS backend, which
    /// is a process-level defect; that error is propagated.
    pub fn new(cfg: SearchConfig) -> Result<Self, SearchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()?;
        Ok(Self { client, cfg })
    }

    /// Fetches up to `max_hits` snippets formatted as a single text block.
    ///
    /// This method **never fails**: any error from [`Self::try_search`] is
    /// logged and collapsed into an empty string. Callers get either usable
    /// grounding text or nothing, and proceed either way.
    pub async fn fetch_text(&self, query: &str, max_hits: usize) -> String {
        match self.try_search(query, max_hits).await {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, query_len = query.len(), "snippet search degraded to empty");
                String::new()
            }
        }
    }

    /// Fallible search returning the formatted snippet block.
    ///
    /// # Errors
    /// - [`SearchError::MissingApiKey`] if no key is configured (no request sent)
    /// - [`SearchError::HttpTransport`] for network failures
    /// - [`SearchError::HttpStatus`] for non-2xx provider responses
    pub async fn try_search(&self, query: &str, max_hits: usize) -> Result<String, SearchError> {
        let api_key = self
            .cfg
            .api_key
            .as_deref()
            .ok_or(SearchError::MissingApiKey)?;

        let started = Instant::now();
        let body = SearchRequest {
            api_key,
            query,
            max_results: max_hits,
        };

        let resp = self
            .client
            .post(&self.cfg.endpoint)
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(SearchError::HttpStatus {
                status: resp.status(),
            });
        }

        let out: SearchResponse = resp.json().await?;

        debug!(
            hits = out.results.len(),
            latency_ms = started.elapsed().as_millis(),
            "snippet search completed"
        );

        Ok(format_results(&out.results, max_hits))
    }
}

/// Formats hits into the block handed to prompt templates.
///
/// One entry per hit: title line, URL line, snippet clamped to 200 chars.
fn format_results(results: &[SearchResult], max_hits: usize) -> String {
    results
        .iter()
        .take(max_hits)
        .map(|r| {
            let title = r.title.as_deref().unwrap_or("No title");
            let url = r.url.as_deref().unwrap_or("");
            let snippet = clamp_chars(r.content.as_deref().unwrap_or(""), SNIPPET_MAX_CHARS);
            format!("- {title}\n  URL: {url}\n  Snippet: {snippet}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn clamp_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/* ===========================================================================
HTTP payloads
======================================================================== */

#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    api_key: &'a str,
    query: &'a str,
    max_results: usize,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    title: Option<String>,
    url: Option<String>,
    content: Option<String>,
}
