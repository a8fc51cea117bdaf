//! arXiv RSS retrieval.
//!
//! One request per category, sequential, in request order. Transport, status
//! and format failures of a single category become
//! [`CategoryOutcome::Failed`] so the rest of the run carries on.

use crate::aggregate::CategoryOutcome;
use crate::error::{DigestError, Result};
use crate::feed::FeedParser;
use std::time::Duration;
use tracing::{debug, error, info, warn};
use url::Url;

/// Default arXiv RSS endpoint; the category is appended as a path segment
pub const DEFAULT_FEED_URL: &str = "https://rss.arxiv.org/rss";

/// User agent string for requests
const USER_AGENT: &str = concat!("arxiv-digest/", env!("CARGO_PKG_VERSION"));

/// Retrieval options
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Feed base URL
    pub feed_base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// User agent header
    pub user_agent: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            feed_base_url: DEFAULT_FEED_URL.to_string(),
            timeout_secs: 30,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

/// HTTP client for category feeds
pub struct FeedClient {
    client: reqwest::Client,
    base_url: Url,
}

impl FeedClient {
    /// Create a new FeedClient
    pub fn new(options: &FetchOptions) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(options.user_agent.as_str())
            .timeout(Duration::from_secs(options.timeout_secs))
            .build()
            .map_err(|e| DigestError::Config(format!("Failed to build HTTP client: {}", e)))?;

        // Trailing slash so `join` appends instead of replacing the last segment
        let base = format!("{}/", options.feed_base_url.trim_end_matches('/'));
        let base_url = Url::parse(&base).map_err(|e| {
            DigestError::Config(format!("Invalid feed URL '{}': {}", options.feed_base_url, e))
        })?;

        Ok(Self { client, base_url })
    }

    /// Feed URL for a category
    pub fn feed_url(&self, category: &str) -> Result<Url> {
        self.base_url
            .join(category)
            .map_err(|e| DigestError::Config(format!("Invalid category '{}': {}", category, e)))
    }

    /// Fetch the raw feed body for a category
    pub async fn fetch_raw(&self, category: &str) -> Result<String> {
        let url = self.feed_url(category)?;
        debug!(category = category, url = %url, "Fetching feed");

        let response = self.client.get(url.as_str()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DigestError::Api {
                code: status.as_u16(),
                message: format!("Feed request failed: {}", status),
            });
        }

        Ok(response.text().await?)
    }

    /// Fetch and parse one category.
    ///
    /// Every error for this category, including an unusable category name,
    /// yields [`CategoryOutcome::Failed`].
    pub async fn fetch_category(&self, parser: &FeedParser, category: &str) -> CategoryOutcome {
        let fetched = match self.fetch_raw(category).await {
            Ok(body) => parser.parse_report(&body, category),
            Err(e) => Err(e),
        };

        match fetched {
            Ok(report) => {
                info!(
                    category = category,
                    count = report.records.len(),
                    skipped = report.skipped.total(),
                    "Fetched category"
                );
                CategoryOutcome::Fetched {
                    category: category.to_string(),
                    records: report.records,
                    skipped: report.skipped,
                }
            }
            Err(e) => {
                if e.is_per_category() {
                    warn!(category = category, error = %e, "Failed to fetch category");
                } else {
                    error!(category = category, error = %e, "Unusable category");
                }
                CategoryOutcome::Failed {
                    category: category.to_string(),
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Fetch every category in order
    pub async fn fetch_all(&self, parser: &FeedParser, categories: &[String]) -> Vec<CategoryOutcome> {
        let mut outcomes = Vec::with_capacity(categories.len());
        for category in categories {
            outcomes.push(self.fetch_category(parser, category).await);
        }

        let failed = outcomes.iter().filter(|o| o.is_failed()).count();
        info!(
            requested = categories.len(),
            failed = failed,
            "Feed retrieval complete"
        );
        outcomes
    }
}
