//! # arxiv-digest
//!
//! Daily arXiv digest pipeline: fetch category RSS feeds into a deduplicated
//! record set, then prepare LLM review prompts from it.
//!
//! ## Modules
//!
//! - [`feed`] - RSS payload parsing into paper records
//! - [`aggregate`] - Merge, dedupe and sort into a persisted [`RecordSet`]
//! - [`selection`] - Identifier filters (flat or tiered)
//! - [`prompts`] - Template rendering and the review prompt profiles
//! - [`fetcher`] - Per-category feed retrieval
//! - [`record`] - Paper records and projections
//! - [`error`] - Custom error types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use arxiv_digest::{aggregate, feed::FeedParser, fetcher};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let categories = vec!["quant-ph".to_string()];
//!     let client = fetcher::FeedClient::new(&Default::default())?;
//!     let outcomes = client.fetch_all(&FeedParser::new()?, &categories).await;
//!     let options = aggregate::AggregateOptions {
//!         categories,
//!         ..Default::default()
//!     };
//!     let set = aggregate::aggregate_outcomes(outcomes, &options);
//!     println!("Found {} papers", set.count);
//!     Ok(())
//! }
//! ```

pub mod aggregate;
pub mod error;
pub mod feed;
pub mod fetcher;
pub mod prompts;
pub mod record;
pub mod selection;

pub use aggregate::{AggregateOptions, CategoryOutcome, RecordSet};
pub use error::{DigestError, Result};
pub use record::{PaperEntry, PaperRecord};
pub use selection::FilterSpec;
