//! arxiv-digest - Daily arXiv feed digest
//!
//! Fetches new submissions from arXiv category RSS feeds into a deduplicated
//! JSON record set, and prepares LLM review prompts from that record set.
//!
//! ## Usage
//!
//! ### Fetch
//! ```bash
//! arxiv-digest fetch quant-ph cond-mat.str-el --output data/2025-01-08.json
//! arxiv-digest fetch quant-ph --titles-only
//! ```
//!
//! ### Prepare prompts
//! ```bash
//! arxiv-digest prompt title-filter --data data/2025-01-08.json
//! arxiv-digest prompt abstract-review --data data/2025-01-08.json --filter-ids tier1.json
//! ```

use anyhow::{Context, Result};
use arxiv_digest::aggregate::{self, AggregateOptions, RecordSet};
use arxiv_digest::feed::FeedParser;
use arxiv_digest::fetcher::{FeedClient, FetchOptions, DEFAULT_FEED_URL};
use arxiv_digest::prompts::{PromptProfile, PromptWorkspace};
use arxiv_digest::selection::FilterSpec;
use chrono::Local;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::{fmt, EnvFilter};

// ============================================================================
// CLI Definition
// ============================================================================

/// Daily arXiv digest - fetch feeds and prepare LLM review prompts
#[derive(Parser)]
#[command(name = "arxiv-digest")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch new papers for one or more categories
    #[command(after_help = "Common categories:
    quant-ph            Quantum Physics
    cond-mat.str-el     Strongly Correlated Electrons
    cond-mat.mes-hall   Mesoscale and Nanoscale Physics
    cond-mat.stat-mech  Statistical Mechanics
    physics.comp-ph     Computational Physics")]
    Fetch {
        /// arXiv categories to fetch
        #[arg(required = true)]
        categories: Vec<String>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output only id, title, url (for first pass)
        #[arg(long)]
        titles_only: bool,

        /// Also export the papers as CSV
        #[arg(long)]
        csv: Option<PathBuf>,

        /// RSS base URL
        #[arg(long, default_value = DEFAULT_FEED_URL)]
        feed_url: String,

        /// Per-category request timeout in seconds
        #[arg(long, default_value = "30")]
        timeout: u64,
    },

    /// Prepare a prompt from a fetched record set
    Prompt {
        /// Which prompt to prepare
        #[arg(value_enum)]
        mode: PromptMode,

        /// Path to papers JSON
        #[arg(long)]
        data: PathBuf,

        /// JSON file with paper IDs to include (for abstract-review)
        #[arg(long)]
        filter_ids: Option<PathBuf>,

        /// Base directory containing research_interests.md and prompts/
        #[arg(long, default_value = ".")]
        base_dir: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PromptMode {
    TitleFilter,
    AbstractReview,
}

impl From<PromptMode> for PromptProfile {
    fn from(mode: PromptMode) -> Self {
        match mode {
            PromptMode::TitleFilter => PromptProfile::TitleFilter,
            PromptMode::AbstractReview => PromptProfile::AbstractReview,
        }
    }
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for JSON and prompts
    let log_level = if cli.debug { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_string()));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Fetch {
            categories,
            output,
            titles_only,
            csv,
            feed_url,
            timeout,
        } => {
            let options = FetchOptions {
                feed_base_url: feed_url,
                timeout_secs: timeout,
                ..Default::default()
            };
            run_fetch(categories, output, titles_only, csv, options).await
        }
        Commands::Prompt {
            mode,
            data,
            filter_ids,
            base_dir,
            output,
        } => run_prompt(mode.into(), data, filter_ids, base_dir, output),
    }
}

// ============================================================================
// Fetch
// ============================================================================

async fn run_fetch(
    categories: Vec<String>,
    output: Option<PathBuf>,
    titles_only: bool,
    csv: Option<PathBuf>,
    options: FetchOptions,
) -> Result<()> {
    let client = FeedClient::new(&options).context("Failed to set up feed client")?;
    let parser = FeedParser::new().context("Failed to set up feed parser")?;

    let outcomes = client.fetch_all(&parser, &categories).await;

    let aggregate_options = AggregateOptions {
        date: Local::now().date_naive(),
        categories,
        titles_only,
    };
    let record_set = aggregate::aggregate_outcomes(outcomes, &aggregate_options);

    if let Some(path) = csv {
        record_set
            .write_csv(&path)
            .with_context(|| format!("Failed to write CSV to {}", path.display()))?;
    }

    match output {
        Some(path) => {
            record_set
                .save(&path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("Wrote {} papers to {}", record_set.count, path.display());
        }
        None => println!("{}", record_set.to_json()?),
    }

    Ok(())
}

// ============================================================================
// Prompt
// ============================================================================

fn run_prompt(
    profile: PromptProfile,
    data: PathBuf,
    filter_ids: Option<PathBuf>,
    base_dir: PathBuf,
    output: Option<PathBuf>,
) -> Result<()> {
    let record_set = RecordSet::load(&data)
        .with_context(|| format!("Failed to read record set {}", data.display()))?;

    let keep = match filter_ids {
        Some(path) if profile == PromptProfile::AbstractReview => Some(
            FilterSpec::load(&path)
                .with_context(|| format!("Invalid filter file {}", path.display()))?,
        ),
        Some(path) => {
            info!(path = ?path, "Ignoring --filter-ids for title-filter");
            None
        }
        None => None,
    };

    let workspace = PromptWorkspace::new(base_dir);
    let prompt = workspace
        .prepare(profile, &record_set, keep.as_ref())
        .with_context(|| {
            format!(
                "Failed to prepare prompt from {}",
                workspace.base_dir().display()
            )
        })?;

    match output {
        Some(path) => {
            std::fs::write(&path, &prompt)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("Wrote prompt to {}", path.display());
        }
        None => println!("{}", prompt),
    }

    Ok(())
}
