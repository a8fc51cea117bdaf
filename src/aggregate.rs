//! Merging per-category results into a persisted record set.
//!
//! Records are concatenated in category request order, deduplicated by id
//! (first occurrence wins), sorted descending by id and optionally projected
//! to the titles-only shape. A paper cross-listed in several requested
//! categories keeps the category of the first feed it appeared in.

use crate::error::Result;
use crate::feed::SkipCounts;
use crate::record::{PaperEntry, PaperRecord, Projection};
use crate::selection::narrow;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::{info, warn};

/// Result of retrieving and parsing one category
#[derive(Debug, Clone)]
pub enum CategoryOutcome {
    Fetched {
        category: String,
        records: Vec<PaperRecord>,
        skipped: SkipCounts,
    },
    Failed {
        category: String,
        reason: String,
    },
}

impl CategoryOutcome {
    pub fn category(&self) -> &str {
        match self {
            CategoryOutcome::Fetched { category, .. } | CategoryOutcome::Failed { category, .. } => {
                category
            }
        }
    }

    /// Records contributed to the aggregate; a failed category contributes none
    pub fn into_records(self) -> Vec<PaperRecord> {
        match self {
            CategoryOutcome::Fetched { records, .. } => records,
            CategoryOutcome::Failed { .. } => Vec::new(),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, CategoryOutcome::Failed { .. })
    }
}

/// Aggregation options
#[derive(Debug, Clone)]
pub struct AggregateOptions {
    /// Run date stamped on the record set
    pub date: NaiveDate,
    /// Requested categories, in request order
    pub categories: Vec<String>,
    /// Keep only `id`, `title`, `url` per paper
    pub titles_only: bool,
}

impl Default for AggregateOptions {
    fn default() -> Self {
        Self {
            date: Local::now().date_naive(),
            categories: Vec::new(),
            titles_only: false,
        }
    }
}

/// The pipeline artifact shared between the fetch and prompt stages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSet {
    /// Run date, `YYYY-MM-DD`
    pub date: String,
    pub categories: Vec<String>,
    pub count: usize,
    pub papers: Vec<PaperEntry>,
}

impl RecordSet {
    /// Wrap papers, setting `count` from their length
    pub fn new(date: NaiveDate, categories: Vec<String>, papers: Vec<PaperEntry>) -> Self {
        Self {
            date: date.format("%Y-%m-%d").to_string(),
            categories,
            count: papers.len(),
            papers,
        }
    }

    /// Pretty-printed JSON, as written to disk
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the record set, creating parent directories as needed
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_json()?)?;
        info!(count = self.count, path = ?path, "Saved record set");
        Ok(())
    }

    /// Read a record set written by [`save`](Self::save)
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let set: RecordSet = serde_json::from_str(&content)?;
        if set.count != set.papers.len() {
            warn!(
                count = set.count,
                papers = set.papers.len(),
                path = ?path,
                "Record set count does not match its papers"
            );
        }
        Ok(set)
    }

    /// Export the papers as CSV, one row per entry.
    ///
    /// Every row has the full record's columns; fields an entry lacks are empty.
    pub fn write_csv(&self, path: &Path) -> Result<()> {
        if self.papers.is_empty() {
            info!(path = ?path, "No papers to export");
            return Ok(());
        }

        let mut wtr = csv::WriterBuilder::new().has_headers(true).from_path(path)?;
        for entry in &self.papers {
            wtr.serialize(CsvRow::from(entry))?;
        }
        wtr.flush()?;
        info!(count = self.papers.len(), path = ?path, "Exported CSV");
        Ok(())
    }
}

/// Fixed CSV row shape for any entry
#[derive(Serialize)]
struct CsvRow<'a> {
    id: &'a str,
    title: &'a str,
    #[serde(rename = "abstract")]
    abstract_text: &'a str,
    authors: &'a str,
    category: &'a str,
    url: String,
    pdf: &'a str,
}

impl<'a> From<&'a PaperEntry> for CsvRow<'a> {
    fn from(entry: &'a PaperEntry) -> Self {
        let (abstract_text, authors, pdf) = match entry {
            PaperEntry::Full(r) => (r.abstract_text.as_str(), r.authors.as_str(), r.pdf_url.as_str()),
            PaperEntry::Summary(_) | PaperEntry::Card(_) => ("", "", ""),
        };
        Self {
            id: entry.id(),
            title: entry.title(),
            abstract_text,
            authors,
            category: entry.category(),
            url: entry.url(),
            pdf,
        }
    }
}

/// Concatenate in order and drop repeated ids, keeping the first occurrence.
pub fn merge_unique(per_category: Vec<Vec<PaperRecord>>) -> Vec<PaperRecord> {
    let mut seen: HashSet<String> = HashSet::new();
    per_category
        .into_iter()
        .flatten()
        .filter(|record| seen.insert(record.id.clone()))
        .collect()
}

/// Stable sort, descending by id string
pub fn sort_by_id_desc<T>(items: &mut [T], id: impl Fn(&T) -> &str) {
    items.sort_by(|a, b| id(b).cmp(id(a)));
}

/// Merge, dedupe, sort and optionally project per-category records.
pub fn aggregate(per_category: Vec<Vec<PaperRecord>>, options: &AggregateOptions) -> RecordSet {
    let total: usize = per_category.iter().map(Vec::len).sum();
    let mut records = merge_unique(per_category);
    sort_by_id_desc(&mut records, |r| r.id.as_str());

    let duplicates = total - records.len();
    let entries: Vec<PaperEntry> = records.into_iter().map(PaperEntry::from).collect();
    let projection = if options.titles_only {
        Projection::Summary
    } else {
        Projection::Full
    };
    let papers = narrow(&entries, None, projection);

    info!(
        categories = options.categories.len(),
        total = total,
        duplicates = duplicates,
        count = papers.len(),
        "Aggregated records"
    );

    RecordSet::new(options.date, options.categories.clone(), papers)
}

/// Aggregate fetch outcomes; failed categories contribute nothing.
pub fn aggregate_outcomes(outcomes: Vec<CategoryOutcome>, options: &AggregateOptions) -> RecordSet {
    let per_category = outcomes
        .into_iter()
        .map(|outcome| {
            if let CategoryOutcome::Failed { category, reason } = &outcome {
                warn!(category = %category, reason = %reason, "Category contributed no records");
            }
            outcome.into_records()
        })
        .collect();
    aggregate(per_category, options)
}
