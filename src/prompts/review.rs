//! Review prompt profiles built from a record set.
//!
//! - Title filter: interests, compact JSON of `{id, title, cat}` for every
//!   paper, run date.
//! - Abstract review: interests, pretty JSON of the full entries (optionally
//!   narrowed by a [`FilterSpec`]), run date.

use super::template::{render, Placeholder};
use crate::aggregate::RecordSet;
use crate::error::Result;
use crate::record::Projection;
use crate::selection::{narrow, FilterSpec};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Research interests file, relative to the workspace base directory
pub const INTERESTS_FILE: &str = "research_interests.md";

/// Template directory, relative to the workspace base directory
pub const TEMPLATE_DIR: &str = "prompts";

/// Which review pass a prompt is prepared for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptProfile {
    /// First pass over titles only
    TitleFilter,
    /// Second pass over abstracts
    AbstractReview,
}

impl PromptProfile {
    /// Template file name inside [`TEMPLATE_DIR`]
    pub fn template_file(self) -> &'static str {
        match self {
            PromptProfile::TitleFilter => "title_filter.md",
            PromptProfile::AbstractReview => "abstract_review.md",
        }
    }
}

/// Build the title filter prompt.
pub fn prepare_title_filter(data: &RecordSet, template: &str, interests: &str) -> Result<String> {
    let cards = narrow(&data.papers, None, Projection::TitleCard);
    let titles_json = serde_json::to_string(&cards)?;

    debug!(papers = cards.len(), bytes = titles_json.len(), "Prepared title list");

    Ok(render(
        template,
        &[
            (Placeholder::Interests, interests),
            (Placeholder::TitlesJson, titles_json.as_str()),
            (Placeholder::Date, data.date.as_str()),
        ],
    ))
}

/// Build the abstract review prompt, keeping only `keep` ids when given.
pub fn prepare_abstract_review(
    data: &RecordSet,
    template: &str,
    interests: &str,
    keep: Option<&FilterSpec>,
) -> Result<String> {
    let papers = narrow(&data.papers, keep, Projection::Full);
    let papers_json = serde_json::to_string_pretty(&papers)?;

    debug!(
        papers = papers.len(),
        available = data.papers.len(),
        "Prepared abstract list"
    );

    Ok(render(
        template,
        &[
            (Placeholder::Interests, interests),
            (Placeholder::PapersJson, papers_json.as_str()),
            (Placeholder::Date, data.date.as_str()),
        ],
    ))
}

/// Directory holding the interests text and the prompt templates
#[derive(Debug, Clone)]
pub struct PromptWorkspace {
    base_dir: PathBuf,
}

impl PromptWorkspace {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn interests_path(&self) -> PathBuf {
        self.base_dir.join(INTERESTS_FILE)
    }

    pub fn template_path(&self, profile: PromptProfile) -> PathBuf {
        self.base_dir.join(TEMPLATE_DIR).join(profile.template_file())
    }

    /// Read the research interests text
    pub fn interests(&self) -> Result<String> {
        Ok(std::fs::read_to_string(self.interests_path())?)
    }

    /// Read the template for `profile`
    pub fn template(&self, profile: PromptProfile) -> Result<String> {
        Ok(std::fs::read_to_string(self.template_path(profile))?)
    }

    /// Load inputs and build the prompt for `profile`.
    ///
    /// `keep` only applies to the abstract review.
    pub fn prepare(
        &self,
        profile: PromptProfile,
        data: &RecordSet,
        keep: Option<&FilterSpec>,
    ) -> Result<String> {
        let interests = self.interests()?;
        let template = self.template(profile)?;

        info!(
            profile = ?profile,
            base_dir = ?self.base_dir,
            papers = data.papers.len(),
            "Preparing prompt"
        );

        match profile {
            PromptProfile::TitleFilter => prepare_title_filter(data, &template, &interests),
            PromptProfile::AbstractReview => {
                prepare_abstract_review(data, &template, &interests, keep)
            }
        }
    }
}
