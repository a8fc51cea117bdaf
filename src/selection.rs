//! Narrowing a record set to an externally chosen set of identifiers.
//!
//! A filter document is either a flat JSON list of ids or an object keyed by
//! tier name (`{"tier1": [...], "tier2": [...]}`). Any other shape is a
//! [`DigestError::DataShape`].

use crate::error::{DigestError, Result};
use crate::record::{PaperEntry, Projection};
use serde_json::Value;
use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use tracing::debug;

/// Tier names whose ids are selected from a tiered filter document
pub const KNOWN_TIERS: &[&str] = &["tier1", "tier2"];

/// Identifier selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterSpec {
    /// Flat list of ids
    Ids(Vec<String>),
    /// Ids grouped by tier name
    Tiered(BTreeMap<String, Vec<String>>),
}

impl FilterSpec {
    /// Type-check a parsed filter document.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Array(items) => Ok(FilterSpec::Ids(string_list(items, "filter list")?)),
            Value::Object(map) => {
                let mut tiers = BTreeMap::new();
                for (name, ids) in map {
                    if !KNOWN_TIERS.contains(&name.as_str()) {
                        debug!(key = %name, "Ignoring unknown filter key");
                        continue;
                    }
                    let Value::Array(items) = ids else {
                        return Err(DigestError::DataShape(format!(
                            "tier '{}' must be a list of ids",
                            name
                        )));
                    };
                    let ids = string_list(items, &name)?;
                    tiers.insert(name, ids);
                }
                Ok(FilterSpec::Tiered(tiers))
            }
            other => Err(DigestError::DataShape(format!(
                "expected a list of ids or an object of tiers, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Read and type-check a filter document from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let value: Value = serde_json::from_str(&content)?;
        Self::from_value(value)
    }

    /// The ids this spec selects
    pub fn effective_ids(&self) -> HashSet<&str> {
        match self {
            FilterSpec::Ids(ids) => ids.iter().map(String::as_str).collect(),
            FilterSpec::Tiered(tiers) => KNOWN_TIERS
                .iter()
                .filter_map(|tier| tiers.get(*tier))
                .flatten()
                .map(String::as_str)
                .collect(),
        }
    }
}

fn string_list(items: Vec<Value>, what: &str) -> Result<Vec<String>> {
    items
        .into_iter()
        .map(|item| match item {
            Value::String(id) => Ok(id),
            other => Err(DigestError::DataShape(format!(
                "{} must contain only string ids, found {}",
                what,
                json_kind(&other)
            ))),
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

/// Keep entries selected by `filter` (all of them when `None`), in their
/// original order, mapped through `projection`.
pub fn narrow(
    entries: &[PaperEntry],
    filter: Option<&FilterSpec>,
    projection: Projection,
) -> Vec<PaperEntry> {
    let keep = filter.map(FilterSpec::effective_ids);
    entries
        .iter()
        .filter(|entry| keep.as_ref().map_or(true, |ids| ids.contains(entry.id())))
        .map(|entry| projection.apply(entry))
        .collect()
}

/// Entries whose id is selected by `spec`, in original order
pub fn filter(entries: &[PaperEntry], spec: &FilterSpec) -> Vec<PaperEntry> {
    narrow(entries, Some(spec), Projection::Full)
}
