//! Paper records and their projections.
//!
//! A [`PaperRecord`] is built once by the feed parser and never mutated.
//! Everything downstream works on [`PaperEntry`], which is what a persisted
//! record set may contain: full records, or the titles-only summary shape.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Abstract page URL prefix
pub const ABS_URL_BASE: &str = "https://arxiv.org/abs/";

/// PDF URL prefix
pub const PDF_URL_BASE: &str = "https://arxiv.org/pdf/";

/// Abstract page URL for an arXiv identifier
pub fn abs_url(id: &str) -> String {
    format!("{}{}", ABS_URL_BASE, id)
}

/// PDF URL for an arXiv identifier
pub fn pdf_url(id: &str) -> String {
    format!("{}{}.pdf", PDF_URL_BASE, id)
}

/// One normalized paper from a category feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperRecord {
    /// arXiv identifier (`<digits>.<digits>`)
    pub id: String,
    /// Cleaned title without the trailing `(arXiv:...)` annotation
    pub title: String,
    /// Cleaned abstract, may be empty
    #[serde(rename = "abstract", default)]
    pub abstract_text: String,
    /// Cleaned author list, may be empty
    #[serde(default)]
    pub authors: String,
    /// Feed the record was first seen in
    pub category: String,
    /// Abstract page URL
    pub url: String,
    /// PDF URL
    #[serde(rename = "pdf")]
    pub pdf_url: String,
    /// Fields a stored record carried beyond the known ones, kept on reload
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PaperRecord {
    /// Build a record, deriving both URLs from `id`.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        abstract_text: impl Into<String>,
        authors: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        let id = id.into();
        Self {
            url: abs_url(&id),
            pdf_url: pdf_url(&id),
            id,
            title: title.into(),
            abstract_text: abstract_text.into(),
            authors: authors.into(),
            category: category.into(),
            extra: Map::new(),
        }
    }
}

/// Titles-only projection stored in the record set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperSummary {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub url: String,
}

/// Minimal-token projection used by the title filter prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleCard {
    pub id: String,
    pub title: String,
    pub cat: String,
}

/// One element of a record set's `papers` array.
///
/// Reading picks the shape from the fields present: any of `abstract`,
/// `authors`, `category` or `pdf` makes a full record, with missing URLs
/// derived from the id. Otherwise `cat` makes a title card and anything
/// else is a summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PaperEntry {
    Full(PaperRecord),
    Summary(PaperSummary),
    Card(TitleCard),
}

/// Every field any entry shape may carry, as read from disk
#[derive(Deserialize)]
struct StoredEntry {
    id: String,
    #[serde(default)]
    title: String,
    #[serde(rename = "abstract", default)]
    abstract_text: Option<String>,
    #[serde(default)]
    authors: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    cat: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(rename = "pdf", default)]
    pdf_url: Option<String>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl From<StoredEntry> for PaperEntry {
    fn from(stored: StoredEntry) -> Self {
        let full = stored.abstract_text.is_some()
            || stored.authors.is_some()
            || stored.category.is_some()
            || stored.pdf_url.is_some();

        if full {
            let mut extra = stored.extra;
            if let Some(cat) = stored.cat {
                extra.insert("cat".to_string(), Value::String(cat));
            }
            return PaperEntry::Full(PaperRecord {
                url: stored.url.unwrap_or_else(|| abs_url(&stored.id)),
                pdf_url: stored.pdf_url.unwrap_or_else(|| pdf_url(&stored.id)),
                id: stored.id,
                title: stored.title,
                abstract_text: stored.abstract_text.unwrap_or_default(),
                authors: stored.authors.unwrap_or_default(),
                category: stored.category.unwrap_or_default(),
                extra,
            });
        }

        match stored.cat {
            Some(cat) => PaperEntry::Card(TitleCard {
                id: stored.id,
                title: stored.title,
                cat,
            }),
            None => PaperEntry::Summary(PaperSummary {
                id: stored.id,
                title: stored.title,
                url: stored.url.unwrap_or_default(),
            }),
        }
    }
}

impl<'de> Deserialize<'de> for PaperEntry {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        StoredEntry::deserialize(deserializer).map(PaperEntry::from)
    }
}

impl PaperEntry {
    pub fn id(&self) -> &str {
        match self {
            PaperEntry::Full(r) => &r.id,
            PaperEntry::Summary(s) => &s.id,
            PaperEntry::Card(c) => &c.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            PaperEntry::Full(r) => &r.title,
            PaperEntry::Summary(s) => &s.title,
            PaperEntry::Card(c) => &c.title,
        }
    }

    /// Category, or empty when the shape does not carry one
    pub fn category(&self) -> &str {
        match self {
            PaperEntry::Full(r) => &r.category,
            PaperEntry::Summary(_) => "",
            PaperEntry::Card(c) => &c.cat,
        }
    }

    /// Abstract page URL, derived from the id when the shape has none
    pub fn url(&self) -> String {
        match self {
            PaperEntry::Full(r) => r.url.clone(),
            PaperEntry::Summary(s) if !s.url.is_empty() => s.url.clone(),
            _ => abs_url(self.id()),
        }
    }
}

impl From<PaperRecord> for PaperEntry {
    fn from(record: PaperRecord) -> Self {
        PaperEntry::Full(record)
    }
}

/// Which fields of an entry a view keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Projection {
    /// Entry as stored
    #[default]
    Full,
    /// `id`, `title`, `url`
    Summary,
    /// `id`, `title`, `cat`
    TitleCard,
}

impl Projection {
    /// Map an entry to this projection. Fields the entry lacks become empty.
    pub fn apply(self, entry: &PaperEntry) -> PaperEntry {
        match self {
            Projection::Full => entry.clone(),
            Projection::Summary => PaperEntry::Summary(PaperSummary {
                id: entry.id().to_string(),
                title: entry.title().to_string(),
                url: entry.url(),
            }),
            Projection::TitleCard => PaperEntry::Card(TitleCard {
                id: entry.id().to_string(),
                title: entry.title().to_string(),
                cat: entry.category().to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PaperRecord {
        PaperRecord::new("2501.00001", "A Title.", "Abstract.", "A. Author", "quant-ph")
    }

    #[test]
    fn test_urls_derived_from_id() {
        let record = sample();
        assert_eq!(record.url, "https://arxiv.org/abs/2501.00001");
        assert_eq!(record.pdf_url, "https://arxiv.org/pdf/2501.00001.pdf");
    }

    #[test]
    fn test_persisted_field_names() {
        let json = serde_json::to_value(sample()).expect("serialize");
        let obj = json.as_object().expect("object");
        let mut keys: Vec<&str> = obj.keys().map(|k| k.as_str()).collect();
        keys.sort();
        assert_eq!(
            keys,
            vec!["abstract", "authors", "category", "id", "pdf", "title", "url"]
        );
    }

    #[test]
    fn test_entry_shapes_deserialize() {
        let full: PaperEntry = serde_json::from_str(
            r#"{"id":"2501.1","title":"T","category":"hep-th","url":"u","pdf":"p"}"#,
        )
        .expect("full");
        match &full {
            PaperEntry::Full(r) => {
                assert_eq!(r.abstract_text, "");
                assert_eq!(r.authors, "");
            }
            other => panic!("expected full record, got {:?}", other),
        }

        let summary: PaperEntry =
            serde_json::from_str(r#"{"id":"2501.2","title":"T","url":"u"}"#).expect("summary");
        assert!(matches!(summary, PaperEntry::Summary(_)));
        assert_eq!(summary.category(), "");
    }

    #[test]
    fn test_full_record_without_pdf_keeps_its_fields() {
        let entry: PaperEntry = serde_json::from_str(
            r#"{"id":"2501.00001","title":"T","abstract":"Important abstract",
                "authors":"A","category":"quant-ph","url":"https://arxiv.org/abs/2501.00001"}"#,
        )
        .expect("entry");

        match &entry {
            PaperEntry::Full(r) => {
                assert_eq!(r.abstract_text, "Important abstract");
                assert_eq!(r.authors, "A");
                assert_eq!(r.pdf_url, "https://arxiv.org/pdf/2501.00001.pdf");
            }
            other => panic!("expected full record, got {:?}", other),
        }
        assert_eq!(entry.category(), "quant-ph");
    }

    #[test]
    fn test_abstract_without_urls_derives_both() {
        let entry: PaperEntry =
            serde_json::from_str(r#"{"id":"2501.4","title":"T","abstract":"A."}"#).expect("entry");
        match entry {
            PaperEntry::Full(r) => {
                assert_eq!(r.url, "https://arxiv.org/abs/2501.4");
                assert_eq!(r.pdf_url, "https://arxiv.org/pdf/2501.4.pdf");
                assert_eq!(r.category, "");
            }
            other => panic!("expected full record, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_fields_survive_reload() {
        let raw = r#"{"id":"2501.5","title":"T","abstract":"A.","authors":"B","category":"hep-th","url":"u","pdf":"p","comment":"12 pages"}"#;
        let entry: PaperEntry = serde_json::from_str(raw).expect("entry");
        let json = serde_json::to_value(&entry).expect("serialize");
        assert_eq!(json["comment"], "12 pages");
        assert_eq!(json["pdf"], "p");
    }

    #[test]
    fn test_title_card_shape_deserializes() {
        let card: PaperEntry =
            serde_json::from_str(r#"{"id":"2501.6","title":"T","cat":"quant-ph"}"#).expect("card");
        assert!(matches!(card, PaperEntry::Card(_)));
        assert_eq!(card.category(), "quant-ph");
    }

    #[test]
    fn test_projection_title_card() {
        let entry = PaperEntry::from(sample());
        let card = Projection::TitleCard.apply(&entry);
        let json = serde_json::to_string(&card).expect("serialize");
        assert_eq!(json, r#"{"id":"2501.00001","title":"A Title.","cat":"quant-ph"}"#);
    }

    #[test]
    fn test_projection_summary_from_summary_keeps_url() {
        let entry = PaperEntry::Summary(PaperSummary {
            id: "2501.3".to_string(),
            title: "T".to_string(),
            url: String::new(),
        });
        let projected = Projection::Summary.apply(&entry);
        match projected {
            PaperEntry::Summary(s) => assert_eq!(s.url, "https://arxiv.org/abs/2501.3"),
            other => panic!("expected summary, got {:?}", other),
        }
    }
}
