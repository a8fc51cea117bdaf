//! RSS feed parsing for arXiv category listings.
//!
//! Turns one category's raw RSS payload into normalized [`PaperRecord`]s.
//! Items without a `title` or `link`, or whose link is not an arXiv
//! abstract/PDF URL, are excluded and counted rather than treated as errors.
//! A payload that is not well-formed XML fails with [`DigestError::Format`].
//! Authors come from Dublin Core `creator`, resolved by namespace URI.

use crate::error::{DigestError, Result};
use crate::record::PaperRecord;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::NsReader;
use regex::{Captures, Regex};
use tracing::debug;

/// Dublin Core namespace carrying `creator`
const DC_NAMESPACE: &[u8] = b"http://purl.org/dc/elements/1.1/";

/// Identifier embedded in `/abs/<id>` or `/pdf/<id>` links
const ID_PATTERN: &str = r"arxiv\.org/(?:abs|pdf)/([0-9]+\.[0-9]+)";

/// Markup tags left after entity unescaping
const TAG_PATTERN: &str = r"<[^>]+>";

/// Trailing `(arXiv:2501.00001v1 [quant-ph])` annotation on titles
const ANNOTATION_PATTERN: &str = r"\s*\(arXiv:[^)]+\)\s*$";

/// Character references, with or without the closing semicolon
const ENTITY_PATTERN: &str = r"&(?:#[0-9]+|#[xX][0-9a-fA-F]+|[A-Za-z][A-Za-z0-9]*);?";

/// Named references HTML still decodes without a trailing semicolon
const LEGACY_ENTITIES: &[(&str, &str)] = &[
    ("AElig", "\u{c6}"), ("AMP", "&"), ("Aacute", "\u{c1}"), ("Acirc", "\u{c2}"),
    ("Agrave", "\u{c0}"), ("Aring", "\u{c5}"), ("Atilde", "\u{c3}"), ("Auml", "\u{c4}"),
    ("COPY", "\u{a9}"), ("Ccedil", "\u{c7}"), ("ETH", "\u{d0}"), ("Eacute", "\u{c9}"),
    ("Ecirc", "\u{ca}"), ("Egrave", "\u{c8}"), ("Euml", "\u{cb}"), ("GT", ">"),
    ("Iacute", "\u{cd}"), ("Icirc", "\u{ce}"), ("Igrave", "\u{cc}"), ("Iuml", "\u{cf}"),
    ("LT", "<"), ("Ntilde", "\u{d1}"), ("Oacute", "\u{d3}"), ("Ocirc", "\u{d4}"),
    ("Ograve", "\u{d2}"), ("Oslash", "\u{d8}"), ("Otilde", "\u{d5}"), ("Ouml", "\u{d6}"),
    ("QUOT", "\""), ("REG", "\u{ae}"), ("THORN", "\u{de}"), ("Uacute", "\u{da}"),
    ("Ucirc", "\u{db}"), ("Ugrave", "\u{d9}"), ("Uuml", "\u{dc}"), ("Yacute", "\u{dd}"),
    ("aacute", "\u{e1}"), ("acirc", "\u{e2}"), ("acute", "\u{b4}"), ("aelig", "\u{e6}"),
    ("agrave", "\u{e0}"), ("amp", "&"), ("aring", "\u{e5}"), ("atilde", "\u{e3}"),
    ("auml", "\u{e4}"), ("brvbar", "\u{a6}"), ("ccedil", "\u{e7}"), ("cedil", "\u{b8}"),
    ("cent", "\u{a2}"), ("copy", "\u{a9}"), ("curren", "\u{a4}"), ("deg", "\u{b0}"),
    ("divide", "\u{f7}"), ("eacute", "\u{e9}"), ("ecirc", "\u{ea}"), ("egrave", "\u{e8}"),
    ("eth", "\u{f0}"), ("euml", "\u{eb}"), ("frac12", "\u{bd}"), ("frac14", "\u{bc}"),
    ("frac34", "\u{be}"), ("gt", ">"), ("iacute", "\u{ed}"), ("icirc", "\u{ee}"),
    ("iexcl", "\u{a1}"), ("igrave", "\u{ec}"), ("iquest", "\u{bf}"), ("iuml", "\u{ef}"),
    ("laquo", "\u{ab}"), ("lt", "<"), ("macr", "\u{af}"), ("micro", "\u{b5}"),
    ("middot", "\u{b7}"), ("nbsp", "\u{a0}"), ("not", "\u{ac}"), ("ntilde", "\u{f1}"),
    ("oacute", "\u{f3}"), ("ocirc", "\u{f4}"), ("ograve", "\u{f2}"), ("ordf", "\u{aa}"),
    ("ordm", "\u{ba}"), ("oslash", "\u{f8}"), ("otilde", "\u{f5}"), ("ouml", "\u{f6}"),
    ("para", "\u{b6}"), ("plusmn", "\u{b1}"), ("pound", "\u{a3}"), ("quot", "\""),
    ("raquo", "\u{bb}"), ("reg", "\u{ae}"), ("sect", "\u{a7}"), ("shy", "\u{ad}"),
    ("sup1", "\u{b9}"), ("sup2", "\u{b2}"), ("sup3", "\u{b3}"), ("szlig", "\u{df}"),
    ("thorn", "\u{fe}"), ("times", "\u{d7}"), ("uacute", "\u{fa}"), ("ucirc", "\u{fb}"),
    ("ugrave", "\u{f9}"), ("uml", "\u{a8}"), ("uuml", "\u{fc}"), ("yacute", "\u{fd}"),
    ("yen", "\u{a5}"), ("yuml", "\u{ff}"),
];

/// Item-level child elements the parser reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    Link,
    Description,
    Creator,
}

impl Field {
    /// RSS fields are un-namespaced; `creator` must be in Dublin Core
    fn resolve(ns: &ResolveResult<'_>, local: &[u8]) -> Option<Self> {
        match (ns, local) {
            (ResolveResult::Unbound, b"title") => Some(Field::Title),
            (ResolveResult::Unbound, b"link") => Some(Field::Link),
            (ResolveResult::Unbound, b"description") => Some(Field::Description),
            (ResolveResult::Bound(Namespace(uri)), b"creator") if *uri == DC_NAMESPACE => {
                Some(Field::Creator)
            }
            _ => None,
        }
    }
}

fn is_item(ns: &ResolveResult<'_>, local: &[u8]) -> bool {
    matches!(ns, ResolveResult::Unbound) && local == b"item"
}

/// Raw text of one `<item>`. `None` means the element was absent.
#[derive(Debug, Default)]
struct ItemFields {
    title: Option<String>,
    link: Option<String>,
    description: Option<String>,
    creator: Option<String>,
}

impl ItemFields {
    fn slot(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Title => &mut self.title,
            Field::Link => &mut self.link,
            Field::Description => &mut self.description,
            Field::Creator => &mut self.creator,
        }
    }

    /// Mark `field` present. Returns false for a repeated element, whose
    /// text is ignored so the first occurrence wins.
    fn open(&mut self, field: Field) -> bool {
        let slot = self.slot(field);
        if slot.is_some() {
            return false;
        }
        *slot = Some(String::new());
        true
    }

    fn push_text(&mut self, field: Field, text: &str) {
        if let Some(buf) = self.slot(field) {
            buf.push_str(text);
        }
    }
}

/// `<item>` currently being read
struct OpenItem {
    depth: usize,
    fields: ItemFields,
    current: Option<Field>,
}

/// Event-driven scan of an RSS document, collecting every `<item>`.
#[derive(Default)]
struct RssScanner {
    depth: usize,
    closed_root: bool,
    item: Option<OpenItem>,
    items: Vec<ItemFields>,
}

impl RssScanner {
    /// A second top-level element is not allowed
    fn check_root(&self) -> Result<()> {
        if self.depth == 0 && self.closed_root {
            return Err(DigestError::Format(
                "junk after document element".to_string(),
            ));
        }
        Ok(())
    }

    fn handle_start(&mut self, ns: &ResolveResult<'_>, e: &BytesStart<'_>) -> Result<()> {
        self.check_root()?;
        let local = e.local_name();
        let depth = self.depth + 1;
        match self.item.as_mut() {
            Some(item) if depth == item.depth + 1 => {
                item.current = Field::resolve(ns, local.as_ref()).filter(|f| item.fields.open(*f));
            }
            Some(_) => {}
            None if is_item(ns, local.as_ref()) => {
                self.item = Some(OpenItem {
                    depth,
                    fields: ItemFields::default(),
                    current: None,
                });
            }
            None => {}
        }
        self.depth = depth;
        Ok(())
    }

    fn handle_empty(&mut self, ns: &ResolveResult<'_>, e: &BytesStart<'_>) -> Result<()> {
        self.check_root()?;
        let local = e.local_name();
        match self.item.as_mut() {
            Some(item) if self.depth == item.depth => {
                if let Some(field) = Field::resolve(ns, local.as_ref()) {
                    item.fields.open(field);
                }
            }
            Some(_) => {}
            None if is_item(ns, local.as_ref()) => self.items.push(ItemFields::default()),
            None => {}
        }
        if self.depth == 0 {
            self.closed_root = true;
        }
        Ok(())
    }

    fn handle_text(&mut self, text: &str) -> Result<()> {
        if self.depth == 0 {
            if text.trim().is_empty() {
                return Ok(());
            }
            return Err(DigestError::Format(
                "text content outside the root element".to_string(),
            ));
        }
        if let Some(item) = self.item.as_mut() {
            if self.depth == item.depth + 1 {
                if let Some(field) = item.current {
                    item.fields.push_text(field, text);
                }
            }
        }
        Ok(())
    }

    fn handle_end(&mut self) -> Result<()> {
        if self.depth == 0 {
            return Err(DigestError::Format("unmatched closing tag".to_string()));
        }
        if let Some(item) = self.item.as_mut() {
            if self.depth == item.depth + 1 {
                item.current = None;
            } else if self.depth == item.depth {
                if let Some(done) = self.item.take() {
                    self.items.push(done.fields);
                }
            }
        }
        self.depth -= 1;
        if self.depth == 0 {
            self.closed_root = true;
        }
        Ok(())
    }

    fn finish(self) -> Result<Vec<ItemFields>> {
        if self.depth != 0 {
            return Err(DigestError::Format(format!(
                "document ended with {} unclosed element(s)",
                self.depth
            )));
        }
        if !self.closed_root {
            return Err(DigestError::Format("no root element".to_string()));
        }
        Ok(self.items)
    }
}

/// Elements must use declared prefixes
fn check_bound(ns: &ResolveResult<'_>) -> Result<()> {
    match ns {
        ResolveResult::Unknown(prefix) => Err(DigestError::Format(format!(
            "unbound namespace prefix '{}'",
            String::from_utf8_lossy(prefix)
        ))),
        _ => Ok(()),
    }
}

/// Read every `<item>` of an RSS document.
fn scan_items(payload: &str) -> Result<Vec<ItemFields>> {
    let mut reader = NsReader::from_str(payload);
    let mut scanner = RssScanner::default();

    loop {
        let position = reader.buffer_position();
        let (ns, event) = reader.read_resolved_event().map_err(|e| {
            DigestError::Format(format!("malformed XML after position {}: {}", position, e))
        })?;
        match event {
            Event::Start(ref e) => {
                check_bound(&ns)?;
                scanner.handle_start(&ns, e)?;
            }
            Event::Empty(ref e) => {
                check_bound(&ns)?;
                scanner.handle_empty(&ns, e)?;
            }
            Event::Text(ref e) => {
                let text = e
                    .unescape()
                    .map_err(|e| DigestError::Format(format!("bad entity reference: {}", e)))?;
                scanner.handle_text(&text)?;
            }
            Event::CData(e) => {
                let raw = e.into_inner();
                scanner.handle_text(&String::from_utf8_lossy(&raw))?;
            }
            Event::End(_) => scanner.handle_end()?,
            Event::Eof => break,
            _ => {}
        }
    }

    scanner.finish()
}

/// Counts of items excluded from a parse
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkipCounts {
    /// Items lacking a `title` or `link` element
    pub missing_field: usize,
    /// Items whose link carries no arXiv identifier
    pub unresolved_id: usize,
}

impl SkipCounts {
    pub fn total(&self) -> usize {
        self.missing_field + self.unresolved_id
    }
}

/// Records parsed from one feed plus exclusion diagnostics
#[derive(Debug, Clone, Default)]
pub struct FeedReport {
    pub records: Vec<PaperRecord>,
    pub skipped: SkipCounts,
}

/// Decode one character reference matched by [`ENTITY_PATTERN`].
///
/// Terminated references go through `html_escape`; unterminated ones decode
/// numerically or by the longest legacy name prefix, keeping the rest.
fn decode_reference(reference: &str) -> String {
    if reference.ends_with(';') {
        let decoded = html_escape::decode_html_entities(reference);
        if decoded != reference {
            return decoded.into_owned();
        }
    }

    let body = &reference[1..];
    if let Some(number) = body.strip_prefix('#') {
        let number = number.trim_end_matches(';');
        let code = match number.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok(),
            None => number.parse().ok(),
        };
        return code
            .and_then(char::from_u32)
            .map(String::from)
            .unwrap_or_else(|| reference.to_string());
    }

    LEGACY_ENTITIES
        .iter()
        .filter(|(name, _)| body.starts_with(name))
        .max_by_key(|(name, _)| name.len())
        .map(|(name, value)| format!("{}{}", value, &body[name.len()..]))
        .unwrap_or_else(|| reference.to_string())
}

/// Feed parser holding its compiled patterns
#[derive(Debug, Clone)]
pub struct FeedParser {
    id_pattern: Regex,
    tag_pattern: Regex,
    annotation_pattern: Regex,
    entity_pattern: Regex,
}

impl FeedParser {
    /// Compile the parser's patterns
    pub fn new() -> Result<Self> {
        let compile = |pattern: &str| {
            Regex::new(pattern)
                .map_err(|e| DigestError::Config(format!("Invalid pattern '{}': {}", pattern, e)))
        };
        Ok(Self {
            id_pattern: compile(ID_PATTERN)?,
            tag_pattern: compile(TAG_PATTERN)?,
            annotation_pattern: compile(ANNOTATION_PATTERN)?,
            entity_pattern: compile(ENTITY_PATTERN)?,
        })
    }

    /// Parse one category's payload into records.
    pub fn parse(&self, payload: &str, category: &str) -> Result<Vec<PaperRecord>> {
        Ok(self.parse_report(payload, category)?.records)
    }

    /// Parse one category's payload, keeping per-item exclusion counts.
    pub fn parse_report(&self, payload: &str, category: &str) -> Result<FeedReport> {
        let items = scan_items(payload)?;
        let total = items.len();
        let mut report = FeedReport::default();

        for item in items {
            let (Some(title), Some(link)) = (item.title, item.link) else {
                report.skipped.missing_field += 1;
                continue;
            };
            let Some(id) = self.extract_id(&link) else {
                report.skipped.unresolved_id += 1;
                continue;
            };

            let title = self.clean_title(&title);
            let abstract_text = item
                .description
                .map(|d| self.clean_text(&d))
                .unwrap_or_default();
            let authors = item
                .creator
                .map(|c| self.clean_text(&c))
                .unwrap_or_default();

            report
                .records
                .push(PaperRecord::new(id, title, abstract_text, authors, category));
        }

        debug!(
            category = category,
            items = total,
            parsed = report.records.len(),
            missing_field = report.skipped.missing_field,
            unresolved_id = report.skipped.unresolved_id,
            "Parsed feed"
        );

        Ok(report)
    }

    /// Extract the arXiv identifier from an abstract or PDF link
    pub fn extract_id(&self, link: &str) -> Option<String> {
        self.id_pattern
            .captures(link)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }

    /// Unescape HTML entities, strip tags, collapse whitespace
    pub fn clean_text(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        let unescaped = self
            .entity_pattern
            .replace_all(text, |caps: &Captures<'_>| decode_reference(&caps[0]));
        let stripped = self.tag_pattern.replace_all(&unescaped, "");
        stripped.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// [`clean_text`](Self::clean_text), then drop the trailing arXiv annotation
    pub fn clean_title(&self, text: &str) -> String {
        let cleaned = self.clean_text(text);
        self.annotation_pattern.replace(&cleaned, "").into_owned()
    }
}

/// Parse a payload with a freshly built [`FeedParser`].
pub fn parse(payload: &str, category: &str) -> Result<Vec<PaperRecord>> {
    FeedParser::new()?.parse(payload, category)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> FeedParser {
        FeedParser::new().expect("patterns compile")
    }

    fn rss(items: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<rss xmlns:dc="http://purl.org/dc/elements/1.1/" version="2.0">
  <channel>
    <title>quant-ph updates on arXiv.org</title>
    <link>http://rss.arxiv.org/rss/quant-ph</link>
    {}
  </channel>
</rss>"#,
            items
        )
    }

    #[test]
    fn test_quant_ph_scenario() {
        let payload = rss(
            r#"<item>
      <title>A Title. (arXiv:2501.00001v1 [quant-ph])</title>
      <link>https://arxiv.org/abs/2501.00001</link>
      <description>Some abstract.</description>
    </item>
    <item>
      <title>No link here</title>
      <description>Dropped.</description>
    </item>"#,
        );

        let report = parser().parse_report(&payload, "quant-ph").expect("parse");
        assert_eq!(report.records.len(), 1);
        assert_eq!(report.skipped.missing_field, 1);

        let record = &report.records[0];
        assert_eq!(record.id, "2501.00001");
        assert_eq!(record.title, "A Title.");
        assert_eq!(record.category, "quant-ph");
        assert_eq!(record.url, "https://arxiv.org/abs/2501.00001");
        assert_eq!(record.pdf_url, "https://arxiv.org/pdf/2501.00001.pdf");
    }

    #[test]
    fn test_missing_required_fields_excluded() {
        let payload = rss(
            r#"<item><title>One</title><link>https://arxiv.org/abs/2501.00011</link></item>
    <item><link>https://arxiv.org/abs/2501.00012</link></item>
    <item><title>Three</title></item>
    <item><title>Four</title><link>https://arxiv.org/pdf/2501.00014v2</link></item>"#,
        );

        let report = parser().parse_report(&payload, "cs.LG").expect("parse");
        // 4 items, 2 missing a required field
        assert_eq!(report.records.len(), 2);
        assert_eq!(report.skipped.missing_field, 2);
        assert_eq!(report.skipped.total(), 2);
        assert_eq!(report.records[1].id, "2501.00014");
    }

    #[test]
    fn test_unresolvable_link_skipped() {
        let payload = rss(
            r#"<item><title>Elsewhere</title><link>https://example.org/paper/42</link></item>
    <item><title>Empty link</title><link/></item>"#,
        );

        let report = parser().parse_report(&payload, "math.CO").expect("parse");
        assert!(report.records.is_empty());
        assert_eq!(report.skipped.unresolved_id, 2);
        assert_eq!(report.skipped.missing_field, 0);
    }

    #[test]
    fn test_creator_and_description_cleaned() {
        let payload = rss(
            r#"<item>
      <title>Spin &amp;amp; Charge   in
        1D</title>
      <link>https://arxiv.org/abs/2501.00021</link>
      <description>&lt;p&gt;We study &lt;b&gt;spin&lt;/b&gt;
        chains.&lt;/p&gt;</description>
      <dc:creator>Ada Lovelace, Charles Babbage</dc:creator>
    </item>"#,
        );

        let records = parser().parse(&payload, "cond-mat.str-el").expect("parse");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Spin & Charge in 1D");
        assert_eq!(records[0].abstract_text, "We study spin chains.");
        assert_eq!(records[0].authors, "Ada Lovelace, Charles Babbage");
    }

    #[test]
    fn test_optional_fields_default_empty() {
        let payload =
            rss(r#"<item><title>Bare</title><link>https://arxiv.org/abs/2501.00031</link></item>"#);
        let records = parser().parse(&payload, "hep-th").expect("parse");
        assert_eq!(records[0].abstract_text, "");
        assert_eq!(records[0].authors, "");
    }

    #[test]
    fn test_cdata_description() {
        let payload = rss(
            r#"<item><title>CDATA</title><link>https://arxiv.org/abs/2501.00041</link>
      <description><![CDATA[<p>Inline <i>markup</i> &amp; more</p>]]></description></item>"#,
        );
        let records = parser().parse(&payload, "physics.comp-ph").expect("parse");
        assert_eq!(records[0].abstract_text, "Inline markup & more");
    }

    #[test]
    fn test_malformed_payload_is_format_error() {
        let mismatched = "<rss><channel><item></channel></rss>";
        assert!(matches!(
            parser().parse(mismatched, "quant-ph"),
            Err(DigestError::Format(_))
        ));

        let truncated = "<rss><channel><item><title>T</title>";
        assert!(matches!(
            parser().parse(truncated, "quant-ph"),
            Err(DigestError::Format(_))
        ));

        assert!(matches!(
            parser().parse("not xml at all", "quant-ph"),
            Err(DigestError::Format(_))
        ));
        assert!(matches!(
            parser().parse("", "quant-ph"),
            Err(DigestError::Format(_))
        ));
    }

    #[test]
    fn test_empty_channel_parses_to_nothing() {
        let records = parser().parse(&rss(""), "quant-ph").expect("parse");
        assert!(records.is_empty());
    }

    #[test]
    fn test_clean_title_keeps_inner_parentheses() {
        let p = parser();
        assert_eq!(
            p.clean_title("Bounds (and limits) of codes (arXiv:2501.00051v2 [cs.IT] UPDATED)"),
            "Bounds (and limits) of codes"
        );
        assert_eq!(p.clean_title("No annotation"), "No annotation");
    }

    #[test]
    fn test_extract_id() {
        let p = parser();
        assert_eq!(
            p.extract_id("http://arxiv.org/abs/2501.12345v1").as_deref(),
            Some("2501.12345")
        );
        assert_eq!(
            p.extract_id("https://arxiv.org/pdf/2412.00007").as_deref(),
            Some("2412.00007")
        );
        assert_eq!(p.extract_id("https://arxiv.org/list/quant-ph/new"), None);
    }

    #[test]
    fn test_creator_matched_by_namespace_not_prefix() {
        let payload = r#"<rss xmlns:d="http://purl.org/dc/elements/1.1/" xmlns:dc="urn:other">
  <channel>
    <item>
      <title>Prefixed</title>
      <link>https://arxiv.org/abs/2501.00061</link>
      <dc:creator>Not an author</dc:creator>
      <d:creator>Ann</d:creator>
    </item>
  </channel>
</rss>"#;
        let records = parser().parse(payload, "quant-ph").expect("parse");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].authors, "Ann");
    }

    #[test]
    fn test_undeclared_prefix_is_format_error() {
        let payload = "<rss><channel><item><dc:creator>X</dc:creator></item></channel></rss>";
        assert!(matches!(
            parser().parse(payload, "quant-ph"),
            Err(DigestError::Format(_))
        ));
    }

    #[test]
    fn test_second_root_element_is_format_error() {
        assert!(matches!(
            parser().parse("<a/><b/>", "quant-ph"),
            Err(DigestError::Format(_))
        ));
        assert!(matches!(
            parser().parse(&format!("{}<rss/>", rss("")), "quant-ph"),
            Err(DigestError::Format(_))
        ));
        assert!(parser().parse("<a/>", "quant-ph").expect("single root").is_empty());
    }

    #[test]
    fn test_legacy_entities_without_semicolon() {
        let p = parser();
        assert_eq!(p.clean_text("Caf&eacute &amp"), "Caf\u{e9} &");
        assert_eq!(p.clean_text("&copyright &#233 &#xE9"), "\u{a9}right \u{e9} \u{e9}");
        // decoding is a single pass
        assert_eq!(p.clean_text("Tom &amp;eacute"), "Tom &eacute");
        assert_eq!(p.clean_text("AT&T &unknown;"), "AT&T &unknown;");
    }

    #[test]
    fn test_legacy_entities_in_feed_description() {
        let payload = rss(
            r#"<item><title>Caf&amp;eacute</title><link>https://arxiv.org/abs/2501.00071</link>
      <description>Caf&amp;eacute &amp;amp</description></item>"#,
        );
        let records = parser().parse(&payload, "quant-ph").expect("parse");
        assert_eq!(records[0].title, "Caf\u{e9}");
        assert_eq!(records[0].abstract_text, "Caf\u{e9} &");
    }
}
