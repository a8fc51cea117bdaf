//! Placeholder substitution for prompt templates.
//!
//! Templates are opaque text with zero or more `{NAME}` tokens. Rendering
//! replaces every occurrence of each supplied token in one left-to-right pass;
//! substituted values are never rescanned. Tokens with no supplied value, and
//! unknown tokens such as `{FOO}`, are left as literal text.

/// Recognized placeholder tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    /// Free-text research interests
    Interests,
    /// Compact JSON of title cards
    TitlesJson,
    /// Pretty JSON of full paper entries
    PapersJson,
    /// Run date of the record set
    Date,
}

impl Placeholder {
    /// Literal token as it appears in a template
    pub fn token(self) -> &'static str {
        match self {
            Placeholder::Interests => "{INTERESTS}",
            Placeholder::TitlesJson => "{TITLES_JSON}",
            Placeholder::PapersJson => "{PAPERS_JSON}",
            Placeholder::Date => "{DATE}",
        }
    }
}

/// Substitute `substitutions` into `template`.
///
/// Never fails: a token missing from the template is simply not used.
pub fn render(template: &str, substitutions: &[(Placeholder, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find('{') {
        out.push_str(&rest[..pos]);
        let candidate = &rest[pos..];
        match substitutions
            .iter()
            .find(|(placeholder, _)| candidate.starts_with(placeholder.token()))
        {
            Some((placeholder, value)) => {
                out.push_str(value);
                rest = &candidate[placeholder.token().len()..];
            }
            None => {
                out.push('{');
                rest = &candidate[1..];
            }
        }
    }

    out.push_str(rest);
    out
}
