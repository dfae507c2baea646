use super::types::{GlossaryIndex, TermEntry};
use crate::markup::{collapse_whitespace, strip_tags, unescape_html};
use regex::Regex;
use std::sync::LazyLock;

// Wikipedia glossaries render as <dt>term</dt><dd>definition</dd>.
static PAIR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<dt[^>]*>(.*?)</dt>\s*<dd[^>]*>(.*?)</dd>").unwrap()
});

static EDIT_SECTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?s)<span class="mw-editsection".*?</span>"#).unwrap());

static SUPERSCRIPT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<sup[^>]*>.*?</sup>").unwrap());

static EDIT_TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\[edit\]").unwrap());

/// Extracts every term/definition pair from the glossary page HTML.
///
/// Malformed or unrelated markup simply yields fewer pairs; a page without a
/// single `<dt>`/`<dd>` pair produces an empty index.
pub fn parse_entries(html: &str) -> GlossaryIndex {
    let index: GlossaryIndex = extract_pairs(html).collect();
    tracing::debug!("Parsed {} glossary terms", index.len());
    index
}

/// Cleaned pairs in source order, empty ones already dropped.
pub fn extract_pairs(html: &str) -> impl Iterator<Item = TermEntry> + '_ {
    PAIR_RE.captures_iter(html).filter_map(|caps| {
        let term = clean_term(&caps[1]);
        let definition = clean_definition(&caps[2]);

        if term.is_empty() || definition.is_empty() {
            None
        } else {
            Some(TermEntry { term, definition })
        }
    })
}

pub fn clean_term(html: &str) -> String {
    to_plain_text(html)
}

/// Drops edit links and reference superscripts, then flattens to plain text.
pub fn clean_definition(html: &str) -> String {
    let cleaned = EDIT_SECTION_RE.replace_all(html, "");
    let cleaned = SUPERSCRIPT_RE.replace_all(&cleaned, "");
    let cleaned = EDIT_TOKEN_RE.replace_all(&cleaned, "");

    to_plain_text(&cleaned)
}

fn to_plain_text(html: &str) -> String {
    collapse_whitespace(&unescape_html(&strip_tags(html)))
}
