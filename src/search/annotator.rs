//! Text Annotator
//!
//! Wraps glossary terms found in a block of (already safe) markup in
//! interactive marker spans:
//!
//! ```text
//! <span class="glossary-term" data-term="spore" tabindex="0">Spores</span>
//! ```
//!
//! Terms are tried longest first so compound terms are marked whole before any
//! shorter term nested inside them gets a chance. Matches never land inside an
//! HTML tag, a character entity or an existing marker, which also makes
//! re-annotating already annotated text a no-op.

use super::tokenizer::strip_plural_s;
use crate::ingestion::types::GlossaryIndex;
use crate::markup::{escape_html, unescape_html};

use regex::Regex;
use std::cmp::Reverse;
use std::collections::HashSet;
use std::ops::Range;
use std::sync::LazyLock;

pub const MARKER_CLASS: &str = "glossary-term";

static PROTECTED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"(?s)<span class="glossary-term"[^>]*>.*?</span>"#,
        r"|<[^>]*>",
        r"|&(?:#[0-9]+|#[xX][0-9a-fA-F]+|[A-Za-z][A-Za-z0-9]*);",
    ))
    .unwrap()
});

static MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<span class="glossary-term" data-term="([^"]*)"[^>]*>(.*?)</span>"#).unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnotateOptions {
    /// Mark only the first occurrence of each term.
    pub first_only: bool,
}

impl Default for AnnotateOptions {
    fn default() -> Self {
        Self { first_only: true }
    }
}

struct TermPattern {
    /// Lowercased term, used for first-only bookkeeping.
    key: String,
    regex: Regex,
}

/// Compiled match patterns for every term of one index, longest term first.
///
/// Building one costs a regex compilation per term, so callers that annotate
/// repeatedly against the same index should keep it around.
pub struct Annotator {
    patterns: Vec<TermPattern>,
}

impl Annotator {
    pub fn new(index: &GlossaryIndex) -> Self {
        let mut terms: Vec<&str> = index.terms().collect();
        // Stable: equal lengths keep insertion order.
        terms.sort_by_key(|term| Reverse(term.chars().count()));

        let patterns = terms
            .into_iter()
            .filter_map(|term| match term_regex(term) {
                Ok(regex) => Some(TermPattern {
                    key: term.to_lowercase(),
                    regex,
                }),
                Err(e) => {
                    tracing::warn!("Skipping glossary term {:?}: {}", term, e);
                    None
                }
            })
            .collect();

        Self { patterns }
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Marks term occurrences in `text`. `index` must be the index this
    /// annotator was built from; it supplies the singular-form lookup keys.
    pub fn annotate(&self, index: &GlossaryIndex, text: &str, options: AnnotateOptions) -> String {
        if text.is_empty() || self.patterns.is_empty() {
            return text.to_string();
        }

        let mut marked: HashSet<String> = if options.first_only {
            existing_marker_keys(text)
        } else {
            HashSet::new()
        };

        let mut result = text.to_string();
        let mut protected = protected_ranges(&result);

        for pattern in &self.patterns {
            if options.first_only && marked.contains(&pattern.key) {
                continue;
            }

            let eligible = pattern
                .regex
                .find_iter(&result)
                .map(|m| m.range())
                .filter(|range| !overlaps_any(&protected, range));

            let matches: Vec<Range<usize>> = if options.first_only {
                eligible.take(1).collect()
            } else {
                eligible.collect()
            };

            if matches.is_empty() {
                continue;
            }

            result = wrap_ranges(&result, &matches, index);
            protected = protected_ranges(&result);

            if options.first_only {
                marked.insert(pattern.key.clone());
            }
        }

        result
    }
}

/// One-shot annotation; compiles the term patterns for this call only.
pub fn annotate(index: &GlossaryIndex, text: &str, options: AnnotateOptions) -> String {
    if text.is_empty() || index.is_empty() {
        return text.to_string();
    }
    Annotator::new(index).annotate(index, text, options)
}

/// Key placed in `data-term`: the lowercased match, singularized when the
/// singular form is a known term.
pub fn lookup_key(matched: &str, index: &GlossaryIndex) -> String {
    let normalized = matched.to_lowercase().trim().to_string();

    if let Some(singular) = strip_plural_s(&normalized) {
        if index.contains_lowercase(singular) {
            return singular.to_string();
        }
    }

    normalized
}

pub fn marker(matched: &str, index: &GlossaryIndex) -> String {
    format!(
        r#"<span class="{}" data-term="{}" tabindex="0">{}</span>"#,
        MARKER_CLASS,
        escape_html(&lookup_key(matched, index)),
        escape_html(matched)
    )
}

fn term_regex(term: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"(?i)\b{}s?\b", regex::escape(term)))
}

fn protected_ranges(text: &str) -> Vec<Range<usize>> {
    PROTECTED_RE.find_iter(text).map(|m| m.range()).collect()
}

fn overlaps_any(protected: &[Range<usize>], range: &Range<usize>) -> bool {
    protected
        .iter()
        .any(|p| range.start < p.end && p.start < range.end)
}

// Ranges come from a single find_iter pass, so they are ordered and disjoint.
fn wrap_ranges(text: &str, ranges: &[Range<usize>], index: &GlossaryIndex) -> String {
    let mut out = String::with_capacity(text.len() + ranges.len() * 64);
    let mut cursor = 0;

    for range in ranges {
        out.push_str(&text[cursor..range.start]);
        out.push_str(&marker(&text[range.clone()], index));
        cursor = range.end;
    }
    out.push_str(&text[cursor..]);
    out
}

/// Lowercase keys already marked in `text`: each marker's `data-term`, its
/// inner text and the inner text without a plural `s`. Over-approximating is
/// harmless since a term left unmarked by an earlier pass has no eligible
/// occurrence left.
fn existing_marker_keys(text: &str) -> HashSet<String> {
    let mut keys = HashSet::new();

    for caps in MARKER_RE.captures_iter(text) {
        keys.insert(unescape_html(&caps[1]));

        let inner = unescape_html(&caps[2]).trim().to_lowercase();
        if let Some(singular) = strip_plural_s(&inner) {
            keys.insert(singular.to_string());
        }
        keys.insert(inner);
    }

    keys
}
