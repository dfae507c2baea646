//! Glossary Data Types
//!
//! Defines the term/definition pair produced by the parser and the immutable,
//! insertion-ordered index every downstream component reads from.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single glossary entry as extracted from the source page.
///
/// `term` keeps the casing and punctuation of the source; `definition` is plain
/// text with whitespace collapsed. Neither is ever empty once inside an index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermEntry {
    pub term: String,
    pub definition: String,
}

impl TermEntry {
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
        }
    }
}

/// Immutable term → definition mapping.
///
/// Iteration order is the order in which terms first appeared in the source.
/// Re-inserting a literal term replaces its definition but keeps its position.
/// Case-insensitive lookups walk `lowercase_keys`, which mirrors that order, so
/// the first inserted key wins any collision.
#[derive(Debug, Clone, Default)]
pub struct GlossaryIndex {
    entries: IndexMap<String, String>,
    lowercase_keys: Vec<String>,
}

impl GlossaryIndex {
    /// Builds an index from entries in source order, skipping empty ones.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = TermEntry>,
    {
        let mut map: IndexMap<String, String> = IndexMap::new();
        for entry in entries {
            if entry.term.is_empty() || entry.definition.is_empty() {
                continue;
            }
            map.insert(entry.term, entry.definition);
        }

        let lowercase_keys = map.keys().map(|k| k.to_lowercase()).collect();

        Self {
            entries: map,
            lowercase_keys,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact, case-sensitive lookup.
    pub fn get(&self, term: &str) -> Option<&str> {
        self.entries.get(term).map(String::as_str)
    }

    /// Returns the first entry (in insertion order) whose lowercased key equals
    /// `lowercase`. The argument must already be lowercased.
    pub fn find_lowercase(&self, lowercase: &str) -> Option<(&str, &str)> {
        let position = self.lowercase_keys.iter().position(|k| k == lowercase)?;
        self.entries
            .get_index(position)
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Whether any key lowercases to `lowercase`.
    pub fn contains_lowercase(&self, lowercase: &str) -> bool {
        self.lowercase_keys.iter().any(|k| k == lowercase)
    }

    /// Iterates `(term, definition)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Owned copy of every entry in insertion order.
    pub fn to_entries(&self) -> Vec<TermEntry> {
        self.iter()
            .map(|(term, definition)| TermEntry::new(term, definition))
            .collect()
    }
}

impl FromIterator<TermEntry> for GlossaryIndex {
    fn from_iter<I: IntoIterator<Item = TermEntry>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}

/// Envelope returned by the MediaWiki `action=parse` API.
#[derive(Debug, Deserialize)]
pub struct ParseResponse {
    pub parse: ParsePayload,
}

#[derive(Debug, Deserialize)]
pub struct ParsePayload {
    pub text: ParseText,
}

/// The rendered page HTML lives under the `*` key.
#[derive(Debug, Deserialize)]
pub struct ParseText {
    #[serde(rename = "*")]
    pub html: String,
}
