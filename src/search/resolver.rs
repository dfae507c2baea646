//! Term Resolver
//!
//! Turns a user-supplied query into a definition. The query is normalized,
//! then looked up exactly, case-insensitively, and finally with simple plural
//! endings removed.

use super::tokenizer::{normalize_term, strip_plural_es, strip_plural_s};
use crate::ingestion::types::GlossaryIndex;

/// Resolves `query` against `index`, returning `None` when nothing matches.
///
/// Order: exact key, first case-insensitive key, then the same two steps on
/// the query without a trailing `s` (not `ss`), then without a trailing `es`.
pub fn resolve<'a>(index: &'a GlossaryIndex, query: &str) -> Option<&'a str> {
    let normalized = normalize_term(query);

    if let Some(definition) = lookup(index, &normalized) {
        return Some(definition);
    }

    if let Some(singular) = strip_plural_s(&normalized) {
        if let Some(definition) = lookup(index, singular) {
            return Some(definition);
        }
    }

    if let Some(singular) = strip_plural_es(&normalized) {
        if let Some(definition) = lookup(index, singular) {
            return Some(definition);
        }
    }

    None
}

/// Whether `query` names a term, without any plural fallback.
///
/// `exists("spores")` is false even when `resolve("spores")` finds `spore`.
pub fn exists(index: &GlossaryIndex, query: &str) -> bool {
    lookup(index, &normalize_term(query)).is_some()
}

fn lookup<'a>(index: &'a GlossaryIndex, term: &str) -> Option<&'a str> {
    index.get(term).or_else(|| {
        index
            .find_lowercase(&term.to_lowercase())
            .map(|(_, definition)| definition)
    })
}
