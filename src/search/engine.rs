use super::annotator::{AnnotateOptions, Annotator};
use super::resolver::{exists, resolve};
use super::types::TermOrder;
use crate::ingestion::types::{GlossaryIndex, TermEntry};
use crate::storage::cache::TermCache;

use arc_swap::ArcSwapOption;
use std::sync::Arc;

struct PreparedAnnotator {
    index: Arc<GlossaryIndex>,
    annotator: Arc<Annotator>,
}

/// Binds the term cache to resolution and annotation.
///
/// Every call works against whichever index the cache currently hands out;
/// compiled annotation patterns are reused until the cache installs a new
/// index.
pub struct GlossaryEngine {
    cache: Arc<TermCache>,
    prepared: ArcSwapOption<PreparedAnnotator>,
}

impl GlossaryEngine {
    pub fn new(cache: Arc<TermCache>) -> Self {
        Self {
            cache,
            prepared: ArcSwapOption::empty(),
        }
    }

    pub fn cache(&self) -> &Arc<TermCache> {
        &self.cache
    }

    pub async fn lookup_definition(&self, term: &str) -> Option<String> {
        let index = self.cache.get_index().await;
        resolve(&index, term).map(str::to_string)
    }

    pub async fn term_exists(&self, term: &str) -> bool {
        let index = self.cache.get_index().await;
        exists(&index, term)
    }

    pub async fn mark_glossary_terms(&self, text: &str, options: AnnotateOptions) -> String {
        if text.is_empty() {
            return String::new();
        }

        let index = self.cache.get_index().await;
        if index.is_empty() {
            return text.to_string();
        }

        let annotator = self.annotator_for(&index);
        annotator.annotate(&index, text, options)
    }

    pub async fn list_terms(&self, order: TermOrder) -> Vec<TermEntry> {
        let index = self.cache.get_index().await;
        sorted_entries(&index, order)
    }

    fn annotator_for(&self, index: &Arc<GlossaryIndex>) -> Arc<Annotator> {
        if let Some(prepared) = self.prepared.load_full() {
            if Arc::ptr_eq(&prepared.index, index) {
                return prepared.annotator.clone();
            }
        }

        let annotator = Arc::new(Annotator::new(index));
        tracing::debug!("Compiled {} glossary term patterns", annotator.len());
        self.prepared.store(Some(Arc::new(PreparedAnnotator {
            index: index.clone(),
            annotator: annotator.clone(),
        })));
        annotator
    }
}

/// Entries in source order, or sorted case-insensitively by term.
pub fn sorted_entries(index: &GlossaryIndex, order: TermOrder) -> Vec<TermEntry> {
    let mut entries = index.to_entries();
    if order == TermOrder::Alphabetical {
        entries.sort_by_cached_key(|entry| entry.term.to_lowercase());
    }
    entries
}
