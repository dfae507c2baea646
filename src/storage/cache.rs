use crate::ingestion::fetcher::{FetchError, GlossarySource};
use crate::ingestion::parser::parse_entries;
use crate::ingestion::types::GlossaryIndex;

use arc_swap::ArcSwapOption;
use std::sync::Arc;
use std::time::Duration;

/// One parsed index together with the time (ms since epoch) it was fetched.
#[derive(Debug)]
pub struct CacheSnapshot {
    pub index: Arc<GlossaryIndex>,
    pub fetched_at: u64,
}

impl CacheSnapshot {
    pub fn age_ms(&self, now: u64) -> u64 {
        now.saturating_sub(self.fetched_at)
    }

    pub fn is_fresh(&self, now: u64, ttl: Duration) -> bool {
        u128::from(self.age_ms(now)) < ttl.as_millis()
    }
}

/// Time-bounded cache of the glossary index.
///
/// The snapshot slot starts empty and is only ever replaced wholesale.
/// Refreshing is not serialized: callers that all see an expired snapshot each
/// fetch and parse on their own, and whichever install lands last stays. The
/// refresh is idempotent, so the only cost of such a race is a redundant
/// request to the upstream API.
pub struct TermCache {
    source: Arc<dyn GlossarySource>,
    ttl: Duration,
    snapshot: ArcSwapOption<CacheSnapshot>,
}

impl TermCache {
    pub fn new(source: Arc<dyn GlossarySource>, ttl: Duration) -> Self {
        Self {
            source,
            ttl,
            snapshot: ArcSwapOption::empty(),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Current snapshot, fresh or not. Never triggers a fetch.
    pub fn snapshot(&self) -> Option<Arc<CacheSnapshot>> {
        self.snapshot.load_full()
    }

    /// Returns the cached index, refreshing it first when absent or expired.
    ///
    /// Fetch failures are logged and turned into an empty index for this call.
    pub async fn get_index(&self) -> Arc<GlossaryIndex> {
        self.get_index_at(now_ms()).await
    }

    pub async fn get_index_at(&self, now: u64) -> Arc<GlossaryIndex> {
        if let Some(snapshot) = self.snapshot.load_full() {
            if snapshot.is_fresh(now, self.ttl) {
                return snapshot.index.clone();
            }
            tracing::debug!(
                "Glossary snapshot expired ({} ms old), refreshing",
                snapshot.age_ms(now)
            );
        }

        match self.refresh_at(now).await {
            Ok(index) => index,
            Err(e) => {
                tracing::warn!("Glossary refresh failed, serving empty index: {}", e);
                Arc::new(GlossaryIndex::default())
            }
        }
    }

    /// Fetches and parses the glossary and installs the result.
    pub async fn refresh(&self) -> Result<Arc<GlossaryIndex>, FetchError> {
        self.refresh_at(now_ms()).await
    }

    pub async fn refresh_at(&self, now: u64) -> Result<Arc<GlossaryIndex>, FetchError> {
        let html = match self.source.fetch_raw_page().await {
            Ok(html) => html,
            Err(e) => {
                self.discard_if_expired(now);
                return Err(e);
            }
        };

        let index = Arc::new(parse_entries(&html));
        self.snapshot.store(Some(Arc::new(CacheSnapshot {
            index: index.clone(),
            fetched_at: now,
        })));

        tracing::info!("Installed glossary snapshot with {} terms", index.len());
        Ok(index)
    }

    // Compare-and-swap so a snapshot installed concurrently by another caller
    // survives. Returns whether this call removed the snapshot.
    pub(crate) fn discard_if_expired(&self, now: u64) -> bool {
        let current = self.snapshot.load_full();
        let Some(expected) = current
            .as_ref()
            .filter(|snapshot| !snapshot.is_fresh(now, self.ttl))
        else {
            return false;
        };

        let previous = self
            .snapshot
            .compare_and_swap(&current, Option::<Arc<CacheSnapshot>>::None);
        let discarded = (*previous)
            .as_ref()
            .is_some_and(|found| Arc::ptr_eq(found, expected));

        if discarded {
            tracing::debug!("Discarded expired glossary snapshot");
        }
        discarded
    }
}

/// Helper to get the current system time in milliseconds.
pub fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
