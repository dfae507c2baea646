//! Storage Module Tests
//!
//! Validates the freshness and failure semantics of the term cache.
//!
//! ## Test Scopes
//! - **Freshness**: Calls within the TTL reuse the snapshot; expiry triggers
//!   exactly one new fetch.
//! - **Soft failure**: Fetch errors yield an empty index, are never cached,
//!   and discard only snapshots that already expired.
//! - **Snapshot bookkeeping**: Age and freshness helpers.
//!
//! *Note: Time is injected through the `*_at` variants, so no test sleeps.*

#[cfg(test)]
mod tests {
    use crate::ingestion::fetcher::{FetchError, GlossarySource};
    use crate::storage::cache::{CacheSnapshot, TermCache};
    use async_trait::async_trait;
    use std::sync::Arc;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    const TTL: Duration = Duration::from_secs(24 * 60 * 60);
    const TTL_MS: u64 = 24 * 60 * 60 * 1000;
    const T0: u64 = 1_700_000_000_000;

    const PAGE_V1: &str = "<dt>hypha</dt><dd>A fungal filament.</dd>\
                           <dt>spore</dt><dd>A reproductive unit.</dd>";
    const PAGE_V2: &str = "<dt>hypha</dt><dd>A fungal filament.</dd>\
                           <dt>spore</dt><dd>A reproductive unit.</dd>\
                           <dt>volva</dt><dd>A cup at the stipe base.</dd>";

    /// Serves queued responses in order and counts fetches. Once the queue
    /// runs dry it keeps repeating the last response.
    struct ScriptedSource {
        responses: Mutex<Vec<Result<String, u16>>>,
        last: Mutex<Option<Result<String, u16>>>,
        fetches: AtomicUsize,
    }

    impl ScriptedSource {
        fn new(responses: Vec<Result<&str, u16>>) -> Arc<Self> {
            let mut responses: Vec<Result<String, u16>> = responses
                .into_iter()
                .map(|r| r.map(str::to_string))
                .collect();
            responses.reverse();
            Arc::new(Self {
                responses: Mutex::new(responses),
                last: Mutex::new(None),
                fetches: AtomicUsize::new(0),
            })
        }

        fn fetches(&self) -> usize {
            self.fetches.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl GlossarySource for ScriptedSource {
        async fn fetch_raw_page(&self) -> Result<String, FetchError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);

            let next = self.responses.lock().unwrap().pop();
            let response = match next {
                Some(response) => {
                    *self.last.lock().unwrap() = Some(response.clone());
                    response
                }
                None => self
                    .last
                    .lock()
                    .unwrap()
                    .clone()
                    .unwrap_or(Err(500)),
            };

            response.map_err(FetchError::Status)
        }
    }

    fn cache_with(source: &Arc<ScriptedSource>) -> TermCache {
        TermCache::new(source.clone(), TTL)
    }

    // ============================================================
    // FRESHNESS TESTS
    // ============================================================

    #[tokio::test]
    async fn test_cache_starts_absent() {
        let source = ScriptedSource::new(vec![Ok(PAGE_V1)]);
        let cache = cache_with(&source);

        assert!(cache.snapshot().is_none());
        assert_eq!(source.fetches(), 0, "Construction must not fetch");
    }

    #[tokio::test]
    async fn test_two_calls_within_ttl_fetch_once() {
        let source = ScriptedSource::new(vec![Ok(PAGE_V1)]);
        let cache = cache_with(&source);

        let first = cache.get_index_at(T0).await;
        let second = cache.get_index_at(T0 + TTL_MS - 1).await;

        assert_eq!(source.fetches(), 1);
        assert_eq!(first.to_entries(), second.to_entries());
        assert!(Arc::ptr_eq(&first, &second), "Same snapshot should be served");
    }

    #[tokio::test]
    async fn test_call_after_expiry_fetches_exactly_once_more() {
        let source = ScriptedSource::new(vec![Ok(PAGE_V1), Ok(PAGE_V2)]);
        let cache = cache_with(&source);

        let before = cache.get_index_at(T0).await;
        let after = cache.get_index_at(T0 + TTL_MS).await;
        let again = cache.get_index_at(T0 + TTL_MS + 10).await;

        assert_eq!(source.fetches(), 2);
        assert_eq!(before.len(), 2);
        assert_eq!(after.len(), 3);
        assert!(Arc::ptr_eq(&after, &again));
        assert_eq!(cache.snapshot().unwrap().fetched_at, T0 + TTL_MS);
    }

    #[tokio::test]
    async fn test_empty_page_is_cached_as_valid_index() {
        let source = ScriptedSource::new(vec![Ok("<p>nothing here</p>")]);
        let cache = cache_with(&source);

        let index = cache.get_index_at(T0).await;
        let again = cache.get_index_at(T0 + 1).await;

        assert!(index.is_empty());
        assert!(again.is_empty());
        assert_eq!(source.fetches(), 1, "An empty page is a success, not a failure");
        assert!(cache.snapshot().is_some());
    }

    // ============================================================
    // SOFT FAILURE TESTS
    // ============================================================

    #[tokio::test]
    async fn test_failure_returns_empty_index_and_is_not_cached() {
        let source = ScriptedSource::new(vec![Err(503), Ok(PAGE_V1)]);
        let cache = cache_with(&source);

        let failed = cache.get_index_at(T0).await;
        assert!(failed.is_empty());
        assert!(cache.snapshot().is_none());

        // The very next call retries, no TTL wait.
        let recovered = cache.get_index_at(T0 + 1).await;
        assert_eq!(recovered.len(), 2);
        assert_eq!(source.fetches(), 2);
    }

    #[tokio::test]
    async fn test_failure_after_expiry_discards_stale_snapshot() {
        let source = ScriptedSource::new(vec![Ok(PAGE_V1), Err(500)]);
        let cache = cache_with(&source);

        cache.get_index_at(T0).await;
        let expired_call = cache.get_index_at(T0 + TTL_MS + 1).await;

        assert!(expired_call.is_empty());
        assert!(cache.snapshot().is_none(), "Stale snapshot should be dropped");
    }

    #[tokio::test]
    async fn test_explicit_refresh_failure_keeps_fresh_snapshot() {
        let source = ScriptedSource::new(vec![Ok(PAGE_V1), Err(502)]);
        let cache = cache_with(&source);

        cache.get_index_at(T0).await;
        let result = cache.refresh_at(T0 + 5).await;

        assert!(matches!(result, Err(FetchError::Status(502))));
        let snapshot = cache.snapshot().expect("fresh snapshot must survive");
        assert_eq!(snapshot.fetched_at, T0);
        assert_eq!(cache.get_index_at(T0 + 6).await.len(), 2);
    }

    #[tokio::test]
    async fn test_refresh_replaces_snapshot_wholesale() {
        let source = ScriptedSource::new(vec![Ok(PAGE_V1), Ok(PAGE_V2)]);
        let cache = cache_with(&source);

        let old = cache.get_index_at(T0).await;
        let new = cache.refresh_at(T0 + 1).await.unwrap();

        assert_eq!(old.len(), 2, "Previously handed-out index is untouched");
        assert_eq!(new.len(), 3);
        assert!(Arc::ptr_eq(&cache.get_index_at(T0 + 2).await, &new));
    }

    #[tokio::test]
    async fn test_concurrent_refresh_race_is_tolerated() {
        let source = ScriptedSource::new(vec![Ok(PAGE_V1)]);
        let cache = Arc::new(cache_with(&source));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let cache = cache.clone();
                tokio::spawn(async move { cache.get_index_at(T0).await })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.await.unwrap().len(), 2);
        }
        assert!(source.fetches() >= 1);
        assert_eq!(cache.snapshot().unwrap().index.len(), 2);
    }

    #[tokio::test]
    async fn test_discard_only_reports_removed_expired_snapshot() {
        let source = ScriptedSource::new(vec![Ok(PAGE_V1)]);
        let cache = cache_with(&source);

        assert!(!cache.discard_if_expired(T0), "Nothing stored yet");

        cache.get_index_at(T0).await;
        assert!(!cache.discard_if_expired(T0 + 1), "Fresh snapshot stays");
        assert!(cache.snapshot().is_some());

        assert!(cache.discard_if_expired(T0 + TTL_MS));
        assert!(cache.snapshot().is_none());
        assert!(!cache.discard_if_expired(T0 + TTL_MS), "Already gone");
    }

    // ============================================================
    // SNAPSHOT TESTS
    // ============================================================

    #[test]
    fn test_snapshot_freshness_boundary() {
        let snapshot = CacheSnapshot {
            index: Arc::new(Default::default()),
            fetched_at: T0,
        };

        assert!(snapshot.is_fresh(T0, TTL));
        assert!(snapshot.is_fresh(T0 + TTL_MS - 1, TTL));
        assert!(!snapshot.is_fresh(T0 + TTL_MS, TTL));
        assert_eq!(snapshot.age_ms(T0 + 42), 42);
        assert_eq!(snapshot.age_ms(T0 - 1), 0, "Clock skew saturates to zero");
    }
}
