//! Client Module Tests
//!
//! ## Test Scopes
//! - **Preview**: Character-aware truncation and display fallbacks.
//! - **Memoization**: Definite answers are cached per term, transient
//!   failures are retried. Exercised against a local Axum server that counts
//!   the requests it receives.

#[cfg(test)]
mod tests {
    use crate::client::service::{DefinitionClient, truncate_definition};
    use crate::client::types::{
        DefinitionLookup, NOT_FOUND_TEXT, PREVIEW_LENGTH, PREVIEW_SUFFIX, UNAVAILABLE_TEXT,
    };
    use axum::Router;
    use axum::extract::Query;
    use axum::http::StatusCode;
    use axum::routing::get;
    use std::collections::HashMap;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    async fn spawn_definition_server(hits: Arc<AtomicUsize>) -> String {
        let app = Router::new().route(
            "/glossary/definition",
            get(move |Query(params): Query<HashMap<String, String>>| {
                let hits = hits.clone();
                async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    let term = params.get("term").cloned().unwrap_or_default();
                    match term.as_str() {
                        "spore" | "spore print" => (
                            StatusCode::OK,
                            axum::Json(serde_json::json!({
                                "term": term,
                                "definition": format!("Definition of {}", term),
                            })),
                        ),
                        "boom" => (
                            StatusCode::INTERNAL_SERVER_ERROR,
                            axum::Json(serde_json::json!({"error": "Internal server error"})),
                        ),
                        _ => (
                            StatusCode::NOT_FOUND,
                            axum::Json(serde_json::json!({
                                "error": "Definition not found",
                                "term": term,
                            })),
                        ),
                    }
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/", addr)
    }

    // ============================================================
    // PREVIEW TESTS
    // ============================================================

    #[test]
    fn test_truncate_short_text_untouched() {
        assert_eq!(truncate_definition("A filament.", PREVIEW_LENGTH), "A filament.");

        let exact = "x".repeat(PREVIEW_LENGTH);
        assert_eq!(truncate_definition(&exact, PREVIEW_LENGTH), exact);
    }

    #[test]
    fn test_truncate_long_text_appends_hint() {
        let long = "a".repeat(PREVIEW_LENGTH + 20);

        let preview = truncate_definition(&long, PREVIEW_LENGTH);

        assert_eq!(preview, format!("{}{}", "a".repeat(PREVIEW_LENGTH), PREVIEW_SUFFIX));
    }

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        let text = "é".repeat(10);

        assert_eq!(truncate_definition(&text, 4), format!("éééé{}", PREVIEW_SUFFIX));
    }

    #[test]
    fn test_lookup_display_and_cacheability() {
        assert_eq!(DefinitionLookup::NotFound.display_text(), NOT_FOUND_TEXT);
        assert_eq!(DefinitionLookup::Unavailable.display_text(), UNAVAILABLE_TEXT);
        assert!(DefinitionLookup::Found("x".into()).is_cacheable());
        assert!(DefinitionLookup::NotFound.is_cacheable());
        assert!(!DefinitionLookup::Unavailable.is_cacheable());
    }

    // ============================================================
    // MEMOIZATION TESTS
    // ============================================================

    #[tokio::test]
    async fn test_repeated_lookup_hits_server_once() {
        let hits = Arc::new(AtomicUsize::new(0));
        let base = spawn_definition_server(hits.clone()).await;
        let client = DefinitionClient::new(&base);

        let first = client.fetch_definition("spore print").await;
        let second = client.fetch_definition("spore print").await;

        assert_eq!(first, DefinitionLookup::Found("Definition of spore print".into()));
        assert_eq!(first, second);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(client.cached_terms(), 1);
    }

    #[tokio::test]
    async fn test_not_found_is_distinct_and_cached() {
        let hits = Arc::new(AtomicUsize::new(0));
        let base = spawn_definition_server(hits.clone()).await;
        let client = DefinitionClient::new(&base);

        assert_eq!(client.fetch_definition("truffle").await, DefinitionLookup::NotFound);
        assert_eq!(client.preview("truffle").await, NOT_FOUND_TEXT);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_server_errors_are_retried() {
        let hits = Arc::new(AtomicUsize::new(0));
        let base = spawn_definition_server(hits.clone()).await;
        let client = DefinitionClient::new(&base);

        assert_eq!(client.fetch_definition("boom").await, DefinitionLookup::Unavailable);
        assert_eq!(client.preview("boom").await, UNAVAILABLE_TEXT);
        assert_eq!(hits.load(Ordering::SeqCst), 2);
        assert_eq!(client.cached_terms(), 0);
    }

    #[tokio::test]
    async fn test_unreachable_server_is_unavailable() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = DefinitionClient::new(&format!("http://{}", addr));

        assert_eq!(client.fetch_definition("spore").await, DefinitionLookup::Unavailable);
    }
}
