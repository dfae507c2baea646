use super::types::{DefinitionLookup, PREVIEW_LENGTH, PREVIEW_SUFFIX};
use crate::search::types::{DefinitionResponse, ENDPOINT_DEFINITION};

use dashmap::DashMap;
use reqwest::StatusCode;

/// Fetches definitions for marked terms on behalf of one page view.
///
/// Answers are memoized per term so hovering the same term twice costs one
/// request. Transient failures are not memoized.
pub struct DefinitionClient {
    node_url: String,
    client: reqwest::Client,
    cache: DashMap<String, DefinitionLookup>,
}

impl DefinitionClient {
    pub fn new(node_url: &str) -> Self {
        Self::with_client(node_url, reqwest::Client::new())
    }

    pub fn with_client(node_url: &str, client: reqwest::Client) -> Self {
        Self {
            node_url: node_url.trim().trim_end_matches('/').to_string(),
            client,
            cache: DashMap::new(),
        }
    }

    pub async fn fetch_definition(&self, term: &str) -> DefinitionLookup {
        if let Some(cached) = self.cache.get(term) {
            return cached.value().clone();
        }

        let lookup = self.request(term).await;
        if lookup.is_cacheable() {
            self.cache.insert(term.to_string(), lookup.clone());
        }
        lookup
    }

    /// Short text for a transient tooltip.
    pub async fn preview(&self, term: &str) -> String {
        let text = self.fetch_definition(term).await.display_text();
        truncate_definition(&text, PREVIEW_LENGTH)
    }

    pub fn cached_terms(&self) -> usize {
        self.cache.len()
    }

    async fn request(&self, term: &str) -> DefinitionLookup {
        let url = format!(
            "{}{}?term={}",
            self.node_url,
            ENDPOINT_DEFINITION,
            urlencoding::encode(term)
        );

        let resp = match self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                tracing::error!("Error fetching glossary definition: {}", e);
                return DefinitionLookup::Unavailable;
            }
        };

        match resp.status() {
            StatusCode::NOT_FOUND => DefinitionLookup::NotFound,
            status if status.is_success() => match resp.json::<DefinitionResponse>().await {
                Ok(body) => DefinitionLookup::Found(body.definition),
                Err(e) => {
                    tracing::error!("Invalid glossary definition payload: {}", e);
                    DefinitionLookup::Unavailable
                }
            },
            status => {
                tracing::error!("Glossary definition request failed: {}", status);
                DefinitionLookup::Unavailable
            }
        }
    }
}

/// Cuts `text` to at most `max_chars` characters, appending a hint that more
/// is available.
pub fn truncate_definition(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        None => text.to_string(),
        Some((cut, _)) => format!("{}{}", &text[..cut], PREVIEW_SUFFIX),
    }
}
