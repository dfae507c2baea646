use super::types::ParseResponse;
use crate::config::SourceConfig;

use async_trait::async_trait;
use std::time::Duration;

/// Failure while retrieving the raw glossary page.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("upstream returned status {0}")]
    Status(u16),
    #[error("invalid payload: {0}")]
    InvalidPayload(String),
}

/// Anything able to produce the raw glossary HTML.
///
/// The cache only depends on this trait, so tests can drive it with canned
/// pages and count how often it is asked to fetch.
#[async_trait]
pub trait GlossarySource: Send + Sync {
    async fn fetch_raw_page(&self) -> Result<String, FetchError>;
}

/// Fetches the glossary through the MediaWiki `action=parse` API.
pub struct WikipediaSource {
    http_client: reqwest::Client,
    endpoint: String,
    page: String,
    timeout: Duration,
}

impl WikipediaSource {
    pub fn new(config: &SourceConfig) -> Result<Self, FetchError> {
        let http_client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .build()
            .map_err(FetchError::Transport)?;

        Ok(Self {
            http_client,
            endpoint: config.endpoint.clone(),
            page: config.page.clone(),
            timeout: config.timeout,
        })
    }

    pub fn page(&self) -> &str {
        &self.page
    }

    fn classify(&self, err: reqwest::Error) -> FetchError {
        if err.is_timeout() {
            FetchError::Timeout(self.timeout)
        } else {
            FetchError::Transport(err)
        }
    }
}

#[async_trait]
impl GlossarySource for WikipediaSource {
    async fn fetch_raw_page(&self) -> Result<String, FetchError> {
        let response = self
            .http_client
            .get(&self.endpoint)
            .query(&[
                ("action", "parse"),
                ("page", self.page.as_str()),
                ("format", "json"),
                ("prop", "text"),
                ("disableeditsection", "1"),
                ("disabletoc", "1"),
            ])
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.classify(e))?;

        if !status.is_success() {
            tracing::error!("Glossary API error: {} - {}", status.as_u16(), body);
            return Err(FetchError::Status(status.as_u16()));
        }

        extract_page_html(&body)
    }
}

/// Pulls `parse.text["*"]` out of an API response body.
pub fn extract_page_html(body: &str) -> Result<String, FetchError> {
    let parsed: ParseResponse =
        serde_json::from_str(body).map_err(|e| FetchError::InvalidPayload(e.to_string()))?;
    Ok(parsed.parse.text.html)
}
