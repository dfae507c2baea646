use serde::{Deserialize, Serialize};
use std::str::FromStr;

// --- API Endpoints ---

/// Definition lookup used by the page-level consumer.
pub const ENDPOINT_DEFINITION: &str = "/glossary/definition";
/// Same lookup under the versioned public API.
pub const ENDPOINT_API_DEFINITION: &str = "/api/v1/glossary/definition";
pub const ENDPOINT_EXISTS: &str = "/api/v1/glossary/exists";
pub const ENDPOINT_ANNOTATE: &str = "/api/v1/glossary/annotate";

#[derive(Debug, Deserialize)]
pub struct DefinitionParams {
    pub term: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DefinitionResponse {
    pub term: String,
    pub definition: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: &str) -> Self {
        Self {
            error: error.to_string(),
            term: None,
        }
    }

    pub fn for_term(error: &str, term: &str) -> Self {
        Self {
            error: error.to_string(),
            term: Some(term.to_string()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExistsResponse {
    pub term: String,
    pub exists: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnnotateRequest {
    pub text: String,
    pub first_only: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnnotateResponse {
    pub html: String,
}

/// Ordering of the bulk term listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TermOrder {
    /// Order of first appearance on the source page.
    #[default]
    Source,
    /// Case-insensitive by term.
    Alphabetical,
}

impl FromStr for TermOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "source" => Ok(Self::Source),
            "alpha" | "alphabetical" => Ok(Self::Alphabetical),
            other => Err(format!("Unknown sort order: {}", other)),
        }
    }
}
