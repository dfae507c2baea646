//! Storage HTTP Protocol
//!
//! Endpoints and Data Transfer Objects (DTOs) for reading the cached index
//! wholesale: the bulk term listing and cache status reporting.

use crate::ingestion::types::TermEntry;
use serde::{Deserialize, Serialize};

// --- API Endpoints ---

/// Public endpoint returning every term with its definition.
pub const ENDPOINT_TERMS: &str = "/api/v1/glossary/terms";
/// Cache status; never triggers a refresh.
pub const ENDPOINT_STATS: &str = "/health/stats";

// --- Data Transfer Objects ---

/// Query string of the listing endpoint. `sort` is `source` (default) or `alpha`.
#[derive(Debug, Deserialize)]
pub struct TermsParams {
    pub sort: Option<String>,
}

/// The bulk listing is a plain ordered JSON array of pairs.
pub type TermsResponse = Vec<TermEntry>;

/// Snapshot of the cache state at request time.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResponse {
    /// Number of terms in the cached snapshot (0 when absent).
    pub terms: usize,
    /// Fetch time in ms since epoch.
    pub fetched_at: Option<u64>,
    pub age_ms: Option<u64>,
    /// Whether the snapshot is still within its TTL.
    pub fresh: bool,
}
