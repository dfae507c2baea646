use super::cache::now_ms;
use super::protocol::{StatsResponse, TermsParams, TermsResponse};
use crate::search::engine::GlossaryEngine;
use crate::search::types::{ErrorResponse, TermOrder};

use axum::{
    Json,
    extract::{Extension, Query},
    http::StatusCode,
};
use std::sync::Arc;

pub async fn handle_list_terms(
    Query(params): Query<TermsParams>,
    Extension(engine): Extension<Arc<GlossaryEngine>>,
) -> Result<Json<TermsResponse>, (StatusCode, Json<ErrorResponse>)> {
    let order: TermOrder = match params.sort.as_deref().unwrap_or_default().parse() {
        Ok(order) => order,
        Err(e) => {
            tracing::debug!("Rejected term listing: {}", e);
            return Err((StatusCode::BAD_REQUEST, Json(ErrorResponse::new(&e))));
        }
    };

    Ok(Json(engine.list_terms(order).await))
}

pub async fn handle_stats(
    Extension(engine): Extension<Arc<GlossaryEngine>>,
) -> (StatusCode, Json<StatsResponse>) {
    let cache = engine.cache();
    let now = now_ms();

    let response = match cache.snapshot() {
        Some(snapshot) => StatsResponse {
            terms: snapshot.index.len(),
            fetched_at: Some(snapshot.fetched_at),
            age_ms: Some(snapshot.age_ms(now)),
            fresh: snapshot.is_fresh(now, cache.ttl()),
        },
        None => StatsResponse {
            terms: 0,
            fetched_at: None,
            age_ms: None,
            fresh: false,
        },
    };

    (StatusCode::OK, Json(response))
}
