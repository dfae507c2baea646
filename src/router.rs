use crate::search::engine::GlossaryEngine;
use crate::search::handlers::{handle_annotate, handle_definition, handle_exists};
use crate::search::types::{
    ENDPOINT_ANNOTATE, ENDPOINT_API_DEFINITION, ENDPOINT_DEFINITION, ENDPOINT_EXISTS,
};
use crate::storage::handlers::{handle_list_terms, handle_stats};
use crate::storage::protocol::{ENDPOINT_STATS, ENDPOINT_TERMS};

use axum::{
    Router,
    extract::Extension,
    routing::{get, post},
};
use std::sync::Arc;

/// Builds the HTTP router with every glossary endpoint.
pub fn build_router(engine: Arc<GlossaryEngine>) -> Router {
    Router::new()
        .route(ENDPOINT_DEFINITION, get(handle_definition))
        .route(ENDPOINT_API_DEFINITION, get(handle_definition))
        .route(ENDPOINT_EXISTS, get(handle_exists))
        .route(ENDPOINT_ANNOTATE, post(handle_annotate))
        .route(ENDPOINT_TERMS, get(handle_list_terms))
        .route(ENDPOINT_STATS, get(handle_stats))
        .layer(Extension(engine))
}
