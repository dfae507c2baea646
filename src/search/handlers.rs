use super::annotator::AnnotateOptions;
use super::engine::GlossaryEngine;
use super::types::{
    AnnotateRequest, AnnotateResponse, DefinitionParams, DefinitionResponse, ErrorResponse,
    ExistsResponse,
};

use axum::extract::Query;
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;

type HandlerError = (StatusCode, Json<ErrorResponse>);

fn required_term(params: DefinitionParams) -> Result<String, HandlerError> {
    let term = params.term.unwrap_or_default().trim().to_string();
    if term.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Term parameter is required")),
        ));
    }
    Ok(term)
}

pub async fn handle_definition(
    Query(params): Query<DefinitionParams>,
    Extension(engine): Extension<Arc<GlossaryEngine>>,
) -> Result<Json<DefinitionResponse>, HandlerError> {
    let term = required_term(params)?;

    match engine.lookup_definition(&term).await {
        Some(definition) => Ok(Json(DefinitionResponse { term, definition })),
        None => {
            tracing::debug!("No glossary definition for {:?}", term);
            Err((
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::for_term("Definition not found", &term)),
            ))
        }
    }
}

pub async fn handle_exists(
    Query(params): Query<DefinitionParams>,
    Extension(engine): Extension<Arc<GlossaryEngine>>,
) -> Result<Json<ExistsResponse>, HandlerError> {
    let term = required_term(params)?;
    let exists = engine.term_exists(&term).await;

    Ok(Json(ExistsResponse { term, exists }))
}

pub async fn handle_annotate(
    Extension(engine): Extension<Arc<GlossaryEngine>>,
    Json(req): Json<AnnotateRequest>,
) -> Json<AnnotateResponse> {
    let options = AnnotateOptions {
        first_only: req.first_only.unwrap_or(true),
    };
    let html = engine.mark_glossary_terms(&req.text, options).await;

    Json(AnnotateResponse { html })
}
