//! Route tables and the assembled application router.

mod common;
mod todo;

pub use common::common_routes_with_ready;
pub use todo::todo_routes;

use crate::error::ErrorBody;
use crate::state::AppState;
use axum::{
    http::{header, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    Json, Router,
};
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Prefix the CRUD routes are nested under.
pub const API_PREFIX: &str = "/api/v1";

/// Health/readiness/version at the root, todo CRUD under `/api/v1`, with
/// request tracing and a body size limit.
pub fn app(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .nest(API_PREFIX, todo_routes(state))
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(middleware::map_response(payload_too_large_as_json))
        .layer(TraceLayer::new_for_http())
}

/// The body limit layer answers 413 in plain text; give it the same
/// `{"error": ...}` shape as every other rejection.
async fn payload_too_large_as_json(response: Response) -> Response {
    let is_json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"));
    if response.status() != StatusCode::PAYLOAD_TOO_LARGE || is_json {
        return response;
    }
    let body = ErrorBody {
        error: "request body too large".into(),
    };
    (StatusCode::PAYLOAD_TOO_LARGE, Json(body)).into_response()
}
