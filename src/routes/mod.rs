//! HTTP route handlers.
//!
//! One route is registered: `GET /`, the status endpoint. Anything else falls
//! through to axum's defaults (404 for unknown paths, 405 for a wrong method
//! on `/`). Request tracing is enabled via middleware that generates a unique
//! request ID for each incoming request.

pub mod status;

use axum::{middleware, routing::get, Router};

use crate::middleware::request_id_layer;

/// Creates the axum router with the status route and request-ID tracing.
pub fn create_router() -> Router {
    Router::new()
        .route("/", get(status::status))
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
