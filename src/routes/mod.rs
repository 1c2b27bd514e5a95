//! HTTP route handlers.
//!
//! Two routes: a health check for liveness probes and a root greeting.
//! Every request passes through JSON body-parsing middleware before
//! dispatch, and request tracing is enabled via middleware that generates
//! a unique request ID for correlating logs within a request.

pub mod health;
pub mod home;

use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::middleware::{json_body_layer, request_id_layer};

/// Creates the Axum router with all routes and middleware.
///
/// Unmatched paths get the framework's default 404; a matched path with the
/// wrong method gets the default 405.
pub fn create_router() -> Router {
    Router::new()
        .route("/", get(home::index))
        .route("/health", get(health::health))
        .layer(TraceLayer::new_for_http())
        // JSON body parsing - applied to all requests before handler dispatch
        .layer(middleware::from_fn(json_body_layer))
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
