//! Request-processing middleware applied before route dispatch.
//!
//! Two layers: a request ID middleware that wraps each request in a tracing
//! span for log correlation, and a JSON body-parsing middleware that buffers
//! and validates `application/json` request bodies ahead of the handlers.

use std::time::Instant;

use axum::{
    body::Body,
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use http::header::CONTENT_TYPE;
use http::StatusCode;
use http_body_util::LengthLimitError;
use tracing::Instrument;
use uuid::Uuid;

use crate::config::JSON_BODY_LIMIT;

/// Extension type for accessing the request ID in handlers if needed.
#[derive(Clone, Debug)]
pub struct RequestId(pub Uuid);

/// Extension type holding the parsed JSON request body, when one was sent.
///
/// No current route reads this; it is populated so future handlers can take
/// the parsed body from extensions instead of re-reading the stream.
#[derive(Clone, Debug)]
pub struct JsonBody(pub serde_json::Value);

/// Middleware that generates a request ID and creates a request span.
///
/// This should be the outermost middleware layer so the span wraps
/// all request processing, including other middleware and handlers.
pub async fn request_id_layer(mut request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %request.method(),
        path = %request.uri().path(),
    );

    request.extensions_mut().insert(RequestId(request_id));
    let start = Instant::now();

    async move {
        let response = next.run(request).await;
        tracing::info!(
            status = response.status().as_u16(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Request completed"
        );
        response
    }
    .instrument(span)
    .await
}

/// Middleware that parses `application/json` request bodies before dispatch.
///
/// Requests without a JSON content type pass through untouched. For JSON
/// requests the body is buffered up to [`JSON_BODY_LIMIT`] and parsed; the
/// parsed value lands in request extensions as [`JsonBody`] and the buffered
/// bytes are restored so extractors downstream still see the body. Malformed
/// JSON is rejected with 400, an over-limit body with 413.
pub async fn json_body_layer(request: Request, next: Next) -> Response {
    let is_json = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| {
            value
                .trim_start()
                .to_ascii_lowercase()
                .starts_with("application/json")
        })
        .unwrap_or(false);

    if !is_json {
        return next.run(request).await;
    }

    let (mut parts, body) = request.into_parts();
    let bytes = match axum::body::to_bytes(body, JSON_BODY_LIMIT).await {
        Ok(bytes) => bytes,
        Err(error) => {
            // Over the size limit gets 413; any other read failure
            // (e.g. the client hung up mid-body) gets 400.
            let status = if is_length_limit(&error) {
                StatusCode::PAYLOAD_TOO_LARGE
            } else {
                StatusCode::BAD_REQUEST
            };
            tracing::debug!(%error, status = status.as_u16(), "Rejecting unreadable JSON request body");
            return status.into_response();
        }
    };

    if !bytes.is_empty() {
        match serde_json::from_slice::<serde_json::Value>(&bytes) {
            Ok(value) => {
                parts.extensions.insert(JsonBody(value));
            }
            Err(error) => {
                tracing::debug!(%error, "Rejecting malformed JSON request body");
                return StatusCode::BAD_REQUEST.into_response();
            }
        }
    }

    next.run(Request::from_parts(parts, Body::from(bytes))).await
}

/// Walk the error source chain to tell the body-size limit apart from
/// mid-stream read failures.
fn is_length_limit(error: &axum::Error) -> bool {
    let mut source = std::error::Error::source(error);
    while let Some(inner) = source {
        if inner.is::<LengthLimitError>() {
            return true;
        }
        source = inner.source();
    }
    false
}
