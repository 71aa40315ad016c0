// src/presentation/http/middleware/timeout.rs
use crate::presentation::http::error::HttpError;
use axum::{
    body::Body,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::time::Duration;

/// Answers 408 when the rest of the stack takes longer than `limit`.
///
/// The inner future is dropped on expiry, which cancels whatever storage call
/// the handler was awaiting.
///
/// Usage: `axum::middleware::from_fn(move |req, next| request_timeout(req, next, limit))`
pub async fn request_timeout(req: Request<Body>, next: Next, limit: Duration) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();

    match tokio::time::timeout(limit, next.run(req)).await {
        Ok(response) => response,
        Err(_) => {
            tracing::warn!(%method, %uri, timeout_ms = limit.as_millis(), "request timed out");
            HttpError::request_timeout().into_response()
        }
    }
}
