//! Request identification and tracing spans.
//!
//! # Responsibilities
//! - Name the request ID header
//! - Build the per-request span carrying method, path and request ID
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing
//! - An incoming x-request-id is kept rather than replaced

use axum::body::Body;
use axum::http::{HeaderName, Request};
use tracing::Span;

/// Header carrying the request ID.
pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// The request ID, if the request carries a readable one.
pub fn request_id<B>(req: &Request<B>) -> Option<&str> {
    req.headers().get(X_REQUEST_ID).and_then(|v| v.to_str().ok())
}

/// Span for one request.
pub fn make_span(req: &Request<Body>) -> Span {
    tracing::info_span!(
        "request",
        method = %req.method(),
        path = %req.uri().path(),
        request_id = %request_id(req).unwrap_or("unknown"),
    )
}
