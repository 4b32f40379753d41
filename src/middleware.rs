//! Request id and tracing layers shared by every route.
//!
//! Each request gets a uuid v4 `x-request-id` (unless the client sent one), recorded
//! on the request span and echoed on the response.

use axum::{
    body::Body,
    http::{HeaderValue, Request},
};
use tower_http::request_id::{MakeRequestId, RequestId};
use tracing::Span;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Clone, Copy, Default)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        Uuid::new_v4().to_string().parse::<HeaderValue>().ok().map(RequestId::new)
    }
}

/// Span for `TraceLayer::make_span_with`.
pub fn request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-");
    tracing::info_span!(
        "http_request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id,
    )
}
