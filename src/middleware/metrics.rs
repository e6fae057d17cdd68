use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::metrics::{HttpMetrics, RequestContext};

/// Middleware that times every request and counts it by method, endpoint and status.
///
/// Runs around handler errors, extractor rejections and the 404 fallback
/// alike; the response passes through untouched.
pub async fn track_requests(
    State(http): State<Arc<HttpMetrics>>,
    request: Request,
    next: Next,
) -> Response {
    let context = RequestContext::begin(&request, http.path_label());

    let response = next.run(request).await;

    http.observe(Some(&context), response.status());

    response
}
