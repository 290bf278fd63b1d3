//! Request interception stages: record the request, then gate the path.

use crate::clock::ProcessClock;
use axum::{
    extract::{Request, State},
    http::{StatusCode, Uri},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::{debug, trace};

/// Body of the 403 response
pub const FORBIDDEN_MESSAGE: &str = "Access Forbidden: Only the main page is allowed.";

/// Stamp the process clock before any routing decision.
pub async fn record_request(
    State(clock): State<ProcessClock>,
    request: Request,
    next: Next,
) -> Response {
    clock.record_request();
    trace!(path = %request.uri().path(), "request recorded");
    next.run(request).await
}

/// Reject every request target other than exactly `/`.
///
/// The query string counts: `/?x=1` is rejected too.
pub async fn restrict_to_root(request: Request, next: Next) -> Response {
    if !is_root_target(request.uri()) {
        debug!(uri = %request.uri(), "rejected non-root request");
        return forbidden().await.into_response();
    }
    next.run(request).await
}

/// Fixed 403 response.
pub async fn forbidden() -> (StatusCode, &'static str) {
    (StatusCode::FORBIDDEN, FORBIDDEN_MESSAGE)
}

fn is_root_target(uri: &Uri) -> bool {
    uri.path_and_query()
        .map(|target| target.as_str() == "/")
        .unwrap_or(false)
}
