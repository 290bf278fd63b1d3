//! HTTP API
//!
//! Request pipeline, outermost first:
//!
//! 1. request tracing
//! 2. security headers
//! 3. static assets from the public directory
//! 4. record request on the process clock
//! 5. restrict to `/`
//! 6. status page

pub mod pipeline;
pub mod security;
pub mod status;

use crate::AppState;
use axum::{middleware, routing::get, Router};
use tower_http::{services::ServeDir, trace::TraceLayer};

/// Build the full application router.
pub fn create_app(state: AppState) -> Router {
    let assets = ServeDir::new(&state.public_dir)
        .append_index_html_on_directories(false)
        .call_fallback_on_method_not_allowed(true)
        .fallback(create_router(state));

    Router::new()
        .fallback_service(assets)
        .layer(middleware::from_fn(security::security_headers))
        .layer(TraceLayer::new_for_http())
}

/// Dynamic part of the pipeline, without static assets.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(status::status_page))
        .fallback(pipeline::forbidden)
        .layer(middleware::from_fn(pipeline::restrict_to_root))
        .layer(middleware::from_fn_with_state(
            state.clock.clone(),
            pipeline::record_request,
        ))
        .with_state(state)
}
