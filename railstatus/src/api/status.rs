//! GET / - status page

use crate::page::{render, StatusView};
use crate::AppState;
use axum::{extract::State, response::Html};
use tracing::debug;

/// GET /
///
/// The record stage has already stamped this request, so on a fresh process
/// the first render reports the time until this very request as uptime.
pub async fn status_page(State(state): State<AppState>) -> Html<String> {
    let snapshot = state.clock.snapshot();
    debug!(
        uptime_secs = ?snapshot.uptime_secs,
        downtime_secs = ?snapshot.downtime_secs,
        "rendering status page"
    );
    Html(render(&state.page, &StatusView::from_snapshot(&snapshot)))
}
