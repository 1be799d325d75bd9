use axum::{extract::State, http::header, response::IntoResponse};
use chrono::Utc;

use crate::{error::AppResult, feed, state::AppState};

pub const RSS_CONTENT_TYPE: &str = "application/rss+xml";

/// Serve the feed of recently aired episodes.
///
/// The catalog is queried on every request; nothing is cached.
pub async fn serve_feed(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let now = Utc::now();
    let report =
        metadata::aggregate(state.catalog.as_ref(), state.config.shows.as_slice(), now).await;
    let body = feed::render_feed(&report.episodes, now)?;

    Ok(([(header::CONTENT_TYPE, RSS_CONTENT_TYPE)], body))
}
