use axum::{routing::any, Router};
use tower_http::trace::TraceLayer;

use crate::{handlers, state::AppState};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", any(handlers::serve_feed))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
