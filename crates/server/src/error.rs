use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Errors that abort a feed request.
#[derive(Debug, Error)]
pub enum AppError {
    /// Feed rendering failed
    #[error("Failed to render feed: {0}")]
    Render(#[from] rss::RssError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);
        // Internal details stay in the logs.
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
