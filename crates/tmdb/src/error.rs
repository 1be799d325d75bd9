use thiserror::Error;

/// Errors returned by [`TmdbClient`](crate::TmdbClient).
///
/// `url` is the endpoint without its query string, so the API key is
/// never part of an error message.
#[derive(Debug, Error)]
pub enum TmdbError {
    #[error("HTTP request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("API error from {url}: {status_code} - {message}")]
    Api {
        url: String,
        status_code: u16,
        message: String,
    },

    #[error("Failed to decode response from {url} at '{path}': {source}")]
    Json {
        url: String,
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl TmdbError {
    /// The endpoint that was being called when the error happened.
    pub fn url(&self) -> &str {
        match self {
            TmdbError::Request { url, .. }
            | TmdbError::Api { url, .. }
            | TmdbError::Json { url, .. } => url,
        }
    }
}
