use thiserror::Error;

/// Errors that can occur while talking to the catalog
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Catalog lookup failed: {0}")]
    Lookup(#[from] tmdb::TmdbError),

    #[error("No TMDB show found for IMDb ID {reference}")]
    NotFound { reference: String },
}

impl ProviderError {
    pub fn not_found(reference: impl Into<String>) -> Self {
        Self::NotFound {
            reference: reference.into(),
        }
    }
}
