use crate::{CatalogProvider, ProviderError};

/// Marker of an IMDb id, e.g. `tt0944947`.
pub const IMDB_ID_PREFIX: &str = "tt";

/// Whether a reference should be looked up as an IMDb id.
fn is_imdb_id(reference: &str) -> bool {
    reference.len() > IMDB_ID_PREFIX.len() && reference.starts_with(IMDB_ID_PREFIX)
}

/// Resolve a configured show reference to a TMDB id.
///
/// IMDb ids are translated with one `find` call and the first TV result
/// wins. Anything else is assumed to already be a TMDB id and is returned
/// as is, without touching the network.
pub async fn resolve<P>(provider: &P, reference: &str) -> Result<String, ProviderError>
where
    P: CatalogProvider + ?Sized,
{
    if !is_imdb_id(reference) {
        return Ok(reference.to_string());
    }

    let candidates = provider.find_by_external_id(reference).await?;
    let show = candidates
        .into_iter()
        .next()
        .ok_or_else(|| ProviderError::not_found(reference))?;

    tracing::debug!("Resolved {} to TMDB id {} ({})", reference, show.id, show.name);
    Ok(show.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::MockProvider;

    #[tokio::test]
    async fn test_native_id_passes_through() {
        let provider = MockProvider::new();

        for reference in ["1399", "tt", "t1234", "abc", "", "1tt2"] {
            let resolved = resolve(&provider, reference).await.unwrap();
            assert_eq!(resolved, reference);
        }
        assert_eq!(provider.find_calls(), 0);
    }

    #[tokio::test]
    async fn test_imdb_id_picks_first_candidate() {
        let provider = MockProvider::new();
        provider.add_external("tt0944947", &["1399", "99999"]);

        let resolved = resolve(&provider, "tt0944947").await.unwrap();
        assert_eq!(resolved, "1399");
        assert_eq!(provider.find_calls(), 1);
    }

    #[tokio::test]
    async fn test_imdb_id_without_results_is_not_found() {
        let provider = MockProvider::new();

        let err = resolve(&provider, "tt1234567").await.unwrap_err();
        match err {
            ProviderError::NotFound { reference } => assert_eq!(reference, "tt1234567"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_lookup_failure_propagates() {
        let provider = MockProvider::new();
        provider.fail_external("tt7654321");

        let err = resolve(&provider, "tt7654321").await.unwrap_err();
        assert!(matches!(err, ProviderError::Lookup(_)));
    }
}
