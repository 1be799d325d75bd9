//! Catalog provider trait definition

use async_trait::async_trait;

use crate::{CatalogShow, Episode, ProviderError};

/// Read-only access to the show catalog.
///
/// One method per remote lookup. Implementations perform exactly one
/// request per call and never retry.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Translate an external (IMDb) id into zero or more catalog shows.
    async fn find_by_external_id(
        &self,
        external_id: &str,
    ) -> Result<Vec<CatalogShow>, ProviderError>;

    /// Fetch a show by its catalog id.
    async fn show_details(&self, catalog_id: &str) -> Result<CatalogShow, ProviderError>;

    /// Fetch the episodes of one season, in upstream order.
    ///
    /// The returned episodes carry no show context yet.
    async fn season_episodes(
        &self,
        catalog_id: &str,
        season_number: i64,
    ) -> Result<Vec<Episode>, ProviderError>;

    /// Short provider name. Only used to label the aggregation summary
    /// log line.
    fn name(&self) -> &'static str;
}
