//! TMDB catalog provider adapter

use std::sync::Arc;

use async_trait::async_trait;
use tmdb::{TmdbClient, TvEpisode, TvShow, TvShowDetails};

use crate::{CatalogProvider, CatalogShow, Episode, ProviderError};

/// TMDB catalog provider
pub struct TmdbProvider {
    client: Arc<TmdbClient>,
}

impl TmdbProvider {
    pub fn new(client: Arc<TmdbClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CatalogProvider for TmdbProvider {
    async fn find_by_external_id(
        &self,
        external_id: &str,
    ) -> Result<Vec<CatalogShow>, ProviderError> {
        let found = self.client.find_by_imdb_id(external_id).await?;
        Ok(found.tv_results.into_iter().map(CatalogShow::from).collect())
    }

    async fn show_details(&self, catalog_id: &str) -> Result<CatalogShow, ProviderError> {
        let details = self.client.get_tv_details(catalog_id).await?;
        Ok(details.into())
    }

    async fn season_episodes(
        &self,
        catalog_id: &str,
        season_number: i64,
    ) -> Result<Vec<Episode>, ProviderError> {
        let season = self
            .client
            .get_season_details(catalog_id, season_number)
            .await?;
        Ok(season.episodes.into_iter().map(Episode::from).collect())
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}

impl From<TvShow> for CatalogShow {
    fn from(show: TvShow) -> Self {
        Self {
            id: show.id.to_string(),
            name: show.name,
            overview: show.overview.unwrap_or_default(),
            first_air_date: show.first_air_date,
            // Search-style results carry no season information.
            season_count: 0,
        }
    }
}

impl From<TvShowDetails> for CatalogShow {
    fn from(show: TvShowDetails) -> Self {
        Self {
            id: show.id.to_string(),
            name: show.name,
            overview: show.overview.unwrap_or_default(),
            first_air_date: show.first_air_date,
            season_count: show.number_of_seasons,
        }
    }
}

impl From<TvEpisode> for Episode {
    fn from(episode: TvEpisode) -> Self {
        Self {
            id: episode.id,
            title: episode.name,
            overview: episode.overview.unwrap_or_default(),
            air_date: episode.air_date.unwrap_or_default(),
            episode_number: episode.episode_number,
            season_number: episode.season_number,
            still_path: episode.still_path,
            show_name: String::new(),
            show_id: String::new(),
        }
    }
}
