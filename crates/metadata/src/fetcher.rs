use chrono::{DateTime, Utc};

use crate::{
    filter_recent, resolve, select_seasons, CatalogProvider, ProviderError, SeasonFailure,
    ShowEpisodes,
};

/// Fetch the recent episodes of a single show.
///
/// Resolution and show details are required; either failing aborts the
/// show. A failing season lookup is recorded in
/// [`ShowEpisodes::season_failures`] and the remaining seasons are still
/// fetched.
pub async fn fetch_show<P>(
    provider: &P,
    reference: &str,
    now: DateTime<Utc>,
) -> Result<ShowEpisodes, ProviderError>
where
    P: CatalogProvider + ?Sized,
{
    let catalog_id = resolve(provider, reference).await?;
    let show = provider.show_details(&catalog_id).await?;

    let mut episodes = Vec::new();
    let mut season_failures = Vec::new();

    for season in select_seasons(show.season_count) {
        match provider.season_episodes(&catalog_id, season).await {
            Ok(season_episodes) => {
                tracing::debug!(
                    "Fetched {} episodes for {} season {}",
                    season_episodes.len(),
                    catalog_id,
                    season
                );
                episodes.extend(
                    season_episodes
                        .into_iter()
                        .map(|episode| episode.with_show(&show.name, &catalog_id)),
                );
            }
            Err(error) => season_failures.push(SeasonFailure { season, error }),
        }
    }

    Ok(ShowEpisodes {
        reference: reference.to_string(),
        catalog_id,
        show_name: show.name,
        episodes: filter_recent(episodes, now),
        season_failures,
    })
}
