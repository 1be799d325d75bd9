//! In-memory catalog for exercising the pipeline without a network.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use crate::{CatalogProvider, CatalogShow, Episode, ProviderError, AIR_DATE_FORMAT};

#[derive(Default)]
struct State {
    external: HashMap<String, Vec<String>>,
    failing_external: Vec<String>,
    shows: HashMap<String, CatalogShow>,
    seasons: HashMap<(String, i64), Vec<Episode>>,
    failing_seasons: Vec<(String, i64)>,
    find_calls: usize,
    details_calls: usize,
    season_calls: Vec<(String, i64)>,
}

/// Mock catalog. Unknown shows and seasons answer like a TMDB 404.
#[derive(Clone, Default)]
pub struct MockProvider {
    state: Arc<Mutex<State>>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_external(&self, external_id: &str, catalog_ids: &[&str]) {
        self.state.lock().unwrap().external.insert(
            external_id.to_string(),
            catalog_ids.iter().map(|id| id.to_string()).collect(),
        );
    }

    pub fn fail_external(&self, external_id: &str) {
        self.state
            .lock()
            .unwrap()
            .failing_external
            .push(external_id.to_string());
    }

    pub fn add_show(&self, catalog_id: &str, name: &str, season_count: i64) {
        self.state.lock().unwrap().shows.insert(
            catalog_id.to_string(),
            CatalogShow {
                id: catalog_id.to_string(),
                name: name.to_string(),
                overview: String::new(),
                first_air_date: None,
                season_count,
            },
        );
    }

    pub fn fail_show(&self, catalog_id: &str) {
        self.state.lock().unwrap().shows.remove(catalog_id);
    }

    pub fn add_season(&self, catalog_id: &str, season: i64, episodes: Vec<Episode>) {
        self.state
            .lock()
            .unwrap()
            .seasons
            .insert((catalog_id.to_string(), season), episodes);
    }

    pub fn fail_season(&self, catalog_id: &str, season: i64) {
        self.state
            .lock()
            .unwrap()
            .failing_seasons
            .push((catalog_id.to_string(), season));
    }

    pub fn find_calls(&self) -> usize {
        self.state.lock().unwrap().find_calls
    }

    pub fn details_calls(&self) -> usize {
        self.state.lock().unwrap().details_calls
    }

    pub fn season_calls(&self) -> Vec<(String, i64)> {
        self.state.lock().unwrap().season_calls.clone()
    }
}

fn lookup_error(path: String, status_code: u16) -> ProviderError {
    ProviderError::Lookup(tmdb::TmdbError::Api {
        url: format!("https://api.themoviedb.org/3{}", path),
        status_code,
        message: "mock failure".to_string(),
    })
}

#[async_trait]
impl CatalogProvider for MockProvider {
    async fn find_by_external_id(
        &self,
        external_id: &str,
    ) -> Result<Vec<CatalogShow>, ProviderError> {
        let mut state = self.state.lock().unwrap();
        state.find_calls += 1;
        if state.failing_external.iter().any(|id| id == external_id) {
            return Err(lookup_error(format!("/find/{}", external_id), 500));
        }
        let ids = state.external.get(external_id).cloned().unwrap_or_default();
        Ok(ids
            .into_iter()
            .map(|id| CatalogShow {
                id,
                name: String::new(),
                overview: String::new(),
                first_air_date: None,
                season_count: 0,
            })
            .collect())
    }

    async fn show_details(&self, catalog_id: &str) -> Result<CatalogShow, ProviderError> {
        let mut state = self.state.lock().unwrap();
        state.details_calls += 1;
        state
            .shows
            .get(catalog_id)
            .cloned()
            .ok_or_else(|| lookup_error(format!("/tv/{}", catalog_id), 404))
    }

    async fn season_episodes(
        &self,
        catalog_id: &str,
        season_number: i64,
    ) -> Result<Vec<Episode>, ProviderError> {
        let mut state = self.state.lock().unwrap();
        let key = (catalog_id.to_string(), season_number);
        state.season_calls.push(key.clone());
        let path = format!("/tv/{}/season/{}", catalog_id, season_number);
        if state.failing_seasons.contains(&key) {
            return Err(lookup_error(path, 500));
        }
        state
            .seasons
            .get(&key)
            .cloned()
            .ok_or_else(|| lookup_error(path, 404))
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

/// Bare episode without air date or show context.
pub fn episode(id: i64, season_number: i64, episode_number: i64) -> Episode {
    Episode {
        id,
        title: format!("Episode {}", episode_number),
        overview: String::new(),
        air_date: String::new(),
        episode_number,
        season_number,
        still_path: None,
        show_name: String::new(),
        show_id: String::new(),
    }
}

/// Date the episode `days` calendar days before `now`.
pub fn aired_days_before(mut episode: Episode, now: DateTime<Utc>, days: i64) -> Episode {
    episode.air_date = (now - Duration::days(days)).format(AIR_DATE_FORMAT).to_string();
    episode
}
