use std::sync::Arc;

use metadata::{CatalogProvider, TmdbProvider};
use reqwest::Client;
use tmdb::TmdbClient;

use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub catalog: Arc<dyn CatalogProvider>,
}

impl AppState {
    /// Build the state around a TMDB-backed catalog.
    pub fn new(config: Config) -> Self {
        let http_client = Client::new();
        let mut tmdb = TmdbClient::with_client(http_client, &config.api_key);
        if let Some(lang) = &config.language {
            tmdb = tmdb.with_language(lang);
        }
        let catalog = Arc::new(TmdbProvider::new(Arc::new(tmdb)));
        Self::with_catalog(config, catalog)
    }

    pub fn with_catalog(config: Config, catalog: Arc<dyn CatalogProvider>) -> Self {
        Self {
            config: Arc::new(config),
            catalog,
        }
    }
}
