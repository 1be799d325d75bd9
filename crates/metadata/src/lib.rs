//! Recently aired episode discovery.
//!
//! This crate turns a list of configured show references into a flat,
//! ordered collection of episodes that aired inside the recency window.
//!
//! # Architecture
//!
//! ```text
//! aggregate(shows)
//!   └─ fetch_show(reference)            per show, in configured order
//!        ├─ resolve(reference)           tt… IMDb id → TMDB id
//!        ├─ show_details(id)
//!        ├─ select_seasons(count)        season 1 + latest
//!        ├─ season_episodes(id, n)       per season, failures recorded
//!        └─ filter_recent(episodes, now)
//! ```
//!
//! Every remote call goes through the [`CatalogProvider`] trait, so the
//! whole pipeline runs against an in-memory provider in tests.
//!
//! # Example
//!
//! ```ignore
//! use metadata::{aggregate, TmdbProvider};
//! use std::sync::Arc;
//!
//! let provider = TmdbProvider::new(Arc::new(client));
//! let report = aggregate(&provider, &shows, chrono::Utc::now()).await;
//! for episode in &report.episodes {
//!     println!("{} S{}E{}", episode.show_name, episode.season_number, episode.episode_number);
//! }
//! ```

mod adapters;
mod aggregate;
mod error;
mod fetcher;
pub mod models;
mod provider;
mod recency;
mod resolver;
mod seasons;

#[cfg(test)]
mod mocks;

pub use adapters::TmdbProvider;
pub use aggregate::aggregate;
pub use error::ProviderError;
pub use fetcher::fetch_show;
pub use models::{
    AggregateReport, CatalogShow, Episode, SeasonFailure, ShowEpisodes, ShowFailure,
    ShowSummary,
};
pub use provider::CatalogProvider;
pub use recency::{
    filter_recent, is_recent, parse_air_date, AIR_DATE_FORMAT, RECENCY_WINDOW_DAYS,
};
pub use resolver::{resolve, IMDB_ID_PREFIX};
pub use seasons::select_seasons;
