//! Minimal TMDB v3 client covering the lookups the episode feed needs.

mod client;
mod error;
mod find;
mod tv;
pub mod models;

pub use client::TmdbClient;
pub use error::TmdbError;
pub use models::{FindResponse, SeasonDetails, TvEpisode, TvShow, TvShowDetails};

pub type Result<T> = std::result::Result<T, TmdbError>;
