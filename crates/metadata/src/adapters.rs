mod tmdb_adapter;

pub use tmdb_adapter::TmdbProvider;
