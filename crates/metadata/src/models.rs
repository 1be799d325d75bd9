use crate::ProviderError;

/// A show as known to the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogShow {
    pub id: String,
    pub name: String,
    pub overview: String,
    pub first_air_date: Option<String>,
    pub season_count: i64,
}

/// One episode, flattened out of a season lookup.
///
/// `air_date` keeps the raw upstream string; an empty or malformed value
/// simply never passes the recency filter.
#[derive(Debug, Clone, PartialEq)]
pub struct Episode {
    pub id: i64,
    pub title: String,
    pub overview: String,
    pub air_date: String,
    pub episode_number: i64,
    pub season_number: i64,
    pub still_path: Option<String>,
    pub show_name: String,
    pub show_id: String,
}

impl Episode {
    /// Stamp the owning show onto an episode fresh from a season lookup.
    pub fn with_show(mut self, show_name: &str, show_id: &str) -> Self {
        self.show_name = show_name.to_string();
        self.show_id = show_id.to_string();
        self
    }

    /// Stable identity: `{show_id}-{season}-{episode}`.
    pub fn identity(&self) -> String {
        format!(
            "{}-{}-{}",
            self.show_id, self.season_number, self.episode_number
        )
    }
}

/// A season lookup that failed inside an otherwise successful show fetch.
#[derive(Debug)]
pub struct SeasonFailure {
    pub season: i64,
    pub error: ProviderError,
}

/// Outcome of fetching a single show.
#[derive(Debug)]
pub struct ShowEpisodes {
    /// The reference as written in the configuration.
    pub reference: String,
    pub catalog_id: String,
    pub show_name: String,
    /// Episodes inside the recency window, in upstream order.
    pub episodes: Vec<Episode>,
    pub season_failures: Vec<SeasonFailure>,
}

/// A show that contributed nothing because its fetch was aborted.
#[derive(Debug)]
pub struct ShowFailure {
    pub reference: String,
    pub error: ProviderError,
}

/// Result of one aggregation pass over every configured show.
#[derive(Debug, Default)]
pub struct AggregateReport {
    /// All recent episodes, concatenated in configuration order.
    pub episodes: Vec<Episode>,
    /// Shows that were fetched, episodes moved into `episodes`.
    pub shows: Vec<ShowSummary>,
    pub failures: Vec<ShowFailure>,
}

/// Per-show bookkeeping kept after the episodes are merged.
#[derive(Debug)]
pub struct ShowSummary {
    pub reference: String,
    pub catalog_id: String,
    pub show_name: String,
    pub recent_episodes: usize,
    pub season_failures: Vec<SeasonFailure>,
}

impl AggregateReport {
    pub fn skipped_seasons(&self) -> usize {
        self.shows.iter().map(|s| s.season_failures.len()).sum()
    }
}
