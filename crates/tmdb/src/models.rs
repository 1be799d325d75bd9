use serde::{Deserialize, Serialize};

// TMDB leaves out or nulls many fields on sparse entries, so everything
// except the show name falls back to a default.

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TvShow {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub first_air_date: Option<String>,
}

/// Response of the `/find` endpoint. Only TV results are kept.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FindResponse {
    #[serde(default)]
    pub tv_results: Vec<TvShow>,
}

// ============ TV Show Details ============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TvShowDetails {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub number_of_seasons: i64,
}

// ============ Season Details ============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TvEpisode {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub air_date: Option<String>,
    #[serde(default)]
    pub episode_number: i64,
    #[serde(default)]
    pub season_number: i64,
    #[serde(default)]
    pub still_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonDetails {
    #[serde(default)]
    pub season_number: i64,
    #[serde(default)]
    pub episodes: Vec<TvEpisode>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_details_minimal_payload() {
        let json = r#"{"name": "Test Show", "number_of_seasons": 1}"#;
        let show: TvShowDetails = serde_json::from_str(json).unwrap();
        assert_eq!(show.name, "Test Show");
        assert_eq!(show.number_of_seasons, 1);
        assert_eq!(show.id, 0);
    }

    #[test]
    fn test_episode_with_null_fields() {
        let json = r#"{
            "id": 63056,
            "name": "Winter Is Coming",
            "overview": null,
            "air_date": null,
            "episode_number": 1,
            "season_number": 1,
            "still_path": null
        }"#;
        let episode: TvEpisode = serde_json::from_str(json).unwrap();
        assert_eq!(episode.id, 63056);
        assert!(episode.air_date.is_none());
        assert!(episode.overview.is_none());
    }

    #[test]
    fn test_find_response_without_tv_results() {
        let json = r#"{"movie_results": [], "person_results": []}"#;
        let found: FindResponse = serde_json::from_str(json).unwrap();
        assert!(found.tv_results.is_empty());
    }
}
