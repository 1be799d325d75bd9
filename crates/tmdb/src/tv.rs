use crate::{
    models::{SeasonDetails, TvShowDetails},
    TmdbClient,
};

impl TmdbClient {
    /// Get the details of a TV show by its ID.
    pub async fn get_tv_details(&self, series_id: &str) -> crate::Result<TvShowDetails> {
        let path = format!("/tv/{}", urlencoding::encode(series_id));
        self.get_json(&path, &[]).await
    }

    /// Get the details of a TV season by series ID and season number.
    pub async fn get_season_details(
        &self,
        series_id: &str,
        season_number: i64,
    ) -> crate::Result<SeasonDetails> {
        let path = format!(
            "/tv/{}/season/{}",
            urlencoding::encode(series_id),
            season_number
        );
        self.get_json(&path, &[]).await
    }
}
