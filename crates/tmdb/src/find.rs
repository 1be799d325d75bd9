use crate::{models::FindResponse, TmdbClient};

impl TmdbClient {
    /// Look up TMDB entries by IMDb ID.
    ///
    /// GET /find/{external_id}?external_source=imdb_id
    pub async fn find_by_imdb_id(&self, imdb_id: &str) -> crate::Result<FindResponse> {
        let path = format!("/find/{}", urlencoding::encode(imdb_id));
        self.get_json(&path, &[("external_source", "imdb_id")])
            .await
    }
}
