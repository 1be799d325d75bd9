use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::TmdbError;

const BASE_URL: &str = "https://api.themoviedb.org/3";

pub struct TmdbClient {
    client: Client,
    api_key: String,
    base_url: String,
    lang: Option<String>,
}

impl TmdbClient {
    /// Create a TmdbClient with a reqwest Client.
    pub fn with_client(client: Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            base_url: BASE_URL.to_string(),
            lang: None,
        }
    }

    /// Point the client at a different API root, e.g. a local test server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Ask TMDB for localized names and overviews.
    pub fn with_language(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Issue a GET against `path` with the api key (and language, if set)
    /// appended to `extra_query`.
    ///
    /// Transport errors are stripped of their URL: reqwest would otherwise
    /// print the query string, api key included.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        extra_query: &[(&str, &str)],
    ) -> crate::Result<T> {
        let url = self.url(path);

        let mut query = vec![("api_key", self.api_key.as_str())];
        if let Some(lang) = &self.lang {
            query.push(("language", lang.as_str()));
        }
        query.extend_from_slice(extra_query);

        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|source| TmdbError::Request {
                url: url.clone(),
                source: source.without_url(),
            })?;

        self.handle_response(url, response).await
    }

    pub(crate) async fn handle_response<T: DeserializeOwned>(
        &self,
        url: String,
        response: reqwest::Response,
    ) -> crate::Result<T> {
        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(source) => {
                return Err(TmdbError::Request {
                    url,
                    source: source.without_url(),
                })
            }
        };
        if !status.is_success() {
            return Err(TmdbError::Api {
                url,
                status_code: status.as_u16(),
                message: body,
            });
        }
        let deserializer = &mut serde_json::Deserializer::from_str(&body);
        serde_path_to_error::deserialize(deserializer).map_err(|e| TmdbError::Json {
            url,
            path: e.path().to_string(),
            source: e.into_inner(),
        })
    }
}
