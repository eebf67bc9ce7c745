//! TMDB v3 catalog client.
//!
//! Maps the four catalog operations onto TMDB endpoints:
//!
//! | Operation      | Endpoint                   |
//! |----------------|----------------------------|
//! | `list_popular` | `GET /movie/popular`       |
//! | `search`       | `GET /search/movie`        |
//! | `get_detail`   | `GET /movie/{id}`          |
//! | `list_videos`  | `GET /movie/{id}/videos`   |
//!
//! Authentication uses the v3 `api_key` query parameter. List endpoints wrap
//! their payload in a `results` array.

use super::Catalog;
use crate::domain::{CatalogError, CatalogResult, MarqueeError, Movie, MovieId, Result, Trailer};
use crate::Config;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fmt;
use std::time::Duration;
use tracing::Instrument;

/// Envelope shared by TMDB list responses.
#[derive(Debug, Deserialize)]
struct ResultsPage<T> {
    #[serde(default = "Vec::new")]
    results: Vec<T>,
}

/// Error body TMDB returns alongside non-success statuses.
#[derive(Debug, Deserialize)]
struct TmdbErrorBody {
    #[serde(default)]
    status_message: Option<String>,
}

/// HTTP client for the TMDB v3 API.
#[derive(Clone)]
pub struct TmdbCatalog {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    language: Option<String>,
}

impl fmt::Debug for TmdbCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TmdbCatalog")
            .field("base_url", &self.base_url)
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

impl TmdbCatalog {
    /// Creates a client for the given API root.
    ///
    /// # Errors
    ///
    /// Returns [`MarqueeError::Config`] if the HTTP client cannot be built.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use marquee::catalog::TmdbCatalog;
    /// use std::time::Duration;
    ///
    /// let catalog = TmdbCatalog::new("api-key", "https://api.themoviedb.org/3", Duration::from_secs(10))?;
    /// # Ok::<(), marquee::MarqueeError>(())
    /// ```
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| MarqueeError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            language: None,
        })
    }

    /// Creates a client from the resolved configuration.
    ///
    /// # Errors
    ///
    /// Returns [`MarqueeError::Config`] when no API key is configured.
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                MarqueeError::Config(
                    "missing TMDB API key (set TMDB_API_KEY or api_key in the config file)".to_string(),
                )
            })?;

        let catalog = Self::new(api_key, config.api_base_url.clone(), config.request_timeout)?;
        Ok(match &config.language {
            Some(language) => catalog.with_language(language.clone()),
            None => catalog,
        })
    }

    /// Requests localized titles and overviews (`language` query parameter).
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Issues a GET against `path` and decodes the JSON body.
    async fn get_json<T>(&self, path: &str, params: &[(&str, String)]) -> CatalogResult<T>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{path}", self.base_url);

        let mut query: Vec<(&str, String)> = Vec::with_capacity(params.len() + 2);
        query.push(("api_key", self.api_key.clone()));
        if let Some(language) = &self.language {
            query.push(("language", language.clone()));
        }
        query.extend(params.iter().cloned());

        let response = self
            .http
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<TmdbErrorBody>()
                .await
                .ok()
                .and_then(|body| body.status_message);
            tracing::debug!(path = %path, status = status.as_u16(), message = ?message, "catalog request rejected");
            return Err(CatalogError::Remote {
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| CatalogError::Decode(e.to_string()))
    }

    async fn get_page(&self, path: &str, params: &[(&str, String)]) -> CatalogResult<Vec<Movie>> {
        let page: ResultsPage<Movie> = self.get_json(path, params).await?;
        Ok(page.results)
    }
}

#[async_trait]
impl Catalog for TmdbCatalog {
    async fn list_popular(&self, page: u32) -> CatalogResult<Vec<Movie>> {
        self.get_page("/movie/popular", &[("page", page.to_string())])
            .instrument(tracing::debug_span!("tmdb_list_popular", page = page))
            .await
    }

    async fn search(&self, term: &str, page: u32) -> CatalogResult<Vec<Movie>> {
        self.get_page(
            "/search/movie",
            &[("query", term.to_string()), ("page", page.to_string())],
        )
        .instrument(tracing::debug_span!("tmdb_search", term = %term, page = page))
        .await
    }

    async fn get_detail(&self, id: MovieId) -> CatalogResult<Movie> {
        self.get_json(&format!("/movie/{id}"), &[])
            .instrument(tracing::debug_span!("tmdb_get_detail", movie_id = %id))
            .await
    }

    async fn list_videos(&self, id: MovieId) -> CatalogResult<Vec<Trailer>> {
        let page: ResultsPage<Trailer> = self.get_json(&format!("/movie/{id}/videos"), &[]).await?;
        Ok(page.results)
    }
}
