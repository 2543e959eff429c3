//! Poster enrichment for movie cards.
//!
//! Posters come from TMDB's `/search/movie` endpoint, matched by title and
//! release year. Any failure (no API key, network error, no result, no
//! poster path) resolves to the configured placeholder image so listings
//! never fail because of posters.
//!
//! A listing spends at most [`PosterConfig::enrich_budget`] on lookups and
//! looks up at most [`PosterConfig::max_lookups`] rows; everything else gets
//! the placeholder.

use std::time::Duration;

use chrono::Datelike;
use cinedex_core::catalog::model::MovieSummary;
use futures::stream::{self, StreamExt};
use serde::Serialize;
use tracing::debug;

/// Poster lookups in flight at once per listing.
const LOOKUP_CONCURRENCY: usize = 8;

/// Per-request timeout for TMDB calls.
const LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

const DEFAULT_ENRICH_BUDGET_MS: u64 = 3_000;
const DEFAULT_MAX_LOOKUPS: usize = 40;

const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";
const DEFAULT_PLACEHOLDER_URL: &str = "/images/poster-placeholder.png";

/// Poster lookup configuration.
#[derive(Debug, Clone)]
pub struct PosterConfig {
    /// TMDB v3 API key. Lookups are skipped when unset.
    pub api_key: Option<String>,
    pub base_url: String,
    /// Prefix joined with TMDB's `poster_path`.
    pub image_base_url: String,
    pub placeholder_url: String,
    /// Wall-clock limit for all lookups of one listing. Must stay well under
    /// the request timeout.
    pub enrich_budget: Duration,
    /// Rows past this index always get the placeholder.
    pub max_lookups: usize,
}

impl PosterConfig {
    /// Load poster configuration from environment variables.
    ///
    /// | Env Var                  | Default                              |
    /// |--------------------------|--------------------------------------|
    /// | `TMDB_API_KEY`           | unset (posters disabled)             |
    /// | `TMDB_BASE_URL`          | `https://api.themoviedb.org/3`       |
    /// | `TMDB_IMAGE_BASE_URL`    | `https://image.tmdb.org/t/p/w500`    |
    /// | `POSTER_PLACEHOLDER_URL` | `/images/poster-placeholder.png`     |
    /// | `POSTER_BUDGET_MS`       | `3000`                               |
    /// | `POSTER_MAX_LOOKUPS`     | `40`                                 |
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("TMDB_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            base_url: std::env::var("TMDB_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.into()),
            image_base_url: std::env::var("TMDB_IMAGE_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_IMAGE_BASE_URL.into()),
            placeholder_url: std::env::var("POSTER_PLACEHOLDER_URL")
                .unwrap_or_else(|_| DEFAULT_PLACEHOLDER_URL.into()),
            enrich_budget: Duration::from_millis(
                std::env::var("POSTER_BUDGET_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_ENRICH_BUDGET_MS),
            ),
            max_lookups: std::env::var("POSTER_MAX_LOOKUPS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_LOOKUPS),
        }
    }

    /// Configuration with lookups disabled.
    pub fn disabled() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.into(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.into(),
            placeholder_url: DEFAULT_PLACEHOLDER_URL.into(),
            enrich_budget: Duration::from_millis(DEFAULT_ENRICH_BUDGET_MS),
            max_lookups: DEFAULT_MAX_LOOKUPS,
        }
    }
}

/// Why a poster could not be resolved. Never leaves this module's callers:
/// every variant is replaced by the placeholder.
#[derive(Debug, thiserror::Error)]
pub enum PosterError {
    #[error("poster lookups are disabled")]
    Disabled,
    #[error("network error: {0}")]
    Network(String),
    #[error("provider error: {0}")]
    Provider(String),
    #[error("no poster found")]
    NoPoster,
}

/// A movie listing row with its resolved poster.
#[derive(Debug, Clone, Serialize)]
pub struct MovieCard {
    #[serde(flatten)]
    pub movie: MovieSummary,
    pub poster_url: String,
}

pub struct PosterClient {
    config: PosterConfig,
    client: reqwest::Client,
}

impl PosterClient {
    pub fn new(config: PosterConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(LOOKUP_TIMEOUT)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Falling back to default HTTP client for posters");
                reqwest::Client::new()
            });
        Self { config, client }
    }

    pub fn placeholder(&self) -> &str {
        &self.config.placeholder_url
    }

    async fn get_json(
        &self,
        api_key: &str,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<serde_json::Value, PosterError> {
        let mut all_params = vec![("api_key", api_key)];
        all_params.extend_from_slice(params);

        let url = format!("{}{path}", self.config.base_url);
        debug!(url = %url, "TMDB request");

        let resp = self
            .client
            .get(&url)
            .query(&all_params)
            .send()
            .await
            .map_err(|e| PosterError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(PosterError::Provider(format!(
                "TMDB returned {}",
                resp.status()
            )));
        }

        resp.json()
            .await
            .map_err(|e| PosterError::Provider(format!("parse JSON: {e}")))
    }

    /// Poster URL of the first TMDB search hit for `title` in `year`.
    pub async fn lookup(&self, title: &str, year: Option<i32>) -> Result<String, PosterError> {
        let api_key = self.config.api_key.as_deref().ok_or(PosterError::Disabled)?;

        let mut params = vec![("query", title)];
        let year_str = year.map(|y| y.to_string());
        if let Some(ref y) = year_str {
            params.push(("year", y.as_str()));
        }

        let data = self.get_json(api_key, "/search/movie", &params).await?;
        let poster_path = data["results"]
            .as_array()
            .and_then(|results| results.first())
            .and_then(|first| first["poster_path"].as_str())
            .ok_or(PosterError::NoPoster)?;

        Ok(format!("{}{poster_path}", self.config.image_base_url))
    }

    /// Poster URL for a movie, or the placeholder.
    pub async fn poster_url(&self, movie: &MovieSummary) -> String {
        let year = movie.release_date.map(|d| d.year());
        match self.lookup(&movie.title, year).await {
            Ok(url) => url,
            Err(PosterError::Disabled) => self.config.placeholder_url.clone(),
            Err(err) => {
                debug!(movie_id = movie.id, error = %err, "Poster lookup failed");
                self.config.placeholder_url.clone()
            }
        }
    }

    /// Attach posters to a listing, preserving order.
    ///
    /// Lookups still pending when the budget runs out are dropped.
    pub async fn enrich(&self, movies: Vec<MovieSummary>) -> Vec<MovieCard> {
        let mut resolved: Vec<Option<String>> = vec![None; movies.len()];

        if self.config.api_key.is_some() {
            let movies = &movies;
            let lookups = stream::iter(0..movies.len().min(self.config.max_lookups))
                .map(move |index| async move { (index, self.poster_url(&movies[index]).await) })
                .buffer_unordered(LOOKUP_CONCURRENCY);

            let collect = lookups.for_each(|(index, url)| {
                resolved[index] = Some(url);
                std::future::ready(())
            });

            let timed_out = tokio::time::timeout(self.config.enrich_budget, collect)
                .await
                .is_err();
            if timed_out {
                debug!(
                    budget_ms = self.config.enrich_budget.as_millis() as u64,
                    resolved = resolved.iter().filter(|url| url.is_some()).count(),
                    "Poster budget exhausted, using placeholders for the rest"
                );
            }
        }

        movies
            .into_iter()
            .zip(resolved)
            .map(|(movie, url)| MovieCard {
                movie,
                poster_url: url.unwrap_or_else(|| self.config.placeholder_url.clone()),
            })
            .collect()
    }
}
