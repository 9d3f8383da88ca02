use std::time::Duration;

use async_trait::async_trait;
use mosaico_config::ConfigError;
use mosaico_core::domain::{Album, Period};
use mosaico_core::ports::{AlbumCatalog, CatalogError};
use reqwest::Url;

use crate::api::ApiErrorBody;
use crate::config::LastFmConfig;
use crate::mapping::{parse_search, parse_top_albums};

const USER_AGENT: &str = concat!("mosaico/", env!("CARGO_PKG_VERSION"));

/// `AlbumCatalog` backed by the Last.fm web API.
///
/// One GET per call. No retries, no caching, no pagination.
#[derive(Clone)]
pub struct LastFmClient {
  http: reqwest::Client,
  api_url: Url,
  api_key: String,
}

impl LastFmClient {
  pub fn new(config: &LastFmConfig) -> Result<Self, ConfigError> {
    let api_url = Url::parse(config.api_url.trim())
      .map_err(|e| ConfigError::Other(format!("invalid lastfm api_url {:?}: {e}", config.api_url)))?;

    let http = reqwest::Client::builder()
      .user_agent(USER_AGENT)
      .timeout(Duration::from_secs(config.timeout_secs))
      .build()
      .map_err(|e| ConfigError::Other(format!("http client: {e}")))?;

    Ok(Self { http, api_url, api_key: config.api_key.clone() })
  }

  pub fn api_url(&self) -> &Url {
    &self.api_url
  }

  /// Runs the GET and returns the body of a successful response.
  ///
  /// `failure` is the user-facing prefix for every fetch error.
  async fn get(&self, params: &[(&str, &str)], failure: &str) -> Result<String, CatalogError> {
    let method = params.iter().find(|(k, _)| *k == "method").map_or("?", |(_, v)| *v);
    tracing::debug!(url = %self.api_url, method, "querying Last.fm");

    let response = self
      .http
      .get(self.api_url.clone())
      .query(params)
      .query(&[("api_key", self.api_key.as_str()), ("format", "json")])
      .send()
      .await
      .map_err(|e| CatalogError::Fetch(format!("{failure}: {e}")))?;

    let status = response.status();
    let body = response.text().await.map_err(|e| CatalogError::Fetch(format!("{failure}: {e}")))?;

    // Application errors come as {"error": n, "message": "..."}, with or without a 4xx.
    if let Ok(api_error) = serde_json::from_str::<ApiErrorBody>(&body) {
      tracing::warn!(method, status = %status, code = api_error.error, message = %api_error.message, "Last.fm error");
      return Err(CatalogError::Fetch(format!("{failure}: {}", api_error.message)));
    }

    if !status.is_success() {
      tracing::warn!(method, status = %status, "Last.fm returned non-success status");
      return Err(CatalogError::Fetch(format!("{failure} (HTTP {status})")));
    }

    Ok(body)
  }
}

#[async_trait]
impl AlbumCatalog for LastFmClient {
  async fn search_albums(&self, query: &str) -> Result<Vec<Album>, CatalogError> {
    let body = self.get(&[("method", "album.search"), ("album", query)], "error searching albums").await?;
    let albums = parse_search(&body)?;

    tracing::info!(query, count = albums.len(), "album search finished");
    Ok(albums)
  }

  async fn user_top_albums(&self, username: &str, period: Period) -> Result<Vec<Album>, CatalogError> {
    let params = [("method", "user.gettopalbums"), ("user", username), ("period", period.as_str())];
    let body = self.get(&params, "error fetching user albums").await?;
    let albums = parse_top_albums(&body)?;

    tracing::info!(username, %period, count = albums.len(), "top albums fetched");
    Ok(albums)
  }
}
