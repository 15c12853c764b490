//! iTunes Search API HTTP client
//!
//! The search endpoint is a plain GET with `term`, `media`, `entity`,
//! `limit` and `country` parameters; `/lookup?id=` resolves a single track.
//! Apple asks clients to keep result limits small.

use std::time::Duration;

use super::{adapter, dto};
use crate::catalog::domain::{CatalogError, CatalogTrack};
use crate::catalog::{fetch_json, http_client};
use crate::config::ProvidersConfig;

/// iTunes Search API client
pub struct ItunesClient {
    http_client: reqwest::Client,
    base_url: String,
    limit: u32,
    country: String,
}

impl ItunesClient {
    /// Create a new client
    pub fn new(settings: &ProvidersConfig) -> Self {
        Self {
            http_client: http_client(Duration::from_secs(settings.request_timeout_secs)),
            base_url: "https://itunes.apple.com".to_string(),
            limit: settings.result_limit,
            country: settings.itunes_country.clone(),
        }
    }

    /// Create a client for testing with custom base URL
    #[cfg(test)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::new(&ProvidersConfig::default())
        }
    }

    /// Search for songs matching "title artist"
    pub async fn search_tracks(
        &self,
        title: &str,
        artist: &str,
    ) -> Result<Vec<CatalogTrack>, CatalogError> {
        let term = format!("{} {}", title, artist);
        let url = format!(
            "{}/search?term={}&media=music&entity=musicTrack&limit={}&country={}",
            self.base_url,
            urlencoding::encode(term.trim()),
            self.limit,
            urlencoding::encode(&self.country)
        );
        tracing::debug!(provider = "apple", term = %term.trim(), "Searching");

        let response: dto::SearchResponse = fetch_json(self.http_client.get(&url)).await?;
        Ok(adapter::to_tracks(response))
    }

    /// Look up a single track by iTunes track ID
    pub async fn lookup_track(&self, track_id: &str) -> Result<CatalogTrack, CatalogError> {
        let url = format!(
            "{}/lookup?id={}",
            self.base_url,
            urlencoding::encode(track_id)
        );

        let response: dto::SearchResponse = fetch_json(self.http_client.get(&url)).await?;
        adapter::to_tracks(response)
            .into_iter()
            .next()
            .ok_or_else(|| CatalogError::NotFound(track_id.to_string()))
    }
}
