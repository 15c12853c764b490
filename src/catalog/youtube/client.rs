//! YouTube Data API HTTP client
//!
//! `search.list` with `type=video` and `videoCategoryId=10` (Music) finds
//! candidate videos; `videos.list` resolves a single video by ID.
//! Each search costs 100 quota units, so result limits stay small.

use std::time::Duration;

use super::{adapter, dto};
use crate::catalog::domain::{CatalogError, CatalogTrack};
use crate::catalog::{fetch_json, http_client};
use crate::config::ProvidersConfig;

/// YouTube "Music" video category
const MUSIC_CATEGORY_ID: &str = "10";

/// YouTube Data API client
pub struct YouTubeClient {
    api_key: Option<String>,
    http_client: reqwest::Client,
    base_url: String,
    max_results: u32,
}

impl YouTubeClient {
    /// Create a new client. Without an API key every request fails with
    /// [`CatalogError::MissingCredentials`].
    pub fn new(api_key: Option<&str>, settings: &ProvidersConfig) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.is_empty()).map(str::to_string),
            http_client: http_client(Duration::from_secs(settings.request_timeout_secs)),
            base_url: "https://www.googleapis.com/youtube/v3".to_string(),
            max_results: settings.result_limit,
        }
    }

    /// Create a client for testing with custom base URL
    #[cfg(test)]
    pub fn with_base_url(api_key: &str, base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::new(Some(api_key), &ProvidersConfig::default())
        }
    }

    /// Search music videos matching "title artist"
    pub async fn search_videos(
        &self,
        title: &str,
        artist: &str,
    ) -> Result<Vec<CatalogTrack>, CatalogError> {
        let api_key = self.api_key()?;
        let query = format!("{} {}", title, artist);
        let url = format!(
            "{}/search?part=snippet&type=video&videoCategoryId={}&maxResults={}&q={}&key={}",
            self.base_url,
            MUSIC_CATEGORY_ID,
            self.max_results,
            urlencoding::encode(query.trim()),
            urlencoding::encode(api_key)
        );
        tracing::debug!(provider = "youtube", query = %query.trim(), "Searching");

        let response: dto::SearchResponse = fetch_json(self.http_client.get(&url)).await?;
        Ok(adapter::to_tracks(response))
    }

    /// Look up a single video by ID
    pub async fn get_video(&self, video_id: &str) -> Result<CatalogTrack, CatalogError> {
        let api_key = self.api_key()?;
        let url = format!(
            "{}/videos?part=snippet&id={}&key={}",
            self.base_url,
            urlencoding::encode(video_id),
            urlencoding::encode(api_key)
        );

        let response: dto::VideoListResponse = fetch_json(self.http_client.get(&url)).await?;
        adapter::to_video_track(response).ok_or_else(|| CatalogError::NotFound(video_id.to_string()))
    }

    fn api_key(&self) -> Result<&str, CatalogError> {
        self.api_key
            .as_deref()
            .ok_or(CatalogError::MissingCredentials("youtube"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = YouTubeClient::new(Some("key"), &ProvidersConfig::default());
        assert_eq!(client.base_url, "https://www.googleapis.com/youtube/v3");
        assert_eq!(client.max_results, 5);
    }

    #[test]
    fn test_client_with_custom_url() {
        let client = YouTubeClient::with_base_url("key", "http://localhost:8080");
        assert_eq!(client.base_url, "http://localhost:8080");
        assert_eq!(client.api_key.as_deref(), Some("key"));
    }

    #[tokio::test]
    async fn test_empty_key_is_missing_credentials() {
        let client = YouTubeClient::new(Some(""), &ProvidersConfig::default());
        let result = client.search_videos("Yellow", "Coldplay").await;
        assert!(matches!(result, Err(CatalogError::MissingCredentials("youtube"))));
    }
}
