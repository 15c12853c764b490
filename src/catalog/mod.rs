//! Catalog integrations - search streaming services for tracks.
//!
//! # Architecture
//!
//! This module follows a clean separation between:
//! - **Domain models** (`domain.rs`) - Internal types the matching engine works with
//! - **API DTOs** (`spotify/dto.rs`, `itunes/dto.rs`, `youtube/dto.rs`) - Exact API response shapes
//! - **Adapters** - Convert DTOs to domain models
//! - **Clients** - HTTP clients for external APIs
//! - **Traits** (`traits.rs`) - The [`CatalogSearchProvider`] capability the matcher consumes
//!
//! # Usage
//!
//! ```ignore
//! use music_redirect::{catalog, config};
//!
//! let config = config::load();
//! for provider in catalog::build_providers(&config) {
//!     let results = provider.search("Yellow", "Coldplay").await;
//!     println!("{}: {} results", provider.id(), results.len());
//! }
//! ```

pub mod domain;
pub mod itunes;
pub mod spotify;
pub mod traits;
pub mod youtube;

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::config::Config;

pub use domain::{CatalogError, CatalogTrack, TrackMetadata};
pub use itunes::ItunesClient;
pub use spotify::SpotifyClient;
pub use traits::CatalogSearchProvider;
pub use youtube::YouTubeClient;

/// User agent sent with every catalog request
pub(crate) const USER_AGENT: &str = concat!(
    env!("CARGO_PKG_NAME"),
    "/",
    env!("CARGO_PKG_VERSION")
);

/// Build the shared HTTP client configuration used by all catalog clients
pub(crate) fn http_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .gzip(true)
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
        .unwrap_or_else(|e| {
            tracing::warn!("Failed to build configured HTTP client ({}), using defaults", e);
            reqwest::Client::new()
        })
}

/// Send a request and decode a JSON body, mapping HTTP failures to [`CatalogError`]
pub(crate) async fn fetch_json<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, CatalogError> {
    let response = request
        .send()
        .await
        .map_err(|e| CatalogError::Network(e.to_string()))?;

    let status = response.status();

    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(CatalogError::NotFound(response.url().path().to_string()));
    }

    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(CatalogError::RateLimited);
    }

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(CatalogError::Api(format!(
            "HTTP {}: {} - {}",
            status,
            status.canonical_reason().unwrap_or("Unknown"),
            body.chars().take(200).collect::<String>()
        )));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| CatalogError::Parse(e.to_string()))
}

/// Build one provider per supported catalog from the configuration.
///
/// Providers without credentials are still returned; they simply yield no results.
pub fn build_providers(config: &Config) -> Vec<Arc<dyn CatalogSearchProvider>> {
    let settings = &config.providers;
    let credentials = &config.credentials;

    vec![
        Arc::new(SpotifyClient::new(credentials.spotify(), settings)),
        Arc::new(ItunesClient::new(settings)),
        Arc::new(YouTubeClient::new(
            credentials.youtube_api_key.as_deref(),
            settings,
        )),
    ]
}
