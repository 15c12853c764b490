//! The catalog search capability consumed by the matching engine.
//!
//! [`CatalogSearchProvider`] enables dependency injection and mocking for tests.
//! Production code uses the real client implementations, while tests
//! substitute the mocks in [`mocks`].
//!
//! Providers never report failure to the caller: network errors, missing
//! credentials and malformed responses all collapse to "no results" here,
//! at the trait boundary, after being logged.
//!
//! # Example
//!
//! ```ignore
//! use music_redirect::catalog::CatalogSearchProvider;
//!
//! async fn first_hit(provider: &dyn CatalogSearchProvider) -> Option<String> {
//!     let results = provider.search("Yellow", "Coldplay").await;
//!     results.into_iter().next().map(|t| t.url)
//! }
//! ```

use async_trait::async_trait;

use super::domain::{CatalogError, CatalogTrack};

/// A streaming catalog that can be searched for tracks.
///
/// Implement this trait to add a new catalog or to mock one in tests.
#[async_trait]
pub trait CatalogSearchProvider: Send + Sync {
    /// Stable provider identifier (e.g. `"spotify"`), used as the key in results.
    fn id(&self) -> &str;

    /// Search the catalog by title and artist.
    ///
    /// Returns an empty list on any failure. Every returned track carries a
    /// non-empty canonical URL.
    async fn search(&self, title: &str, artist: &str) -> Vec<CatalogTrack>;

    /// Look up a single track by its catalog-specific ID.
    ///
    /// Returns `None` on any failure.
    async fn fetch_by_id(&self, id: &str) -> Option<CatalogTrack>;
}

/// Collapse a search result to a plain list, logging the error if there was one.
pub(crate) fn results_or_empty(
    provider: &str,
    result: Result<Vec<CatalogTrack>, CatalogError>,
) -> Vec<CatalogTrack> {
    match result {
        Ok(tracks) => tracks,
        Err(CatalogError::MissingCredentials(_)) => {
            tracing::debug!(provider, "Search skipped: no credentials configured");
            Vec::new()
        }
        Err(e) => {
            tracing::warn!(provider, "Search failed: {}", e);
            Vec::new()
        }
    }
}

/// Collapse a lookup result to an `Option`, logging the error if there was one.
pub(crate) fn track_or_none(
    provider: &str,
    id: &str,
    result: Result<CatalogTrack, CatalogError>,
) -> Option<CatalogTrack> {
    match result {
        Ok(track) => Some(track),
        Err(e) => {
            tracing::warn!(provider, id, "Lookup failed: {}", e);
            None
        }
    }
}

// Implement the trait for real clients

#[async_trait]
impl CatalogSearchProvider for super::spotify::SpotifyClient {
    fn id(&self) -> &str {
        super::spotify::PROVIDER_ID
    }

    async fn search(&self, title: &str, artist: &str) -> Vec<CatalogTrack> {
        results_or_empty(self.id(), self.search_tracks(title, artist).await)
    }

    async fn fetch_by_id(&self, id: &str) -> Option<CatalogTrack> {
        track_or_none(self.id(), id, self.get_track(id).await)
    }
}

#[async_trait]
impl CatalogSearchProvider for super::itunes::ItunesClient {
    fn id(&self) -> &str {
        super::itunes::PROVIDER_ID
    }

    async fn search(&self, title: &str, artist: &str) -> Vec<CatalogTrack> {
        results_or_empty(self.id(), self.search_tracks(title, artist).await)
    }

    async fn fetch_by_id(&self, id: &str) -> Option<CatalogTrack> {
        track_or_none(self.id(), id, self.lookup_track(id).await)
    }
}

#[async_trait]
impl CatalogSearchProvider for super::youtube::YouTubeClient {
    fn id(&self) -> &str {
        super::youtube::PROVIDER_ID
    }

    async fn search(&self, title: &str, artist: &str) -> Vec<CatalogTrack> {
        results_or_empty(self.id(), self.search_videos(title, artist).await)
    }

    async fn fetch_by_id(&self, id: &str) -> Option<CatalogTrack> {
        track_or_none(self.id(), id, self.get_video(id).await)
    }
}
