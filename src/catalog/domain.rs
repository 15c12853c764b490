//! Internal domain models for catalog search results.
//!
//! These types are OUR types - they don't change when external APIs change.
//! All external API responses get converted into these types via adapters.

use serde::{Deserialize, Serialize};

/// Track metadata, either for the source track or a search-result candidate
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackMetadata {
    /// Track title
    pub title: String,
    /// Primary artist name
    pub artist: String,
    /// Album title
    pub album: Option<String>,
    /// Track duration in milliseconds
    pub duration_ms: Option<u64>,
    /// Track number on album (1-based)
    pub track_number: Option<u32>,
}

impl TrackMetadata {
    /// Create metadata with just a title and artist
    pub fn new(title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            ..Default::default()
        }
    }

    pub fn with_album(mut self, album: impl Into<String>) -> Self {
        self.album = Some(album.into());
        self
    }

    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    pub fn with_track_number(mut self, track_number: u32) -> Self {
        self.track_number = Some(track_number);
        self
    }

    /// Album title, or "" when absent
    pub fn album_str(&self) -> &str {
        self.album.as_deref().unwrap_or("")
    }

    /// Duration, treating 0 as unknown (catalogs report 0 for missing lengths)
    pub fn known_duration_ms(&self) -> Option<u64> {
        self.duration_ms.filter(|&d| d > 0)
    }

    /// Track number, treating 0 as unknown
    pub fn known_track_number(&self) -> Option<u32> {
        self.track_number.filter(|&n| n > 0)
    }

    /// Title and artist are both present (non-blank)
    pub fn is_searchable(&self) -> bool {
        !self.title.trim().is_empty() && !self.artist.trim().is_empty()
    }
}

/// A raw track record returned by a catalog search or lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogTrack {
    /// The track's metadata as the catalog reports it
    pub metadata: TrackMetadata,
    /// Canonical URL of the track on that catalog
    pub url: String,
}

impl CatalogTrack {
    pub fn new(metadata: TrackMetadata, url: impl Into<String>) -> Self {
        Self {
            metadata,
            url: url.into(),
        }
    }
}

/// Errors that can occur while talking to a catalog API
#[derive(Debug, Clone, thiserror::Error)]
pub enum CatalogError {
    #[error("API request failed: {0}")]
    Api(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Rate limited - try again later")]
    RateLimited,

    #[error("Missing credentials for {0}")]
    MissingCredentials(&'static str),

    #[error("Track not found: {0}")]
    NotFound(String),
}
