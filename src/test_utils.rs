//! Test utilities and fixtures for music-redirect tests.
//!
//! # Example
//!
//! ```ignore
//! use crate::test_utils::{candidate, yellow_source};
//!
//! let source = yellow_source();
//! let found = candidate(TrackMetadata::new("Yellow", "Coldplay"));
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::catalog::{CatalogTrack, TrackMetadata};

/// "Yellow" by Coldplay as Spotify reports it: album, duration and track number known.
pub fn yellow_source() -> TrackMetadata {
    TrackMetadata::new("Yellow", "Coldplay")
        .with_album("Parachutes")
        .with_duration_ms(266_773)
        .with_track_number(1)
}

/// Wrap metadata as a search result with a unique URL.
pub fn candidate(metadata: TrackMetadata) -> CatalogTrack {
    static NEXT_ID: AtomicUsize = AtomicUsize::new(1);
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    CatalogTrack::new(metadata, format!("https://catalog.example/track/{}", id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_urls_are_unique() {
        let a = candidate(yellow_source());
        let b = candidate(yellow_source());
        assert_ne!(a.url, b.url);
        assert_eq!(a.metadata, b.metadata);
    }
}
