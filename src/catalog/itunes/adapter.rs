//! Adapter layer: Convert iTunes DTOs to domain models
//!
//! This is the ONLY place where iTunes DTO types are converted to domain types.

use super::dto;
use crate::catalog::domain::{CatalogTrack, TrackMetadata};

/// Convert a search/lookup response to catalog tracks.
///
/// Results that aren't tracks or have no view URL are skipped.
pub fn to_tracks(response: dto::SearchResponse) -> Vec<CatalogTrack> {
    response.results.into_iter().filter_map(to_track).collect()
}

/// Convert a single result; `None` when it isn't a linkable track
pub fn to_track(result: dto::TrackResult) -> Option<CatalogTrack> {
    if result
        .wrapper_type
        .as_deref()
        .is_some_and(|w| w != "track")
    {
        return None;
    }

    let url = result.track_view_url.filter(|u| !u.is_empty())?;

    let metadata = TrackMetadata {
        title: result.track_name.unwrap_or_default(),
        artist: result.artist_name.unwrap_or_default(),
        album: result.collection_name,
        duration_ms: result.track_time_millis,
        track_number: result.track_number,
    };

    Some(CatalogTrack::new(metadata, url))
}
