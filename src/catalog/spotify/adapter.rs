//! Adapter layer: Convert Spotify DTOs to domain models
//!
//! This is the ONLY place where Spotify DTO types are converted to domain types.

use super::dto;
use crate::catalog::domain::{CatalogTrack, TrackMetadata};

/// Convert a search response to catalog tracks, skipping tracks without a URL
pub fn to_tracks(response: dto::SearchResponse) -> Vec<CatalogTrack> {
    response
        .tracks
        .map(|page| page.items)
        .unwrap_or_default()
        .into_iter()
        .filter_map(to_track)
        .collect()
}

/// Convert a single track object; `None` when it has no Spotify URL
pub fn to_track(track: dto::Track) -> Option<CatalogTrack> {
    let url = track
        .external_urls
        .and_then(|u| u.spotify)
        .filter(|u| !u.is_empty())?;

    // Only the primary artist takes part in matching
    let artist = track
        .artists
        .into_iter()
        .next()
        .map(|a| a.name)
        .unwrap_or_default();

    let metadata = TrackMetadata {
        title: track.name,
        artist,
        album: track.album.map(|a| a.name),
        duration_ms: track.duration_ms,
        track_number: track.track_number,
    };

    Some(CatalogTrack::new(metadata, url))
}
