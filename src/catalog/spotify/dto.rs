//! Spotify Web API Data Transfer Objects
//!
//! These types match what the Spotify Web API returns for the endpoints we use.
//! DO NOT use these types outside the spotify module - convert to domain types.
//!
//! API Reference: https://developer.spotify.com/documentation/web-api

use serde::{Deserialize, Serialize};

/// Client-credentials token response from accounts.spotify.com
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: Option<String>,
    /// Lifetime in seconds
    pub expires_in: Option<u64>,
}

/// Response from `GET /v1/search?type=track`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchResponse {
    pub tracks: Option<TrackPage>,
}

/// Paged list of tracks
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrackPage {
    #[serde(default)]
    pub items: Vec<Track>,
    pub total: Option<u32>,
}

/// Full track object (also the response of `GET /v1/tracks/{id}`)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Track {
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub artists: Vec<Artist>,
    pub album: Option<Album>,
    pub duration_ms: Option<u64>,
    pub track_number: Option<u32>,
    pub external_urls: Option<ExternalUrls>,
}

/// Simplified artist object
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Artist {
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
}

/// Simplified album object
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Album {
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    pub album_type: Option<String>,
}

/// External URLs keyed by service
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExternalUrls {
    pub spotify: Option<String>,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// If these fail, the API has changed and we need to update our DTOs.
// ============================================================================

#[cfg(test)]
mod contract_tests {
    use super::*;

    #[test]
    fn test_parse_search_response() {
        let json = r#"{
            "tracks": {
                "href": "https://api.spotify.com/v1/search?query=yellow",
                "items": [{
                    "id": "3AJwUDP919kvQ9QcozQPxg",
                    "name": "Yellow",
                    "artists": [{"id": "4gzpq5DPGxSnKTe4SA8HAU", "name": "Coldplay", "type": "artist"}],
                    "album": {"id": "6ZG5lRT77aJ3btmArcykra", "name": "Parachutes", "album_type": "album"},
                    "duration_ms": 266773,
                    "track_number": 5,
                    "explicit": false,
                    "external_urls": {"spotify": "https://open.spotify.com/track/3AJwUDP919kvQ9QcozQPxg"}
                }],
                "limit": 5,
                "total": 1
            }
        }"#;

        let response: SearchResponse =
            serde_json::from_str(json).expect("Should parse search response");
        let page = response.tracks.expect("tracks page");
        assert_eq!(page.total, Some(1));
        assert_eq!(page.items.len(), 1);

        let track = &page.items[0];
        assert_eq!(track.name, "Yellow");
        assert_eq!(track.artists[0].name, "Coldplay");
        assert_eq!(track.album.as_ref().map(|a| a.name.as_str()), Some("Parachutes"));
        assert_eq!(track.duration_ms, Some(266773));
        assert_eq!(track.track_number, Some(5));
    }

    #[test]
    fn test_parse_empty_search_response() {
        let json = r#"{"tracks": {"items": [], "total": 0}}"#;
        let response: SearchResponse = serde_json::from_str(json).unwrap();
        assert!(response.tracks.unwrap().items.is_empty());
    }

    #[test]
    fn test_parse_token_response() {
        let json = r#"{"access_token": "abc", "token_type": "Bearer", "expires_in": 3600}"#;
        let token: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(token.access_token, "abc");
        assert_eq!(token.expires_in, Some(3600));
    }
}
