//! iTunes Search API Data Transfer Objects
//!
//! These types match what the iTunes Search and Lookup endpoints return.
//! DO NOT use these types outside the itunes module - convert to domain types.
//!
//! API Reference: https://performance-partners.apple.com/search-api

use serde::{Deserialize, Serialize};

/// Response from `/search` and `/lookup` (same envelope)
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub result_count: u32,
    #[serde(default)]
    pub results: Vec<TrackResult>,
}

/// A single result. Lookups by collection ID also return the collection
/// itself, so every field is optional.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackResult {
    /// "track", "collection", ...
    pub wrapper_type: Option<String>,
    /// "song", "music-video", ...
    pub kind: Option<String>,
    pub track_id: Option<u64>,
    pub track_name: Option<String>,
    pub artist_name: Option<String>,
    pub collection_name: Option<String>,
    pub track_view_url: Option<String>,
    pub track_time_millis: Option<u64>,
    pub track_number: Option<u32>,
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
            "resultCount": 1,
            "results": [{
                "wrapperType": "track",
                "kind": "song",
                "artistId": 471744,
                "collectionId": 1122782080,
                "trackId": 1122782283,
                "artistName": "Coldplay",
                "collectionName": "Parachutes",
                "trackName": "Yellow",
                "trackViewUrl": "https://music.apple.com/us/album/yellow/1122782080?i=1122782283&uo=4",
                "trackTimeMillis": 266773,
                "trackNumber": 5,
                "country": "USA"
            }]
        }"#;

        let response: SearchResponse =
            serde_json::from_str(json).expect("Should parse search response");
        assert_eq!(response.result_count, 1);

        let track = &response.results[0];
        assert_eq!(track.track_name.as_deref(), Some("Yellow"));
        assert_eq!(track.artist_name.as_deref(), Some("Coldplay"));
        assert_eq!(track.collection_name.as_deref(), Some("Parachutes"));
        assert_eq!(track.track_time_millis, Some(266773));
        assert_eq!(track.track_number, Some(5));
        assert_eq!(track.track_id, Some(1122782283));
    }

    #[test]
    fn test_parse_empty_response() {
        let json = r#"{"resultCount": 0, "results": []}"#;
        let response: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.result_count, 0);
        assert!(response.results.is_empty());
    }

    #[test]
    fn test_parse_collection_result() {
        let json = r#"{
            "resultCount": 1,
            "results": [{"wrapperType": "collection", "collectionName": "Parachutes"}]
        }"#;
        let response: SearchResponse = serde_json::from_str(json).unwrap();
        assert!(response.results[0].track_name.is_none());
    }
}
