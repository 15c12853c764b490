//! YouTube Data API v3 Data Transfer Objects
//!
//! These types match what `search.list` and `videos.list` return.
//! DO NOT use these types outside the youtube module - convert to domain types.
//!
//! API Reference: https://developers.google.com/youtube/v3/docs

use serde::{Deserialize, Serialize};

/// Response from `search.list`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

/// One search hit; `id.videoId` is absent for channels and playlists
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchItem {
    pub id: SearchItemId,
    pub snippet: Option<Snippet>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchItemId {
    pub kind: Option<String>,
    pub video_id: Option<String>,
}

/// Response from `videos.list`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<Video>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Video {
    pub id: String,
    pub snippet: Option<Snippet>,
}

/// Snippet shared by search results and videos
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub channel_title: String,
    pub published_at: Option<String>,
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
            "kind": "youtube#searchListResponse",
            "items": [
                {
                    "kind": "youtube#searchResult",
                    "id": {"kind": "youtube#video", "videoId": "yKNxeF4KMsY"},
                    "snippet": {
                        "publishedAt": "2009-05-31T00:00:00Z",
                        "channelId": "UCDPM_n1atn2ijUwHd0NNRQw",
                        "title": "Coldplay - Yellow (Official Video)",
                        "channelTitle": "Coldplay"
                    }
                },
                {
                    "kind": "youtube#searchResult",
                    "id": {"kind": "youtube#channel", "channelId": "UCDPM_n1atn2ijUwHd0NNRQw"}
                }
            ]
        }"#;

        let response: SearchResponse =
            serde_json::from_str(json).expect("Should parse search response");
        assert_eq!(response.items.len(), 2);

        let video = &response.items[0];
        assert_eq!(video.id.video_id.as_deref(), Some("yKNxeF4KMsY"));
        let snippet = video.snippet.as_ref().unwrap();
        assert_eq!(snippet.title, "Coldplay - Yellow (Official Video)");
        assert_eq!(snippet.channel_title, "Coldplay");

        assert!(response.items[1].id.video_id.is_none());
    }

    #[test]
    fn test_parse_video_list_response() {
        let json = r#"{
            "items": [{
                "id": "yKNxeF4KMsY",
                "snippet": {"title": "Coldplay - Yellow", "channelTitle": "Coldplay"}
            }]
        }"#;
        let response: VideoListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.items[0].id, "yKNxeF4KMsY");
    }

    #[test]
    fn test_parse_empty_response() {
        let response: SearchResponse = serde_json::from_str(r#"{"items": []}"#).unwrap();
        assert!(response.items.is_empty());
    }
}
