//! Adapter layer: Convert YouTube DTOs to domain models
//!
//! Videos carry no album, duration or track number, so candidates from
//! YouTube are matched on title and channel name alone.

use super::dto;
use crate::catalog::domain::{CatalogTrack, TrackMetadata};
use crate::links::{Platform, canonical_url};

/// Convert search results to catalog tracks, skipping non-video hits
pub fn to_tracks(response: dto::SearchResponse) -> Vec<CatalogTrack> {
    response
        .items
        .into_iter()
        .filter_map(|item| {
            let video_id = item.id.video_id.filter(|id| !id.is_empty())?;
            Some(to_track(&video_id, item.snippet))
        })
        .collect()
}

/// Convert the first video of a `videos.list` response
pub fn to_video_track(response: dto::VideoListResponse) -> Option<CatalogTrack> {
    response
        .items
        .into_iter()
        .next()
        .map(|video| to_track(&video.id, video.snippet))
}

fn to_track(video_id: &str, snippet: Option<dto::Snippet>) -> CatalogTrack {
    let (title, artist) = snippet
        .map(|s| (s.title, s.channel_title))
        .unwrap_or_default();

    CatalogTrack::new(
        TrackMetadata::new(title, artist),
        canonical_url(Platform::YouTube, video_id),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video_item(video_id: Option<&str>, title: &str) -> dto::SearchItem {
        dto::SearchItem {
            id: dto::SearchItemId {
                kind: Some("youtube#video".to_string()),
                video_id: video_id.map(str::to_string),
            },
            snippet: Some(dto::Snippet {
                title: title.to_string(),
                channel_title: "Coldplay".to_string(),
                published_at: None,
            }),
        }
    }

    #[test]
    fn test_convert_search_results() {
        let response = dto::SearchResponse {
            items: vec![
                video_item(Some("yKNxeF4KMsY"), "Coldplay - Yellow"),
                video_item(None, "A channel"),
            ],
        };

        let tracks = to_tracks(response);
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].metadata.title, "Coldplay - Yellow");
        assert_eq!(tracks[0].metadata.artist, "Coldplay");
        assert!(tracks[0].metadata.album.is_none());
        assert!(tracks[0].metadata.duration_ms.is_none());
        assert_eq!(tracks[0].url, "https://www.youtube.com/watch?v=yKNxeF4KMsY");
    }

    #[test]
    fn test_convert_video_list() {
        let response = dto::VideoListResponse {
            items: vec![dto::Video {
                id: "abc".to_string(),
                snippet: None,
            }],
        };
        let track = to_video_track(response).unwrap();
        assert_eq!(track.url, "https://www.youtube.com/watch?v=abc");
        assert!(track.metadata.title.is_empty());

        assert!(to_video_track(dto::VideoListResponse { items: vec![] }).is_none());
    }
}
