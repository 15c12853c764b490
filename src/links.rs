//! Streaming-service URL handling.
//!
//! Detects which platform a link belongs to, pulls the track ID out of it,
//! and builds canonical track URLs from IDs.
//!
//! Supported shapes:
//! - Spotify: `https://open.spotify.com/track/{id}`, `https://open.spotify.com/intl-de/track/{id}`
//! - Apple Music: `https://music.apple.com/us/album/{slug}/{album_id}?i={track_id}`
//! - YouTube: `https://www.youtube.com/watch?v={id}`, `https://youtu.be/{id}`

use std::fmt;
use std::str::FromStr;

use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Minimum length of a Spotify track ID inside a localized path
const MIN_SPOTIFY_ID_LEN: usize = 10;

/// A streaming platform we can link to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Spotify,
    Apple,
    YouTube,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Spotify, Platform::Apple, Platform::YouTube];

    /// Provider ID used as the key in resolution results
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Spotify => "spotify",
            Platform::Apple => "apple",
            Platform::YouTube => "youtube",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Spotify => "Spotify",
            Platform::Apple => "Apple Music",
            Platform::YouTube => "YouTube",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "spotify" => Ok(Platform::Spotify),
            "apple" | "itunes" | "apple_music" => Ok(Platform::Apple),
            "youtube" => Ok(Platform::YouTube),
            other => Err(Error::UnknownPlatform(other.to_string())),
        }
    }
}

/// Detect the platform from the URL's host
pub fn detect_platform(url: &str) -> Option<Platform> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?.to_lowercase();

    if host.contains("spotify") {
        Some(Platform::Spotify)
    } else if host.contains("music.apple.com") || host.contains("itunes.apple.com") {
        Some(Platform::Apple)
    } else if host.contains("youtube.com") || host.contains("youtu.be") {
        Some(Platform::YouTube)
    } else {
        None
    }
}

/// Extract the platform-specific track ID from a URL
pub fn extract_track_id(platform: Platform, url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let segments: Vec<&str> = parsed
        .path_segments()
        .map(|s| s.filter(|seg| !seg.is_empty()).collect())
        .unwrap_or_default();

    match platform {
        Platform::Spotify => spotify_track_id(&segments),
        Platform::Apple => query_param(&parsed, "i").or_else(|| {
            segments
                .last()
                .filter(|seg| seg.chars().all(|c| c.is_ascii_digit()))
                .map(|seg| seg.to_string())
        }),
        Platform::YouTube => {
            query_param(&parsed, "v").or_else(|| segments.last().map(|seg| seg.to_string()))
        }
    }
}

/// Build the canonical track URL for a platform and track ID
pub fn canonical_url(platform: Platform, track_id: &str) -> String {
    match platform {
        Platform::Spotify => format!("https://open.spotify.com/track/{}", track_id),
        Platform::Apple => format!("https://music.apple.com/us/album/{0}?i={0}", track_id),
        Platform::YouTube => format!("https://www.youtube.com/watch?v={}", track_id),
    }
}

fn spotify_track_id(segments: &[&str]) -> Option<String> {
    let pos = segments.iter().position(|seg| *seg == "track")?;
    let next = segments.get(pos + 1)?;

    if pos == 0 {
        return Some(next.to_string());
    }

    // Localized paths (/intl-xx/track/...) only count with a full-length ID
    let id: String = next.chars().take_while(|c| c.is_ascii_alphanumeric()).collect();
    (id.len() >= MIN_SPOTIFY_ID_LEN).then_some(id)
}

fn query_param(url: &Url, key: &str) -> Option<String> {
    url.query_pairs()
        .find(|(k, v)| k == key && !v.is_empty())
        .map(|(_, v)| v.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_platform() {
        assert_eq!(
            detect_platform("https://open.spotify.com/track/3AJwUDP919kvQ9QcozQPxg"),
            Some(Platform::Spotify)
        );
        assert_eq!(
            detect_platform("https://music.apple.com/us/album/yellow/1122782080?i=1122782283"),
            Some(Platform::Apple)
        );
        assert_eq!(
            detect_platform("https://itunes.apple.com/us/album/id1"),
            Some(Platform::Apple)
        );
        assert_eq!(
            detect_platform("https://www.YouTube.com/watch?v=yKNxeF4KMsY"),
            Some(Platform::YouTube)
        );
        assert_eq!(detect_platform("https://youtu.be/yKNxeF4KMsY"), Some(Platform::YouTube));
        assert_eq!(detect_platform("https://soundcloud.com/artist/track"), None);
        assert_eq!(detect_platform("not a url"), None);
    }

    #[test]
    fn test_spotify_track_id() {
        let id = extract_track_id(
            Platform::Spotify,
            "https://open.spotify.com/track/3AJwUDP919kvQ9QcozQPxg?si=abc",
        );
        assert_eq!(id.as_deref(), Some("3AJwUDP919kvQ9QcozQPxg"));

        let id = extract_track_id(
            Platform::Spotify,
            "https://open.spotify.com/intl-de/track/3AJwUDP919kvQ9QcozQPxg",
        );
        assert_eq!(id.as_deref(), Some("3AJwUDP919kvQ9QcozQPxg"));

        assert_eq!(
            extract_track_id(Platform::Spotify, "https://open.spotify.com/intl-de/track/short"),
            None
        );
        assert_eq!(
            extract_track_id(Platform::Spotify, "https://open.spotify.com/album/123"),
            None
        );
    }

    #[test]
    fn test_apple_track_id() {
        let id = extract_track_id(
            Platform::Apple,
            "https://music.apple.com/us/album/yellow/1122782080?i=1122782283",
        );
        assert_eq!(id.as_deref(), Some("1122782283"));

        let id = extract_track_id(Platform::Apple, "https://music.apple.com/us/song/yellow/1122782283");
        assert_eq!(id.as_deref(), Some("1122782283"));

        assert_eq!(
            extract_track_id(Platform::Apple, "https://music.apple.com/us/artist/coldplay"),
            None
        );
    }

    #[test]
    fn test_youtube_track_id() {
        let id = extract_track_id(Platform::YouTube, "https://www.youtube.com/watch?v=yKNxeF4KMsY&t=10");
        assert_eq!(id.as_deref(), Some("yKNxeF4KMsY"));

        let id = extract_track_id(Platform::YouTube, "https://youtu.be/yKNxeF4KMsY");
        assert_eq!(id.as_deref(), Some("yKNxeF4KMsY"));
    }

    #[test]
    fn test_canonical_urls() {
        assert_eq!(
            canonical_url(Platform::Spotify, "abc"),
            "https://open.spotify.com/track/abc"
        );
        assert_eq!(
            canonical_url(Platform::Apple, "123"),
            "https://music.apple.com/us/album/123?i=123"
        );
        assert_eq!(
            canonical_url(Platform::YouTube, "xyz"),
            "https://www.youtube.com/watch?v=xyz"
        );
    }

    #[test]
    fn test_platform_from_str() {
        assert_eq!("Spotify".parse::<Platform>().unwrap(), Platform::Spotify);
        assert_eq!("itunes".parse::<Platform>().unwrap(), Platform::Apple);
        assert_eq!(" youtube ".parse::<Platform>().unwrap(), Platform::YouTube);
        assert!(matches!(
            "tidal".parse::<Platform>(),
            Err(Error::UnknownPlatform(name)) if name == "tidal"
        ));
    }

    #[test]
    fn test_platform_ids_match_providers() {
        assert_eq!(Platform::Spotify.as_str(), crate::catalog::spotify::PROVIDER_ID);
        assert_eq!(Platform::Apple.as_str(), crate::catalog::itunes::PROVIDER_ID);
        assert_eq!(Platform::YouTube.as_str(), crate::catalog::youtube::PROVIDER_ID);
    }
}
