//! YouTube Data API integration
//!
//! Optional: requires an API key. Searches are restricted to the Music
//! video category.
//! API docs: https://developers.google.com/youtube/v3

mod adapter;
mod client;
pub mod dto;

pub use adapter::{to_tracks, to_video_track};
pub use client::YouTubeClient;

/// Provider ID used as the key in resolution results
pub const PROVIDER_ID: &str = "youtube";
