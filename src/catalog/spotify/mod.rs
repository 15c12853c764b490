//! Spotify Web API integration
//!
//! Searches the Spotify catalog and looks up tracks by ID. Requires a
//! client ID and secret for the client-credentials flow.
//! API docs: https://developer.spotify.com/documentation/web-api

mod adapter;
mod client;
pub mod dto;

pub use adapter::{to_track, to_tracks};
pub use client::SpotifyClient;

/// Provider ID used as the key in resolution results
pub const PROVIDER_ID: &str = "spotify";
