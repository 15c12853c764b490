//! iTunes Search API integration (Apple Music catalog)
//!
//! No API key required.
//! API docs: https://performance-partners.apple.com/search-api

mod adapter;
mod client;
pub mod dto;

pub use adapter::{to_track, to_tracks};
pub use client::ItunesClient;

/// Provider ID used as the key in resolution results
pub const PROVIDER_ID: &str = "apple";
