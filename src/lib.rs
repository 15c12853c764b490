//! Music Redirect - translate track links between streaming platforms.
//!
//! Given a Spotify, Apple Music or YouTube track link, finds the same
//! recording on the listener's preferred platform by searching every
//! catalog and matching on title, artist, album, duration and track number.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod links;
pub mod matching;
pub mod redirect;
#[cfg(test)]
pub mod test_utils;

pub use error::{Error, Result};
