//! Candidate classification: exact match, alternative, or no match.
//!
//! Two similarity scores are computed per candidate:
//! - **exact**: title + artist + album tokens
//! - **alternative**: title + artist tokens only
//!
//! A matching track number is strong evidence of the same recording, so it
//! lowers the exact similarity threshold and widens the duration tolerance.
//! Unknown durations never disqualify a candidate.

use super::domain::{Classification, MatchCandidate, MatchFlags};
use super::similarity::subset_similarity;
use super::thresholds::MatchConfig;
use super::tokenize::{TokenSet, token_set};
use crate::catalog::{CatalogTrack, TrackMetadata};

/// Source track metadata with its token sets, computed once per request
#[derive(Debug, Clone)]
pub struct SourceProfile {
    pub metadata: TrackMetadata,
    /// Title + artist + album
    pub exact_tokens: TokenSet,
    /// Title + artist
    pub alt_tokens: TokenSet,
}

impl SourceProfile {
    pub fn new(metadata: TrackMetadata) -> Self {
        let exact_tokens = token_set(&metadata.title, &metadata.artist, metadata.album_str());
        let alt_tokens = token_set(&metadata.title, &metadata.artist, "");
        Self {
            metadata,
            exact_tokens,
            alt_tokens,
        }
    }
}

/// Classify one candidate against the source.
///
/// An exact match is never also reported as an alternative.
pub fn classify(
    source: &SourceProfile,
    candidate: &CatalogTrack,
    config: &MatchConfig,
) -> Classification {
    let meta = &candidate.metadata;

    let candidate_exact_tokens = token_set(&meta.title, &meta.artist, meta.album_str());
    let candidate_alt_tokens = token_set(&meta.title, &meta.artist, "");

    let exact_similarity = subset_similarity(
        &source.exact_tokens,
        &candidate_exact_tokens,
        config.min_candidate_tokens,
    );
    let alt_similarity = subset_similarity(
        &source.alt_tokens,
        &candidate_alt_tokens,
        config.min_candidate_tokens,
    );

    let track_number_match = match (
        source.metadata.known_track_number(),
        meta.known_track_number(),
    ) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    };

    let duration_diff_ms = match (source.metadata.known_duration_ms(), meta.known_duration_ms()) {
        (Some(a), Some(b)) => Some(a.abs_diff(b)),
        _ => None,
    };

    let exact_tolerance = config.exact_duration_tolerance_for(track_number_match);
    let exact_duration_ok = duration_diff_ms.is_none_or(|diff| diff <= exact_tolerance);
    let alt_duration_ok =
        duration_diff_ms.is_none_or(|diff| diff <= config.alternative_duration_tolerance_ms);
    let exact_threshold = config.exact_threshold_for(track_number_match);

    tracing::debug!(
        title = %meta.title,
        artist = %meta.artist,
        album = %meta.album_str(),
        exact_similarity,
        alt_similarity,
        track_number_match,
        exact_threshold,
        duration_diff_ms = ?duration_diff_ms,
        exact_tolerance,
        exact_duration_ok,
        alt_duration_ok,
        "Scored candidate"
    );

    let missing_album_penalty = if is_blank(meta.album.as_deref()) {
        config.missing_album_penalty
    } else {
        0.0
    };

    if exact_similarity >= exact_threshold && exact_duration_ok {
        let album_match = match (source.metadata.album.as_deref(), meta.album.as_deref()) {
            (Some(a), Some(b)) if !is_blank(Some(a)) && !is_blank(Some(b)) => {
                a.to_lowercase() == b.to_lowercase()
            }
            _ => false,
        };

        return Classification::Exact(MatchCandidate {
            metadata: meta.clone(),
            canonical_url: candidate.url.clone(),
            similarity: exact_similarity,
            duration_diff_ms,
            flags: MatchFlags {
                album_match,
                track_number_match,
                missing_album_penalty,
                version_penalty: 0.0,
            },
        });
    }

    if alt_similarity >= config.alternative_threshold && alt_duration_ok {
        let is_unexpected_version = has_version_keyword(&meta.title, &config.version_keywords)
            && !has_version_keyword(&source.metadata.title, &config.version_keywords);
        let version_penalty = if is_unexpected_version {
            config.version_penalty
        } else {
            0.0
        };

        return Classification::Alternative(MatchCandidate {
            metadata: meta.clone(),
            canonical_url: candidate.url.clone(),
            similarity: alt_similarity,
            duration_diff_ms,
            flags: MatchFlags {
                album_match: false,
                track_number_match,
                missing_album_penalty,
                version_penalty,
            },
        });
    }

    Classification::Rejected
}

/// Case-insensitive substring check against the version keywords
fn has_version_keyword(title: &str, keywords: &[String]) -> bool {
    let title = title.to_lowercase();
    keywords
        .iter()
        .any(|keyword| title.contains(&keyword.to_lowercase()))
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}
