//! Tunable thresholds for the matching engine.
//!
//! The defaults were chosen empirically against real catalog responses.
//! They are kept exactly as-is and exposed through the `[matching]` section
//! of the config file.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for classification, ranking and provider fan-out
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Candidates with fewer tokens than this never score above 0.0
    pub min_candidate_tokens: usize,

    /// Exact-match similarity threshold
    pub exact_threshold: f64,

    /// Exact-match similarity threshold when track numbers agree
    pub exact_threshold_track_match: f64,

    /// Alternative-match similarity threshold (title + artist only)
    pub alternative_threshold: f64,

    /// Exact-match duration tolerance
    pub exact_duration_tolerance_ms: u64,

    /// Exact-match duration tolerance when track numbers agree
    pub exact_duration_tolerance_track_match_ms: u64,

    /// Alternative-match duration tolerance
    pub alternative_duration_tolerance_ms: u64,

    /// Ranking penalty for candidates without album data
    pub missing_album_penalty: f64,

    /// Ranking penalty for live/remix/cover versions the source isn't
    pub version_penalty: f64,

    /// Title substrings that mark a non-original version
    pub version_keywords: Vec<String>,

    /// Upper bound on a single provider search
    pub provider_timeout_ms: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            min_candidate_tokens: 2,
            exact_threshold: 0.75,
            exact_threshold_track_match: 0.4,
            alternative_threshold: 0.5,
            exact_duration_tolerance_ms: 1000,
            exact_duration_tolerance_track_match_ms: 5000,
            alternative_duration_tolerance_ms: 10_000,
            missing_album_penalty: 0.05,
            version_penalty: 0.1,
            version_keywords: ["live", "remix", "cover", "acoustic", "demo"]
                .into_iter()
                .map(String::from)
                .collect(),
            provider_timeout_ms: 10_000,
        }
    }
}

impl MatchConfig {
    /// Exact-match similarity threshold for the given track-number outcome
    pub fn exact_threshold_for(&self, track_number_match: bool) -> f64 {
        if track_number_match {
            self.exact_threshold_track_match
        } else {
            self.exact_threshold
        }
    }

    /// Exact-match duration tolerance for the given track-number outcome
    pub fn exact_duration_tolerance_for(&self, track_number_match: bool) -> u64 {
        if track_number_match {
            self.exact_duration_tolerance_track_match_ms
        } else {
            self.exact_duration_tolerance_ms
        }
    }

    pub fn provider_timeout(&self) -> Duration {
        Duration::from_millis(self.provider_timeout_ms)
    }
}
