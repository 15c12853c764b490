//! Match results produced by the classifier and consumed by the ranker.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::catalog::TrackMetadata;

/// Flags and penalties recorded while classifying a candidate
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MatchFlags {
    /// Candidate album equals the source album (case-insensitive, both non-empty)
    pub album_match: bool,
    /// Both tracks report the same track number
    pub track_number_match: bool,
    /// Applied when the candidate has no album
    pub missing_album_penalty: f64,
    /// Applied to live/remix/cover versions of a non-version source
    pub version_penalty: f64,
}

/// A candidate that matched the source, either exactly or as an alternative
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchCandidate {
    pub metadata: TrackMetadata,
    pub canonical_url: String,
    /// Subset similarity in [0, 1]
    pub similarity: f64,
    /// `None` when either side has no duration
    pub duration_diff_ms: Option<u64>,
    pub flags: MatchFlags,
}

impl MatchCandidate {
    /// Sum of all ranking penalties
    pub fn total_penalty(&self) -> f64 {
        self.flags.version_penalty + self.flags.missing_album_penalty
    }

    /// Duration difference for ranking, unknown counts as a perfect match
    pub fn duration_diff_or_zero(&self) -> u64 {
        self.duration_diff_ms.unwrap_or(0)
    }
}

/// Outcome of classifying one candidate against the source
#[derive(Debug, Clone, PartialEq)]
pub enum Classification {
    /// Same recording; eligible to become the canonical link
    Exact(MatchCandidate),
    /// Plausibly related; offered as a suggestion only
    Alternative(MatchCandidate),
    Rejected,
}

impl Classification {
    pub fn label(&self) -> &'static str {
        match self {
            Classification::Exact(_) => "exact",
            Classification::Alternative(_) => "alternative",
            Classification::Rejected => "rejected",
        }
    }
}

/// Ranked matches from a single provider
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderResult {
    pub provider_id: String,
    pub best_exact: Option<MatchCandidate>,
    /// Similarity-descending
    pub alternatives: Vec<MatchCandidate>,
}

/// Combined outcome of resolving a source track across providers
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Resolution {
    /// Provider ID → canonical URL of the best exact match
    pub links: BTreeMap<String, String>,
    /// Provider ID → ranked alternative matches (never empty)
    pub alternatives: BTreeMap<String, Vec<MatchCandidate>>,
}

impl Resolution {
    pub fn is_empty(&self) -> bool {
        self.links.is_empty() && self.alternatives.is_empty()
    }
}

impl FromIterator<ProviderResult> for Resolution {
    fn from_iter<I: IntoIterator<Item = ProviderResult>>(iter: I) -> Self {
        let mut links = BTreeMap::new();
        let mut alternatives = BTreeMap::new();

        for result in iter {
            if let Some(best) = result.best_exact {
                links.insert(result.provider_id.clone(), best.canonical_url);
            }
            if !result.alternatives.is_empty() {
                alternatives.insert(result.provider_id, result.alternatives);
            }
        }

        Self {
            links,
            alternatives,
        }
    }
}
