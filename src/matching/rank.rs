//! Ranking of classified candidates within a single provider.

use std::cmp::Ordering;

use super::domain::MatchCandidate;

/// Compare two exact matches; `Greater` means `a` is the better link.
///
/// Key, most significant first: similarity, album match, track-number
/// match, lower missing-album penalty, smaller duration difference.
pub fn compare_exact(a: &MatchCandidate, b: &MatchCandidate) -> Ordering {
    a.similarity
        .total_cmp(&b.similarity)
        .then(a.flags.album_match.cmp(&b.flags.album_match))
        .then(a.flags.track_number_match.cmp(&b.flags.track_number_match))
        .then(
            b.flags
                .missing_album_penalty
                .total_cmp(&a.flags.missing_album_penalty),
        )
        .then(b.duration_diff_or_zero().cmp(&a.duration_diff_or_zero()))
}

/// Pick the best exact match. Ties keep the earliest candidate.
pub fn select_best_exact(candidates: Vec<MatchCandidate>) -> Option<MatchCandidate> {
    candidates.into_iter().reduce(|best, next| {
        if compare_exact(&next, &best) == Ordering::Greater {
            next
        } else {
            best
        }
    })
}

/// Order alternatives by similarity, then penalties, then duration difference.
///
/// The sort is stable, so equal candidates keep provider order.
pub fn rank_alternatives(mut candidates: Vec<MatchCandidate>) -> Vec<MatchCandidate> {
    candidates.sort_by(|a, b| {
        b.similarity
            .total_cmp(&a.similarity)
            .then(a.total_penalty().total_cmp(&b.total_penalty()))
            .then(a.duration_diff_or_zero().cmp(&b.duration_diff_or_zero()))
    });
    candidates
}
