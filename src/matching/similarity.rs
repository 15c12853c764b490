//! Asymmetric token-set similarity.
//!
//! The source track is ground truth: a candidate scores by how much of
//! *its own* token set appears in the source. Extra source tokens cost
//! nothing, so "Song Name" fully matches "Song Name (Remastered 2021)".

use super::tokenize::TokenSet;

/// Fraction of candidate tokens found in the source.
///
/// Returns 0.0 when the candidate has fewer than `min_candidate_tokens`
/// tokens, so single-word candidates can't match on one lucky word.
pub fn subset_similarity(
    source: &TokenSet,
    candidate: &TokenSet,
    min_candidate_tokens: usize,
) -> f64 {
    if candidate.is_empty() || candidate.len() < min_candidate_tokens {
        return 0.0;
    }

    let matching = candidate.intersection(source).count();
    matching as f64 / candidate.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> TokenSet {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_full_subset_scores_one() {
        let source = set(&["song", "name", "remastered", "2021"]);
        let candidate = set(&["song", "name"]);
        assert_eq!(subset_similarity(&source, &candidate, 2), 1.0);
    }

    #[test]
    fn test_partial_overlap() {
        let source = set(&["yellow", "coldplay"]);
        let candidate = set(&["yellow", "coldplay", "live"]);
        let score = subset_similarity(&source, &candidate, 2);
        assert!((score - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_is_asymmetric() {
        let a = set(&["yellow", "coldplay", "parachutes"]);
        let b = set(&["yellow", "coldplay"]);
        assert_eq!(subset_similarity(&a, &b, 2), 1.0);
        assert!((subset_similarity(&b, &a, 2) - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_token_candidate_scores_zero() {
        let source = set(&["x", "coldplay"]);
        assert_eq!(subset_similarity(&source, &set(&["x"]), 2), 0.0);
        assert_eq!(subset_similarity(&source, &set(&[]), 2), 0.0);
    }

    #[test]
    fn test_disjoint_scores_zero() {
        let source = set(&["yellow", "coldplay"]);
        let candidate = set(&["fix", "you"]);
        assert_eq!(subset_similarity(&source, &candidate, 2), 0.0);
    }
}

/// Property-based tests using proptest
#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn token_set() -> impl Strategy<Value = TokenSet> {
        prop::collection::hash_set("[a-z]{1,6}", 0..8)
    }

    proptest! {
        /// Candidates below the minimum size always score 0.0
        #[test]
        fn small_candidates_score_zero(
            source in token_set(),
            candidate in prop::collection::hash_set("[a-z]{1,6}", 0..2),
        ) {
            prop_assert_eq!(subset_similarity(&source, &candidate, 2), 0.0);
        }

        /// A candidate contained in the source always scores 1.0
        #[test]
        fn subset_scores_one(source in prop::collection::hash_set("[a-z]{1,6}", 2..10), take in 2usize..10) {
            let candidate: TokenSet = source.iter().take(take).cloned().collect();
            prop_assume!(candidate.len() >= 2);
            prop_assert_eq!(subset_similarity(&source, &candidate, 2), 1.0);
        }

        /// Scores stay within [0, 1]
        #[test]
        fn score_is_bounded(source in token_set(), candidate in token_set()) {
            let score = subset_similarity(&source, &candidate, 2);
            prop_assert!((0.0..=1.0).contains(&score));
        }
    }
}
