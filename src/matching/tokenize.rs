//! Text normalization and token sets.
//!
//! Titles, artists and albums are reduced to a set of lowercase words so
//! that "Yellow (Remastered)" and "yellow - remastered" compare equal.
//! Bracketed qualifiers such as "(Live)" are kept as words on purpose:
//! they distinguish versions of a recording.

use std::collections::HashSet;

/// A deduplicated bag of normalized words
pub type TokenSet = HashSet<String>;

/// Collaboration connectives that carry no identity
const STOP_WORDS: [&str; 10] = [
    "feat", "featuring", "ft", "ft.", "vs", "vs.", "with", "and", "&", "x",
];

/// Lowercase, drop punctuation (keeping words inside brackets) and collapse whitespace
pub fn normalize(text: &str) -> String {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(c, '(' | ')' | '[' | ']'))
        .filter(|&c| is_word_char(c) || c.is_whitespace())
        .collect();

    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Build the token set for a track from its title, artist and (optional) album.
///
/// Pass `""` for fields that should not contribute.
pub fn token_set(title: &str, artist: &str, album: &str) -> TokenSet {
    let combined = format!("{} {} {}", title, artist, album);
    if combined.trim().is_empty() {
        return TokenSet::new();
    }

    normalize(&combined)
        .split_whitespace()
        .filter(|token| !STOP_WORDS.contains(token))
        .map(str::to_string)
        .collect()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
