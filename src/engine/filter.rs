//! Stop-word and short-word filtering passes.
//!
//! Two independent passes over a token sequence, run in this order:
//! stop words first, then short words.

use std::collections::HashSet;

/// Minimum character length a token must have to survive filtering.
pub const MIN_WORD_LEN: usize = 4;

/// Drop every token present in `stop_set` (exact string match). Order and
/// duplicate counts of the surviving tokens are preserved.
pub fn remove_stop_words(tokens: Vec<String>, stop_set: &HashSet<String>) -> Vec<String> {
    tokens
        .into_iter()
        .filter(|token| !stop_set.contains(token))
        .collect()
}

/// Drop every token shorter than [`MIN_WORD_LEN`] characters. Length is
/// counted in characters, not bytes, so accented words measure correctly.
/// Empty tokens left over from punctuation-only runs fall out here too.
pub fn remove_short_words(tokens: Vec<String>) -> Vec<String> {
    tokens
        .into_iter()
        .filter(|token| token.chars().count() >= MIN_WORD_LEN)
        .collect()
}
