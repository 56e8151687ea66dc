//! Whitespace tokenizer with a fixed punctuation/digit strip set.

/// Characters deleted from every candidate word. Deleted in place, not
/// replaced with a separator: `"don't"` becomes `"dont"`, never `"don t"`.
const STRIPPED: &[char] = &[
    '.', ',', '!', '?', ';', ':', '"', '\'', '(', ')', '–', '[', ']', '{', '}', '|', '0', '1',
    '2', '3', '4', '5', '6', '7', '8', '9',
];

/// Deterministic tokenizer for document text.
pub struct Tokenizer;

impl Tokenizer {
    /// Create a tokenizer with the fixed strip set.
    pub fn new() -> Self {
        Self
    }

    /// Split `text` into maximal non-whitespace runs, strip the fixed
    /// character set from each run, and lowercase the remainder.
    ///
    /// Runs that strip down to nothing are still emitted as empty tokens;
    /// the length filter removes them downstream. Diacritics are preserved
    /// — tokens are case-insensitive but accent-sensitive.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace()
            .map(|run| {
                run.chars()
                    .filter(|c| !STRIPPED.contains(c))
                    .flat_map(|c| c.to_lowercase())
                    .collect()
            })
            .collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}
