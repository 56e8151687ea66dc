//! Frequency corpus index: ordered reference entries with rank-prefix and
//! exact-word lookup.

use std::collections::{HashMap, HashSet};

/// One row of the reference frequency corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusEntry {
    /// 1-based rank; ascending rank means descending real-world frequency.
    pub rank: u32,
    /// The word, already lowercased by the loader.
    pub word: String,
    /// Absolute occurrence count in the reference corpus.
    pub frequency: u64,
}

/// Read-only index over corpus entries in supplied order.
///
/// The supplied order is authoritative: it decides which entries count as
/// the "top n most frequent" for stop-word detection. Word lookup is
/// first-match-wins — if the corpus repeats a word, only the earliest
/// occurrence is ever visible.
pub struct CorpusIndex {
    entries: Vec<CorpusEntry>,
    /// word → frequency of the first entry carrying that word.
    by_word: HashMap<String, u64>,
}

impl CorpusIndex {
    /// Build the index, preserving entry order. Duplicate words stay in the
    /// entry list (they still count toward [`size`](Self::size)) but only
    /// the first occurrence is reachable through [`lookup`](Self::lookup).
    pub fn new(entries: Vec<CorpusEntry>) -> Self {
        let mut by_word = HashMap::with_capacity(entries.len());
        let mut duplicates = 0usize;

        for entry in &entries {
            if by_word.contains_key(&entry.word) {
                duplicates += 1;
            } else {
                by_word.insert(entry.word.clone(), entry.frequency);
            }
        }

        if duplicates > 0 {
            log::warn!(
                "corpus repeats {duplicates} word(s); keeping the first occurrence of each"
            );
        }

        Self { entries, by_word }
    }

    /// Words of the first `n` entries in supplied order, not re-sorted.
    /// A corpus with fewer than `n` entries returns all of them.
    pub fn top_by_rank(&self, n: usize) -> HashSet<String> {
        self.entries
            .iter()
            .take(n)
            .map(|entry| entry.word.clone())
            .collect()
    }

    /// Reference frequency of `word`, or `None` if the corpus never saw it.
    /// Matching is exact and case-sensitive against the pre-lowercased
    /// corpus words.
    pub fn lookup(&self, word: &str) -> Option<u64> {
        self.by_word.get(word).copied()
    }

    /// Total entry count, duplicates included.
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
