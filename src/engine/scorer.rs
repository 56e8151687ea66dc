//! Corpus-relative importance scoring.

use std::collections::HashMap;

use crate::engine::frequency::FrequencyTable;
use crate::index::CorpusIndex;

/// Score every candidate word in `table` against the reference corpus.
///
/// For a word with document frequency `tf`:
///
/// ```text
/// importance = (tf / unique_word_count)
///            * ln(((total_frequency + corpus_size) / 2) / (1 + corpus_frequency) + 1)
/// ```
///
/// `unique_word_count` and `total_frequency` are taken from the pruned
/// table once, before the loop. Rarer corpus words (smaller
/// `corpus_frequency`) yield a larger logarithm term and therefore a
/// higher importance.
///
/// Words absent from the corpus are skipped outright: they never enter the
/// returned mapping, even though they remain in `table`. When no candidate
/// matches the corpus at all, the mapping comes back empty — the caller
/// treats that as an empty result, not an error.
pub fn score(table: &FrequencyTable, corpus: &CorpusIndex) -> HashMap<String, f64> {
    let unique_word_count = table.len();
    let total_frequency: u64 = table.values().map(|&c| u64::from(c)).sum();
    let pool = (total_frequency as f64 + corpus.size() as f64) / 2.0;

    let mut raw = HashMap::with_capacity(table.len());
    for (word, &doc_frequency) in table {
        let Some(corpus_frequency) = corpus.lookup(word) else {
            log::debug!("no corpus entry for {word:?}; skipping");
            continue;
        };

        let rarity = (pool / (1.0 + corpus_frequency as f64) + 1.0).ln();
        let importance = f64::from(doc_frequency) / unique_word_count as f64 * rarity;
        raw.insert(word.clone(), importance);
    }

    raw
}
