//! Document term frequencies and the log-scale pruning threshold.

use std::collections::HashMap;

use crate::types::{KeyrankError, KeyrankResult};

/// Occurrence count per distinct token in the document.
pub type FrequencyTable = HashMap<String, u32>;

/// Count every occurrence of every distinct token.
pub fn count(tokens: &[String]) -> FrequencyTable {
    let mut table = FrequencyTable::new();
    for token in tokens {
        *table.entry(token.clone()).or_insert(0) += 1;
    }
    table
}

/// Pruning threshold: `log10(total_token_count) + 0.5`, rounded to the
/// nearest integer with halves rounding up.
///
/// `total_token_count` is the token count after stop-word and short-word
/// filtering but before any pruning — not the pruned candidate count. A
/// count of zero leaves the logarithm undefined and is reported as
/// [`KeyrankError::EmptyInput`] rather than allowed to produce NaN.
pub fn prune_threshold(total_token_count: usize) -> KeyrankResult<u32> {
    if total_token_count == 0 {
        return Err(KeyrankError::EmptyInput);
    }
    Ok(((total_token_count as f64).log10() + 0.5).round() as u32)
}

/// Remove every entry whose count is strictly below `threshold`.
pub fn prune_by_threshold(table: &mut FrequencyTable, threshold: u32) {
    table.retain(|_, count| *count >= threshold);
}
