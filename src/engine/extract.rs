//! The extraction pipeline: tokenize, filter, count, score, rank.

use crate::engine::rank::RankedKeyword;
use crate::engine::tokenizer::Tokenizer;
use crate::engine::{filter, frequency, rank, scorer};
use crate::index::CorpusIndex;
use crate::types::{ExtractParams, KeyrankResult};

/// Run the full pipeline over `text` against `corpus`.
///
/// Stages run strictly in sequence; each consumes the complete output of
/// its predecessor. An empty result means no candidate word matched the
/// corpus. A document that filters down to nothing is
/// [`KeyrankError::EmptyInput`](crate::types::KeyrankError::EmptyInput).
pub fn extract_keywords(
    text: &str,
    corpus: &CorpusIndex,
    params: &ExtractParams,
) -> KeyrankResult<Vec<RankedKeyword>> {
    let tokenizer = Tokenizer::new();
    let tokens = tokenizer.tokenize(text);

    let stop_set = corpus.top_by_rank(params.stop_word_count);
    let tokens = filter::remove_stop_words(tokens, &stop_set);
    let tokens = filter::remove_short_words(tokens);

    // The threshold is derived from the post-filter token count, before
    // pruning produces the (smaller) candidate set.
    let filtered_count = tokens.len();
    let threshold = frequency::prune_threshold(filtered_count)?;

    let mut table = frequency::count(&tokens);
    frequency::prune_by_threshold(&mut table, threshold);
    log::debug!(
        "{filtered_count} tokens after filtering, threshold {threshold}, {} candidates",
        table.len()
    );

    let raw = scorer::score(&table, corpus);
    Ok(rank::normalize(&raw, params.max_results))
}
