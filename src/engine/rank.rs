//! Score normalization and final ranking.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;

/// Normalized score of the lowest-ranked keyword.
pub const SCORE_FLOOR: f64 = 0.5;

/// Normalized score of the highest-ranked keyword.
pub const SCORE_CEIL: f64 = 100.0;

/// Score assigned to every keyword when all raw scores are equal.
pub const SCORE_MIDPOINT: f64 = 50.25;

/// A keyword with its normalized score, in final ranking order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedKeyword {
    pub word: String,
    pub score: f64,
}

/// Sort raw scores and rescale them into the fixed output range, keeping at
/// most `max_results` entries.
///
/// Ordering is score descending, ties broken by word descending
/// (lexicographic), which makes the ranking deterministic. The lowest raw
/// score maps to [`SCORE_FLOOR`] and the highest to [`SCORE_CEIL`]. When
/// every raw score is equal the range collapses; instead of dividing by
/// zero, every keyword gets [`SCORE_MIDPOINT`].
pub fn normalize(raw: &HashMap<String, f64>, max_results: usize) -> Vec<RankedKeyword> {
    let mut pairs: Vec<(&String, f64)> = raw.iter().map(|(word, &score)| (word, score)).collect();
    pairs.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.0.cmp(a.0))
    });

    if pairs.is_empty() {
        return Vec::new();
    }

    let max_score = pairs[0].1;
    let min_score = pairs[pairs.len() - 1].1;
    let range = max_score - min_score;
    if range == 0.0 {
        log::warn!("all raw scores equal; every keyword gets the midpoint score");
    }

    pairs
        .into_iter()
        .take(max_results)
        .map(|(word, score)| {
            let normalized = if range == 0.0 {
                SCORE_MIDPOINT
            } else {
                // Round the scaled term to two decimals first, then add the
                // floor offset. The steps must stay separate: folding the
                // offset into the rounding shifts the rounding boundary.
                let scaled = (score - min_score) / range * (SCORE_CEIL - SCORE_FLOOR);
                round2(scaled) + SCORE_FLOOR
            };
            RankedKeyword {
                word: word.clone(),
                score: normalized,
            }
        })
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
