//! Corpus-relative keyword extraction.
//!
//! `keyrank` reads a plain-text document and a reference word-frequency
//! corpus for the document's language, and produces a ranked list of
//! keywords. Words that are frequent in the document but rare in general
//! usage score highest.
//!
//! The pipeline runs in fixed stages: tokenization, stop-word and
//! short-word filtering, frequency counting with a log-scale pruning
//! threshold, corpus-relative importance scoring, and normalization into
//! a fixed 0.5–100.0 score range. The pipeline is single-threaded and
//! deterministic given its two inputs.

pub mod engine;
pub mod index;
pub mod io;
pub mod types;

pub use engine::{extract_keywords, RankedKeyword, Tokenizer};
pub use index::{CorpusEntry, CorpusIndex};
pub use types::{ExtractParams, KeyrankError, KeyrankResult, Language, OutputConfig};
