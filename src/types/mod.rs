//! Shared types: errors, pipeline parameters, and output configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Default number of top-ranked corpus words treated as stop words.
pub const STOP_WORD_COUNT: usize = 150;

/// Ceiling on the number of keywords a run may emit.
pub const MAX_RESULTS: usize = 20;

/// Crate-wide result alias.
pub type KeyrankResult<T> = Result<T, KeyrankError>;

/// Errors raised by the pipeline and its I/O collaborators.
#[derive(Debug, Error)]
pub enum KeyrankError {
    /// The document has no tokens left after stop-word and short-word
    /// filtering, so the pruning threshold (a log of the token count) is
    /// undefined.
    #[error("document yields no usable words after filtering")]
    EmptyInput,

    /// The corpus file produced zero parseable entries.
    #[error("corpus contains no usable entries")]
    EmptyCorpus,

    /// A document or corpus file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Tuning parameters for one extraction run.
///
/// These affect which words are candidates and how many results come back,
/// never how an individual word is scored.
#[derive(Debug, Clone)]
pub struct ExtractParams {
    /// How many of the highest-ranked corpus entries form the stop-word set.
    pub stop_word_count: usize,
    /// Maximum number of keywords to return.
    pub max_results: usize,
}

impl Default for ExtractParams {
    fn default() -> Self {
        Self {
            stop_word_count: STOP_WORD_COUNT,
            max_results: MAX_RESULTS,
        }
    }
}

/// Language of user-facing status messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Czech,
    English,
}

/// Presentation settings for rendering results.
///
/// Consumed only by the output formatting layer; the scoring pipeline never
/// sees it.
#[derive(Debug, Clone, Copy)]
pub struct OutputConfig {
    /// Ranked lines with scores when true, bare words when false.
    pub verbose: bool,
    /// Language for status text around the result list.
    pub language: Language,
}
