//! Index structures over the reference corpus.

pub mod corpus;

pub use corpus::{CorpusEntry, CorpusIndex};
