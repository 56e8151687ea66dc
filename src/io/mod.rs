//! Thin I/O collaborators around the scoring pipeline: document reading,
//! corpus parsing, and result formatting.

pub mod corpus_file;
pub mod document;
pub mod messages;
pub mod sink;

pub use corpus_file::CorpusFile;
pub use document::DocumentSource;
pub use sink::ResultSink;
