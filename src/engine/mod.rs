//! Scoring pipeline stages. Each stage consumes the complete output of its
//! predecessor; nothing is streamed or pipelined.

pub mod extract;
pub mod filter;
pub mod frequency;
pub mod rank;
pub mod scorer;
pub mod tokenizer;

pub use extract::extract_keywords;
pub use rank::RankedKeyword;
pub use tokenizer::Tokenizer;
