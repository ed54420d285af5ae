//! Okapi Core - BM25 lexical ranking in Rust
//!
//! Builds term statistics over an in-memory corpus once, then scores and
//! ranks documents against free-text queries.

pub mod bm25;
pub mod error;
pub mod params;
pub mod rank;
pub mod stats;
pub mod tokenizer;

pub use bm25::{BM25Okapi, BM25Scorer, SearchResult};
pub use error::{Error, Result};
pub use params::{BM25Params, QueryTerms, MAX_K1};
pub use stats::{CorpusStats, IndexStats};
pub use tokenizer::Tokenizer;
