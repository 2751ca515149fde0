//! I Ching Oracle Library
//!
//! Maps free-text questions onto the 64 hexagrams by word-vector similarity.
//! It serves as the foundation for the HTTP server binary (`main.rs`).
//!
//! ## Architecture Modules
//! - **`lexicon`**: The pretrained word-vector table, its binary cache, and deterministic
//!   fallback vectors for unknown words.
//! - **`hexagram`**: The static 64-hexagram catalog and the prototype vectors derived from
//!   its keyword phrases.
//! - **`search`**: Tokenization, query vectorization, and the cosine ranker with its
//!   truncate-then-rescale scoring.
//! - **`oracle`**: `OracleService`, the immutable engine state and its `process_query`
//!   entry point.
//! - **`storage`**: An in-memory log of processed queries with listing and similarity search.
//! - **`config`** / **`errors`**: Environment-driven settings and the startup error taxonomy.

pub mod config;
pub mod errors;
pub mod hexagram;
pub mod lexicon;
pub mod oracle;
pub mod search;
pub mod storage;
