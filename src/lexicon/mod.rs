//! Lexicon Module
//!
//! Pretrained word vectors (GloVe-style text tables) and the lookups built on them.
//!
//! ## Responsibilities
//! - **Loading**: Parsing `<word> <v1> ... <vD>` lines, skipping and counting malformed ones.
//! - **Caching**: A versioned bincode snapshot of the parsed table so restarts skip parsing.
//! - **Fallback**: Deterministic, hash-seeded pseudo-vectors for out-of-vocabulary words.
//!
//! ## Submodules
//! - **`store`**: `LexiconStore`, the immutable word -> vector table.
//! - **`cache`**: Binary cache reader/writer.
//! - **`fallback`**: FNV-1a seeded pseudo-vector generation.

pub mod cache;
pub mod fallback;
pub mod store;

pub use store::{LexiconSource, LexiconStore, LoadStats};
