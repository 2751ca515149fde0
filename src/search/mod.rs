//! Search Module
//!
//! Maps free text onto the hexagram prototypes.
//!
//! ## Overview
//! A query is tokenized, averaged into a single vector through the lexicon, and compared
//! against every prototype by cosine similarity. The best `top_k` are kept and their
//! similarities rescaled into a distribution over that shortlist.
//!
//! ## Submodules
//! - **`tokenizer`**: Lowercasing whitespace tokenizer shared by queries and keyword phrases.
//! - **`vectorizer`**: Mean-of-token-vectors query embedding.
//! - **`engine`**: Cosine ranking, deterministic tie-breaking, truncation and rescaling.
//! - **`handlers`**: HTTP handlers for submitting queries and finding similar past queries.
//! - **`types`**: Result records.

pub mod engine;
pub mod handlers;
pub mod tokenizer;
pub mod types;
pub mod vectorizer;

#[cfg(test)]
mod tests;
