//! Query Storage Module
//!
//! Keeps every processed query (text, vector, hexagram set) in memory so clients can
//! page through past questions and search them by vector similarity.
//!
//! ## Core Concepts
//! - **Ids**: Assigned from an atomic counter starting at 1, never reused.
//! - **Listing**: Ascending id order with `skip`/`limit` pagination.
//! - **Similarity**: Linear cosine scan over stored query vectors.

pub mod handlers;
pub mod memory;
pub mod protocol;
