//! Oracle Module
//!
//! The engine entry point: `OracleService::process_query` turns a question into its
//! query vector and ranked hexagram set. Construction loads the lexicon and builds the
//! prototypes once; afterwards the service is immutable and shared behind an `Arc`.

pub mod handlers;
pub mod service;
