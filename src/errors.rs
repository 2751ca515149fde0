//! Error types for the oracle engine.
//!
//! Only startup can fail hard. The scoring path never returns these.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OracleError {
    /// The static hexagram table violates an invariant (count, id range, duplicates).
    #[error("catalog error: {0}")]
    Catalog(String),

    /// A vector did not have the configured dimensionality.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    Dimension { expected: usize, actual: usize },

    /// The binary lexicon cache is unusable (bad magic, version, or layout).
    #[error("cache error: {0}")]
    Cache(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("encoding error: {0}")]
    Encoding(#[from] bincode::Error),
}

pub type Result<T> = std::result::Result<T, OracleError>;
