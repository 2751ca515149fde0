//! Query Vectorizer
//!
//! Turns free text into one vector: the componentwise mean of its token vectors.

use super::tokenizer::tokenize_query;
use crate::lexicon::LexiconStore;

use std::sync::Arc;

/// Componentwise mean of `vectors`, or `None` when there are none.
///
/// Accumulates in f64 so the result does not depend on input order for
/// realistic magnitudes.
pub fn mean_vector<I, V>(vectors: I, dimension: usize) -> Option<Vec<f32>>
where
    I: IntoIterator<Item = V>,
    V: AsRef<[f32]>,
{
    let mut sums = vec![0f64; dimension];
    let mut count = 0usize;

    for vector in vectors {
        for (sum, value) in sums.iter_mut().zip(vector.as_ref()) {
            *sum += f64::from(*value);
        }
        count += 1;
    }

    if count == 0 {
        return None;
    }

    let n = count as f64;
    Some(sums.into_iter().map(|sum| (sum / n) as f32).collect())
}

/// Mean of the token vectors of `text`; the zero vector for empty input.
pub fn vectorize(lexicon: &LexiconStore, text: &str) -> Vec<f32> {
    let tokens = tokenize_query(text);
    mean_vector(
        tokens.iter().map(|token| lexicon.lookup(token)),
        lexicon.dimension(),
    )
    .unwrap_or_else(|| vec![0.0; lexicon.dimension()])
}

/// Shared-handle wrapper over [`vectorize`].
#[derive(Debug, Clone)]
pub struct QueryVectorizer {
    lexicon: Arc<LexiconStore>,
}

impl QueryVectorizer {
    pub fn new(lexicon: Arc<LexiconStore>) -> Self {
        Self { lexicon }
    }

    pub fn vectorize(&self, text: &str) -> Vec<f32> {
        vectorize(&self.lexicon, text)
    }

    pub fn dimension(&self) -> usize {
        self.lexicon.dimension()
    }
}
