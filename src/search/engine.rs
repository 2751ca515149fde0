//! Similarity Ranker
//!
//! Ranking runs in a fixed order: cosine similarity against every prototype,
//! sort descending (ties by ascending id), truncate to `top_k`, then rescale the
//! retained similarities with `exp(2s)` normalized over the retained set only.
//! Rescaling before truncating gives different scores.

use super::types::HexagramScore;
#[cfg(test)]
use super::types::RawMatch;
use crate::hexagram::prototype::Prototype;

use std::cmp::Ordering;

/// Multiplier applied to similarities before exponentiation.
pub const RESCALE_FACTOR: f64 = 2.0;

/// Unit-length copy of `vector`. A zero-norm vector is returned unchanged.
pub fn unit_vector(vector: &[f32]) -> Vec<f32> {
    let norm = vector
        .iter()
        .map(|x| f64::from(*x) * f64::from(*x))
        .sum::<f64>()
        .sqrt();

    if norm > 0.0 && norm.is_finite() {
        vector
            .iter()
            .map(|x| (f64::from(*x) / norm) as f32)
            .collect()
    } else {
        vector.to_vec()
    }
}

/// Dot product of two already-normalized vectors, clamped to `[-1, 1]`.
pub fn cosine_of_units(a: &[f32], b: &[f32]) -> f32 {
    let dot: f64 = a
        .iter()
        .zip(b)
        .map(|(x, y)| f64::from(*x) * f64::from(*y))
        .sum();
    if dot.is_nan() {
        return 0.0;
    }
    dot.clamp(-1.0, 1.0) as f32
}

/// Cosine similarity of arbitrary vectors; 0 if either has zero norm.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    cosine_of_units(&unit_vector(a), &unit_vector(b))
}

/// `(index into prototypes, similarity)`, best first, ties by ascending id.
fn ranked_indices(query: &[f32], prototypes: &[Prototype]) -> Vec<(usize, f32)> {
    let query_unit = unit_vector(query);

    let mut ranked: Vec<(usize, f32)> = prototypes
        .iter()
        .enumerate()
        .map(|(index, prototype)| (index, cosine_of_units(&query_unit, prototype.unit())))
        .collect();

    ranked.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| prototypes[a.0].id().cmp(&prototypes[b.0].id()))
    });
    ranked
}

/// Every prototype's raw similarity to `query`, sorted best first.
#[cfg(test)]
pub(crate) fn score_all(query: &[f32], prototypes: &[Prototype]) -> Vec<RawMatch> {
    ranked_indices(query, prototypes)
        .into_iter()
        .map(|(index, similarity)| RawMatch {
            hexagram_id: prototypes[index].id(),
            similarity,
        })
        .collect()
}

/// The best `top_k` raw matches (clamped to the number of prototypes).
#[cfg(test)]
pub(crate) fn top_matches(query: &[f32], prototypes: &[Prototype], top_k: usize) -> Vec<RawMatch> {
    let mut matches = score_all(query, prototypes);
    matches.truncate(top_k);
    matches
}

/// `exp(2s) / Σ exp(2s)` over exactly the given similarities.
pub fn rescale(similarities: &[f32]) -> Vec<f32> {
    let weights: Vec<f64> = similarities
        .iter()
        .map(|s| (RESCALE_FACTOR * f64::from(*s)).exp())
        .collect();
    let total: f64 = weights.iter().sum();

    if total > 0.0 {
        weights.iter().map(|w| (w / total) as f32).collect()
    } else {
        Vec::new()
    }
}

/// Ranks `prototypes` against `query` and returns the top `top_k` with rescaled scores.
pub fn rank(query: &[f32], prototypes: &[Prototype], top_k: usize) -> Vec<HexagramScore> {
    let mut ranked = ranked_indices(query, prototypes);
    ranked.truncate(top_k);

    let similarities: Vec<f32> = ranked.iter().map(|(_, s)| *s).collect();
    let scores = rescale(&similarities);

    ranked
        .iter()
        .zip(scores)
        .map(|((index, _), score)| {
            let category = &prototypes[*index].category;
            HexagramScore {
                hexagram_id: category.id,
                hexagram_name: category.name.clone(),
                hexagram_unicode: category.glyph.clone(),
                score,
            }
        })
        .collect()
}
