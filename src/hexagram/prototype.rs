//! Prototype Builder
//!
//! One fixed vector per hexagram, computed once at startup:
//! phrase vector = mean of its token vectors, prototype = mean of its phrase vectors.
//! A hexagram with no usable phrase gets the fallback vector of its short key.

use super::catalog::{categories, validate_categories};
use super::types::Category;
use crate::errors::{OracleError, Result};
use crate::lexicon::fallback::pseudo_vector;
use crate::lexicon::LexiconStore;
use crate::search::engine::unit_vector;
use crate::search::tokenizer::tokenize_query;
use crate::search::vectorizer::mean_vector;

/// A category with its prototype vector and the unit-length copy used for ranking.
#[derive(Debug, Clone)]
pub struct Prototype {
    pub category: Category,
    vector: Vec<f32>,
    unit: Vec<f32>,
}

impl Prototype {
    pub fn new(category: Category, vector: Vec<f32>) -> Self {
        let unit = unit_vector(&vector);
        Self {
            category,
            vector,
            unit,
        }
    }

    pub fn id(&self) -> u32 {
        self.category.id
    }

    pub fn vector(&self) -> &[f32] {
        &self.vector
    }

    /// Unit-length prototype, or all zeros when the prototype has zero norm.
    pub fn unit(&self) -> &[f32] {
        &self.unit
    }
}

/// Prototype vector for `category`. The flag is `true` when the fallback was used.
pub fn prototype_vector(lexicon: &LexiconStore, category: &Category) -> (Vec<f32>, bool) {
    let dimension = lexicon.dimension();

    let phrase_vectors: Vec<Vec<f32>> = category
        .keywords
        .iter()
        .filter_map(|phrase| {
            let tokens = tokenize_query(phrase);
            mean_vector(tokens.iter().map(|t| lexicon.lookup(t)), dimension)
        })
        .collect();

    match mean_vector(&phrase_vectors, dimension) {
        Some(vector) => (vector, false),
        None => (pseudo_vector(&category.key.to_lowercase(), dimension), true),
    }
}

/// Immutable, id-indexed prototype table: `prototypes[id - 1]`.
#[derive(Debug)]
pub struct PrototypeTable {
    dimension: usize,
    prototypes: Vec<Prototype>,
}

impl PrototypeTable {
    /// Builds prototypes for the shipped 64-hexagram table.
    pub fn from_catalog(lexicon: &LexiconStore) -> Result<Self> {
        Self::build(lexicon, categories())
    }

    /// Validates `categories` (exactly ids 1..=64) and computes every prototype.
    pub fn build(lexicon: &LexiconStore, mut categories: Vec<Category>) -> Result<Self> {
        validate_categories(&categories)?;
        categories.sort_by_key(|c| c.id);

        let mut fallbacks = 0usize;
        let prototypes: Vec<Prototype> = categories
            .into_iter()
            .map(|category| {
                let (vector, used_fallback) = prototype_vector(lexicon, &category);
                if used_fallback {
                    tracing::warn!(
                        "Hexagram {} ({}) has no usable keywords, using fallback vector",
                        category.id,
                        category.name
                    );
                    fallbacks += 1;
                }
                Prototype::new(category, vector)
            })
            .collect();

        if let Some(bad) = prototypes
            .iter()
            .find(|p| p.vector().len() != lexicon.dimension())
        {
            return Err(OracleError::Dimension {
                expected: lexicon.dimension(),
                actual: bad.vector().len(),
            });
        }

        tracing::info!(
            "Built {} hexagram prototypes ({} via fallback)",
            prototypes.len(),
            fallbacks
        );

        Ok(Self {
            dimension: lexicon.dimension(),
            prototypes,
        })
    }

    pub fn get(&self, id: u32) -> Option<&Prototype> {
        let index = (id as usize).checked_sub(1)?;
        self.prototypes.get(index)
    }

    pub fn as_slice(&self) -> &[Prototype] {
        &self.prototypes
    }

    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.prototypes.iter().map(|p| &p.category)
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn len(&self) -> usize {
        self.prototypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prototypes.is_empty()
    }
}
