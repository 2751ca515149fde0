use super::protocol::{QueryRecord, SimilarQuery};
use crate::search::engine::{cosine_of_units, unit_vector};
use crate::search::types::HexagramScore;

use dashmap::DashMap;
use std::cmp::Ordering;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::time::{SystemTime, UNIX_EPOCH};

/// In-memory log of processed queries, keyed by a monotonically increasing id.
pub struct QueryLog {
    records: DashMap<u64, QueryRecord>,
    next_id: AtomicU64,
}

impl QueryLog {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
            next_id: AtomicU64::new(1),
        }
    }

    /// Stores a processed query and returns the stored record.
    pub fn insert(
        &self,
        query: String,
        query_vector: Vec<f32>,
        hexagram_set: Vec<HexagramScore>,
    ) -> QueryRecord {
        let id = self.next_id.fetch_add(1, AtomicOrdering::SeqCst);
        let record = QueryRecord {
            id,
            query,
            query_vector,
            hexagram_set,
            created_at: now_ms(),
        };
        self.records.insert(id, record.clone());
        tracing::debug!("Stored query {}", id);
        record
    }

    pub fn get(&self, id: u64) -> Option<QueryRecord> {
        self.records.get(&id).map(|entry| entry.value().clone())
    }

    /// Records in ascending id order, after skipping `skip`, at most `limit`.
    pub fn list(&self, skip: usize, limit: usize) -> Vec<QueryRecord> {
        let mut ids: Vec<u64> = self.records.iter().map(|entry| *entry.key()).collect();
        ids.sort_unstable();

        ids.into_iter()
            .skip(skip)
            .take(limit)
            .filter_map(|id| self.get(id))
            .collect()
    }

    /// Stored queries ranked by cosine similarity of their vectors to `vector`.
    /// Ties keep ascending id order; zero-norm vectors score 0.
    pub fn find_similar(&self, vector: &[f32], limit: usize) -> Vec<SimilarQuery> {
        let unit = unit_vector(vector);

        let mut hits: Vec<SimilarQuery> = self
            .records
            .iter()
            .map(|entry| {
                let record = entry.value();
                SimilarQuery {
                    id: record.id,
                    query: record.query.clone(),
                    similarity: cosine_of_units(&unit, &unit_vector(&record.query_vector)),
                    hexagram_set: record.hexagram_set.clone(),
                    created_at: record.created_at,
                }
            })
            .collect();

        hits.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.id.cmp(&b.id))
        });
        hits.truncate(limit);
        hits
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for QueryLog {
    fn default() -> Self {
        Self::new()
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
