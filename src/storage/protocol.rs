//! Query API Protocol
//!
//! Request and response bodies for the query endpoints. Field names follow the
//! JSON shapes clients already consume.

use crate::search::types::HexagramScore;
use serde::{Deserialize, Serialize};

// --- API Endpoints ---

pub const ENDPOINT_HEALTH: &str = "/";
/// `POST` creates, `GET` lists.
pub const ENDPOINT_QUERIES: &str = "/queries/";
pub const ENDPOINT_QUERY_BY_ID: &str = "/queries/:id";
pub const ENDPOINT_SIMILAR: &str = "/queries/search/similar";
pub const ENDPOINT_HEXAGRAMS: &str = "/hexagrams/";
pub const ENDPOINT_HEXAGRAM_BY_ID: &str = "/hexagrams/:id";

pub const DEFAULT_LIST_LIMIT: usize = 100;
pub const DEFAULT_SIMILAR_LIMIT: usize = 10;

// --- Data Transfer Objects ---

/// Body of `POST /queries/`.
#[derive(Debug, Serialize, Deserialize)]
pub struct QueryCreate {
    pub query: String,
}

/// A processed query as stored in the log and returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRecord {
    pub id: u64,
    pub query: String,
    pub query_vector: Vec<f32>,
    pub hexagram_set: Vec<HexagramScore>,
    /// Milliseconds since the Unix epoch.
    pub created_at: u64,
}

/// Pagination for `GET /queries/`.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub skip: Option<usize>,
    pub limit: Option<usize>,
}

/// Query string of `GET /queries/search/similar`.
#[derive(Debug, Deserialize)]
pub struct SimilarParams {
    pub query: String,
    pub limit: Option<usize>,
}

/// One hit of the similar-queries search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarQuery {
    pub id: u64,
    pub query: String,
    pub similarity: f32,
    pub hexagram_set: Vec<HexagramScore>,
    pub created_at: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}
