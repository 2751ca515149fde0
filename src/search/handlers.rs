use crate::oracle::service::OracleService;
use crate::storage::memory::QueryLog;
use crate::storage::protocol::{
    QueryCreate, QueryRecord, SimilarParams, SimilarQuery, DEFAULT_SIMILAR_LIMIT,
};

use axum::extract::Query;
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;

/// `POST /queries/`: embeds and ranks the question, then logs it.
pub async fn handle_create_query(
    Extension(oracle): Extension<Arc<OracleService>>,
    Extension(log): Extension<Arc<QueryLog>>,
    Json(req): Json<QueryCreate>,
) -> (StatusCode, Json<QueryRecord>) {
    let (query_vector, hexagram_set) = oracle.process_query(&req.query);

    if let Some(best) = hexagram_set.first() {
        tracing::debug!(
            "Query '{}' -> {} {} ({:.3})",
            req.query,
            best.hexagram_unicode,
            best.hexagram_name,
            best.score
        );
    }

    let record = log.insert(req.query, query_vector, hexagram_set);
    (StatusCode::CREATED, Json(record))
}

/// `GET /queries/search/similar?query=..&limit=..`
pub async fn handle_similar_queries(
    Query(params): Query<SimilarParams>,
    Extension(oracle): Extension<Arc<OracleService>>,
    Extension(log): Extension<Arc<QueryLog>>,
) -> Json<Vec<SimilarQuery>> {
    let limit = params.limit.unwrap_or(DEFAULT_SIMILAR_LIMIT);
    let vector = oracle.vectorize(&params.query);
    Json(log.find_similar(&vector, limit))
}
