use super::memory::QueryLog;
use super::protocol::{ErrorResponse, ListParams, QueryRecord, DEFAULT_LIST_LIMIT};

use axum::{
    Json,
    extract::{Extension, Path, Query},
    http::StatusCode,
};
use std::sync::Arc;

pub async fn handle_list_queries(
    Query(params): Query<ListParams>,
    Extension(log): Extension<Arc<QueryLog>>,
) -> Json<Vec<QueryRecord>> {
    let skip = params.skip.unwrap_or(0);
    let limit = params.limit.unwrap_or(DEFAULT_LIST_LIMIT);
    Json(log.list(skip, limit))
}

pub async fn handle_get_query(
    Path(id): Path<u64>,
    Extension(log): Extension<Arc<QueryLog>>,
) -> Result<Json<QueryRecord>, (StatusCode, Json<ErrorResponse>)> {
    match log.get(id) {
        Some(record) => Ok(Json(record)),
        None => {
            tracing::debug!("Query {} not found", id);
            Err((
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    detail: "Query not found".to_string(),
                }),
            ))
        }
    }
}
