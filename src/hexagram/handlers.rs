use super::types::HexagramInfo;
use crate::oracle::service::OracleService;
use crate::storage::protocol::ErrorResponse;

use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
};
use std::sync::Arc;

/// `GET /hexagrams/`: metadata for all 64 hexagrams.
pub async fn handle_list_hexagrams(
    Extension(oracle): Extension<Arc<OracleService>>,
) -> Json<Vec<HexagramInfo>> {
    Json(oracle.list_hexagrams())
}

/// `GET /hexagrams/:id`
pub async fn handle_get_hexagram(
    Path(id): Path<u32>,
    Extension(oracle): Extension<Arc<OracleService>>,
) -> Result<Json<HexagramInfo>, (StatusCode, Json<ErrorResponse>)> {
    match oracle.hexagram(id) {
        Some(category) => Ok(Json(HexagramInfo::from(category))),
        None => {
            tracing::debug!("Hexagram {} not found", id);
            Err((
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    detail: "Hexagram not found".to_string(),
                }),
            ))
        }
    }
}
