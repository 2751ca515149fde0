use crate::storage::protocol::HealthResponse;

use axum::Json;

pub const SERVICE_NAME: &str = "I Ching Query API";

pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
    })
}
