use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::model::api::HealthDto;

/// GET /health - Liveness probe
#[utoipa::path(
    get,
    path = "/health",
    tag = "system",
    responses((status = 200, description = "Server is running", body = HealthDto))
)]
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthDto {
            status: "ok".to_string(),
        }),
    )
}
