use axum::{response::IntoResponse, Json};

use crate::model::api::HealthDto;

/// Tag for grouping health endpoints in OpenAPI documentation
pub static HEALTH_TAG: &str = "health";

/// Liveness check.
///
/// Reports that the process is serving requests. Does not touch the store, so it stays
/// healthy while the data-access layer is disconnected.
#[utoipa::path(
    get,
    path = "/",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service is running", body = HealthDto)
    ),
)]
pub async fn health_check() -> impl IntoResponse {
    Json(HealthDto {
        status: "ok".to_string(),
    })
}
