use axum::{response::IntoResponse, routing::get, Json, Router};
use utoipa::OpenApi;

use crate::{
    model::{
        api::{ErrorDto, HealthDto},
        soldier::{CreateSoldierDto, SoldierDto, UpdateSoldierDto},
    },
    server::{
        controller::{
            health::{self, health_check},
            soldier::{
                self, create_soldier, delete_soldier, get_all_soldiers, get_soldier_by_id,
                update_soldier,
            },
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Soldiers Service", description = "CRUD API for soldier records"),
    paths(
        health::health_check,
        soldier::create_soldier,
        soldier::get_all_soldiers,
        soldier::get_soldier_by_id,
        soldier::update_soldier,
        soldier::delete_soldier,
    ),
    components(schemas(
        SoldierDto,
        CreateSoldierDto,
        UpdateSoldierDto,
        ErrorDto,
        HealthDto
    )),
    tags(
        (name = "health", description = "Service liveness"),
        (name = "soldier", description = "Soldier record management")
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(health_check))
        .route(
            "/soldiersdb/",
            get(get_all_soldiers).post(create_soldier),
        )
        .route("/soldiersdb", get(get_all_soldiers).post(create_soldier))
        .route(
            "/soldiersdb/{soldier_id}",
            get(get_soldier_by_id)
                .put(update_soldier)
                .delete(delete_soldier),
        )
        .route("/api-docs/openapi.json", get(openapi_json))
}

/// Serves the generated OpenAPI document.
async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
