use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        soldier::{CreateSoldierDto, SoldierDto, UpdateSoldierDto},
    },
    server::{
        error::AppError,
        model::soldier::{CreateSoldierParams, Soldier, UpdateSoldierParams},
        state::AppState,
    },
};

/// Tag for grouping soldier endpoints in OpenAPI documentation
pub static SOLDIER_TAG: &str = "soldier";

/// Create a new soldier.
///
/// Stores a soldier under its business ID. The business ID must not be in use.
///
/// # Arguments
/// - `state` - Application state containing the data loader
/// - `payload` - Soldier data, every field required
///
/// # Returns
/// - `201 Created` - The stored soldier including its internal ID
/// - `409 Conflict` - A soldier with this business ID already exists
/// - `422 Unprocessable Entity` - Missing or mistyped fields
/// - `503 Service Unavailable` - Store not reachable
#[utoipa::path(
    post,
    path = "/soldiersdb/",
    tag = SOLDIER_TAG,
    request_body = CreateSoldierDto,
    responses(
        (status = 201, description = "Successfully created soldier", body = SoldierDto),
        (status = 409, description = "Soldier with this ID already exists", body = ErrorDto),
        (status = 422, description = "Invalid soldier data"),
        (status = 503, description = "Database connection is not available", body = ErrorDto)
    ),
)]
pub async fn create_soldier(
    State(state): State<AppState>,
    Json(payload): Json<CreateSoldierDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateSoldierParams::from_dto(payload);

    let soldier = state.data_loader.create_item(params).await?;

    Ok((StatusCode::CREATED, Json(soldier.into_dto())))
}

/// Get all soldiers.
///
/// # Returns
/// - `200 OK` - Every stored soldier, possibly none
/// - `503 Service Unavailable` - Store not reachable
#[utoipa::path(
    get,
    path = "/soldiersdb/",
    tag = SOLDIER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved soldiers", body = Vec<SoldierDto>),
        (status = 503, description = "Database connection is not available", body = ErrorDto)
    ),
)]
pub async fn get_all_soldiers(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let soldiers = state.data_loader.get_all().await?;

    let dtos: Vec<SoldierDto> = soldiers.into_iter().map(Soldier::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a soldier by business ID.
///
/// # Returns
/// - `200 OK` - The soldier
/// - `404 Not Found` - No soldier with this business ID
/// - `503 Service Unavailable` - Store not reachable
#[utoipa::path(
    get,
    path = "/soldiersdb/{soldier_id}",
    tag = SOLDIER_TAG,
    params(
        ("soldier_id" = i64, Path, description = "Soldier business ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved soldier", body = SoldierDto),
        (status = 404, description = "Soldier not found", body = ErrorDto),
        (status = 503, description = "Database connection is not available", body = ErrorDto)
    ),
)]
pub async fn get_soldier_by_id(
    State(state): State<AppState>,
    Path(soldier_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let soldier = state.data_loader.get_by_id(soldier_id).await?;

    match soldier {
        Some(soldier) => Ok((StatusCode::OK, Json(soldier.into_dto()))),
        None => Err(AppError::NotFound(format!(
            "Soldier with ID {} not found",
            soldier_id
        ))),
    }
}

/// Update a soldier.
///
/// Applies only the fields present in the body; omitted and `null` fields keep their
/// stored value. An empty body returns the soldier unchanged.
///
/// # Arguments
/// - `state` - Application state containing the data loader
/// - `soldier_id` - Business ID of the soldier to update
/// - `payload` - Fields to change
///
/// # Returns
/// - `200 OK` - The soldier after the update
/// - `404 Not Found` - No soldier with this business ID
/// - `503 Service Unavailable` - Store not reachable
#[utoipa::path(
    put,
    path = "/soldiersdb/{soldier_id}",
    tag = SOLDIER_TAG,
    params(
        ("soldier_id" = i64, Path, description = "Soldier business ID")
    ),
    request_body = UpdateSoldierDto,
    responses(
        (status = 200, description = "Successfully updated soldier", body = SoldierDto),
        (status = 404, description = "Soldier not found", body = ErrorDto),
        (status = 422, description = "Invalid soldier data"),
        (status = 503, description = "Database connection is not available", body = ErrorDto)
    ),
)]
pub async fn update_soldier(
    State(state): State<AppState>,
    Path(soldier_id): Path<i64>,
    Json(payload): Json<UpdateSoldierDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateSoldierParams::from_dto(payload);

    let soldier = state.data_loader.update_item(soldier_id, params).await?;

    match soldier {
        Some(soldier) => Ok((StatusCode::OK, Json(soldier.into_dto()))),
        None => Err(AppError::NotFound(format!(
            "Soldier with ID {} not found to update",
            soldier_id
        ))),
    }
}

/// Delete a soldier.
///
/// # Returns
/// - `204 No Content` - The soldier was removed
/// - `404 Not Found` - No soldier with this business ID
/// - `503 Service Unavailable` - Store not reachable
#[utoipa::path(
    delete,
    path = "/soldiersdb/{soldier_id}",
    tag = SOLDIER_TAG,
    params(
        ("soldier_id" = i64, Path, description = "Soldier business ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted soldier"),
        (status = 404, description = "Soldier not found", body = ErrorDto),
        (status = 503, description = "Database connection is not available", body = ErrorDto)
    ),
)]
pub async fn delete_soldier(
    State(state): State<AppState>,
    Path(soldier_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = state.data_loader.delete_item(soldier_id).await?;

    if !deleted {
        return Err(AppError::NotFound(format!(
            "Soldier with ID {} not found to delete",
            soldier_id
        )));
    }

    Ok(StatusCode::NO_CONTENT)
}
