use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use roomdesk_api::models::{RoomTypeRequest, RoomTypeResponse};

use crate::errors::{ApiError, ManagerError, RoomError};
use crate::models::RoomType;
use crate::services::{Manager, RoomTypeService};

#[derive(Clone)]
pub struct RoomTypeState {
    pub room_type_service: Arc<RoomTypeService>,
}

pub fn room_type_router(room_type_state: RoomTypeState) -> Router {
    Router::new()
        .route("/api/room-types", get(get_room_types).post(create_room_type))
        .route(
            "/api/room-types/:room_type_id",
            get(get_room_type_by_id)
                .put(update_room_type)
                .delete(delete_room_type),
        )
        .with_state(room_type_state)
}

/// Names are unique across room types; `own_id` is excluded so an
/// unchanged name can be saved again.
async fn validate(
    state: &RoomTypeState,
    body: &RoomTypeRequest,
    own_id: i32,
) -> Result<String, ApiError> {
    let name = body.name.trim();
    if name.is_empty() {
        return Err(RoomError::InvalidName.into());
    }

    if let Some(existing) = state.room_type_service.find_by_name(name).await? {
        if existing.id != own_id {
            return Err(RoomError::RoomTypeNameExists.into());
        }
    }

    Ok(name.to_string())
}

fn name_conflict(error: ManagerError) -> ApiError {
    match error {
        ManagerError::Duplicate(_) => RoomError::RoomTypeNameExists.into(),
        e => e.into(),
    }
}

async fn find_room_type(state: &RoomTypeState, room_type_id: i32) -> Result<RoomType, ApiError> {
    state
        .room_type_service
        .find_by_id(room_type_id)
        .await
        .map_err(|e| match e {
            ManagerError::NotFound { .. } => RoomError::RoomTypeNotFound.into(),
            e => e.into(),
        })
}

#[utoipa::path(
    get,
    path = "/api/room-types",
    tag = "room_type",
    responses(
        (status = 200, description = "All room types", body = Vec<RoomTypeResponse>)
    )
)]
pub async fn get_room_types(
    State(state): State<RoomTypeState>,
) -> Result<Json<Vec<RoomTypeResponse>>, ApiError> {
    let room_types = state.room_type_service.find_all().await?;

    Ok(Json(room_types.into_iter().map(RoomTypeResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/api/room-types",
    tag = "room_type",
    request_body = RoomTypeRequest,
    responses(
        (status = 200, description = "Room type created", body = RoomTypeResponse),
        (status = 400, description = "Blank name"),
        (status = 409, description = "Name already taken")
    )
)]
pub async fn create_room_type(
    State(state): State<RoomTypeState>,
    Json(body): Json<RoomTypeRequest>,
) -> Result<Json<RoomTypeResponse>, ApiError> {
    let name = validate(&state, &body, 0).await?;

    let room_type = state
        .room_type_service
        .save(RoomType { id: 0, name })
        .await
        .map_err(name_conflict)?;

    Ok(Json(room_type.into()))
}

#[utoipa::path(
    get,
    path = "/api/room-types/{room_type_id}",
    tag = "room_type",
    params(
        ("room_type_id" = i32, Path, description = "Room type ID")
    ),
    responses(
        (status = 200, description = "Room type found", body = RoomTypeResponse),
        (status = 404, description = "Room type not found")
    )
)]
pub async fn get_room_type_by_id(
    State(state): State<RoomTypeState>,
    Path(room_type_id): Path<i32>,
) -> Result<Json<RoomTypeResponse>, ApiError> {
    let room_type = find_room_type(&state, room_type_id).await?;

    Ok(Json(room_type.into()))
}

#[utoipa::path(
    put,
    path = "/api/room-types/{room_type_id}",
    tag = "room_type",
    params(
        ("room_type_id" = i32, Path, description = "Room type ID")
    ),
    request_body = RoomTypeRequest,
    responses(
        (status = 200, description = "Room type updated", body = RoomTypeResponse),
        (status = 404, description = "Room type not found"),
        (status = 409, description = "Name already taken")
    )
)]
pub async fn update_room_type(
    State(state): State<RoomTypeState>,
    Path(room_type_id): Path<i32>,
    Json(body): Json<RoomTypeRequest>,
) -> Result<Json<RoomTypeResponse>, ApiError> {
    let mut room_type = find_room_type(&state, room_type_id).await?;
    room_type.name = validate(&state, &body, room_type_id).await?;

    let room_type = state
        .room_type_service
        .save(room_type)
        .await
        .map_err(name_conflict)?;

    Ok(Json(room_type.into()))
}

#[utoipa::path(
    delete,
    path = "/api/room-types/{room_type_id}",
    tag = "room_type",
    params(
        ("room_type_id" = i32, Path, description = "Room type ID")
    ),
    responses(
        (status = 204, description = "Room type deleted, rooms keep no type")
    )
)]
pub async fn delete_room_type(
    State(state): State<RoomTypeState>,
    Path(room_type_id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    state.room_type_service.delete_by_id(room_type_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
