use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use roomdesk_api::models::{RoomRequest, RoomResponse};

use crate::errors::{ApiError, BuildingError, ManagerError, RoomError};
use crate::handles::ListQuery;
use crate::models::Room;
use crate::services::{filter_rows, BuildingService, Manager, RoomService, RoomTypeService};

#[derive(Clone)]
pub struct RoomState {
    pub room_service: Arc<RoomService>,
    pub building_service: Arc<BuildingService>,
    pub room_type_service: Arc<RoomTypeService>,
}

pub fn room_router(room_state: RoomState) -> Router {
    Router::new()
        .route("/api/rooms", get(get_rooms).post(create_room))
        .route(
            "/api/rooms/:room_id",
            get(get_room_by_id).put(update_room).delete(delete_room),
        )
        .with_state(room_state)
}

async fn validate(state: &RoomState, body: &RoomRequest, id: i32) -> Result<Room, ApiError> {
    let name = body.name.trim();
    if name.is_empty() {
        return Err(RoomError::InvalidName.into());
    }

    let dimensions = [body.width, body.length, body.height];
    if dimensions.iter().any(|value| !value.is_finite() || *value < 0.0) {
        return Err(RoomError::InvalidDimensions.into());
    }

    if !state.building_service.exists_by_id(body.building_id).await? {
        return Err(BuildingError::BuildingNotFound.into());
    }

    if let Some(room_type_id) = body.room_type_id {
        if !state.room_type_service.exists_by_id(room_type_id).await? {
            return Err(RoomError::RoomTypeNotFound.into());
        }
    }

    Ok(Room {
        id,
        building_id: body.building_id,
        room_type_id: body.room_type_id,
        name: name.to_string(),
        width: body.width,
        length: body.length,
        height: body.height,
    })
}

#[utoipa::path(
    get,
    path = "/api/rooms",
    tag = "room",
    params(
        ("search" = Option<String>, Query, description = "Filter by name or id")
    ),
    responses(
        (status = 200, description = "Rooms matching the filter", body = Vec<RoomResponse>)
    )
)]
pub async fn get_rooms(
    State(state): State<RoomState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<RoomResponse>>, ApiError> {
    let rooms = state.room_service.find_all().await?;

    let responses = filter_rows(rooms, query.term())
        .into_iter()
        .map(RoomResponse::from)
        .collect();

    Ok(Json(responses))
}

#[utoipa::path(
    post,
    path = "/api/rooms",
    tag = "room",
    request_body = RoomRequest,
    responses(
        (status = 200, description = "Room created", body = RoomResponse),
        (status = 400, description = "Blank name or invalid dimensions"),
        (status = 404, description = "Building or room type not found")
    )
)]
pub async fn create_room(
    State(state): State<RoomState>,
    Json(body): Json<RoomRequest>,
) -> Result<Json<RoomResponse>, ApiError> {
    let room = validate(&state, &body, 0).await?;

    let room = state.room_service.save(room).await?;

    Ok(Json(room.into()))
}

#[utoipa::path(
    get,
    path = "/api/rooms/{room_id}",
    tag = "room",
    params(
        ("room_id" = i32, Path, description = "Room ID")
    ),
    responses(
        (status = 200, description = "Room found", body = RoomResponse),
        (status = 404, description = "Room not found")
    )
)]
pub async fn get_room_by_id(
    State(state): State<RoomState>,
    Path(room_id): Path<i32>,
) -> Result<Json<RoomResponse>, ApiError> {
    let room = state
        .room_service
        .find_by_id(room_id)
        .await
        .map_err(|e| match e {
            ManagerError::NotFound { .. } => ApiError::from(RoomError::RoomNotFound),
            e => e.into(),
        })?;

    Ok(Json(room.into()))
}

#[utoipa::path(
    put,
    path = "/api/rooms/{room_id}",
    tag = "room",
    params(
        ("room_id" = i32, Path, description = "Room ID")
    ),
    request_body = RoomRequest,
    responses(
        (status = 200, description = "Room updated", body = RoomResponse),
        (status = 400, description = "Blank name or invalid dimensions"),
        (status = 404, description = "Room, building or room type not found")
    )
)]
pub async fn update_room(
    State(state): State<RoomState>,
    Path(room_id): Path<i32>,
    Json(body): Json<RoomRequest>,
) -> Result<Json<RoomResponse>, ApiError> {
    if !state.room_service.exists_by_id(room_id).await? {
        return Err(RoomError::RoomNotFound.into());
    }

    let room = validate(&state, &body, room_id).await?;
    let room = state.room_service.save(room).await?;

    Ok(Json(room.into()))
}

#[utoipa::path(
    delete,
    path = "/api/rooms/{room_id}",
    tag = "room",
    params(
        ("room_id" = i32, Path, description = "Room ID")
    ),
    responses(
        (status = 204, description = "Room deleted"),
        (status = 409, description = "Room still holds objects")
    )
)]
pub async fn delete_room(
    State(state): State<RoomState>,
    Path(room_id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    state
        .room_service
        .delete_by_id(room_id)
        .await
        .map_err(|e| match e {
            ManagerError::Reference(_) => ApiError::from(RoomError::RoomInUse),
            e => e.into(),
        })?;

    Ok(StatusCode::NO_CONTENT)
}
