use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use roomdesk_api::models::{BuildingRequest, BuildingResponse, RoomResponse};

use crate::errors::{ApiError, BuildingError, ManagerError};
use crate::handles::ListQuery;
use crate::models::Building;
use crate::services::{filter_rows, BuildingService, Manager, RoomService};

#[derive(Clone)]
pub struct BuildingState {
    pub building_service: Arc<BuildingService>,
    pub room_service: Arc<RoomService>,
}

pub fn building_router(building_state: BuildingState) -> Router {
    Router::new()
        .route("/api/buildings", get(get_buildings).post(create_building))
        .route(
            "/api/buildings/:building_id",
            get(get_building_by_id)
                .put(update_building)
                .delete(delete_building),
        )
        .route("/api/buildings/:building_id/rooms", get(get_building_rooms))
        .with_state(building_state)
}

fn validate(body: &BuildingRequest) -> Result<String, BuildingError> {
    let name = body.name.trim();
    if name.is_empty() {
        return Err(BuildingError::InvalidName);
    }
    Ok(name.to_string())
}

async fn find_building(state: &BuildingState, building_id: i32) -> Result<Building, ApiError> {
    state
        .building_service
        .find_by_id(building_id)
        .await
        .map_err(|e| match e {
            ManagerError::NotFound { .. } => BuildingError::BuildingNotFound.into(),
            e => e.into(),
        })
}

#[utoipa::path(
    get,
    path = "/api/buildings",
    tag = "building",
    params(
        ("search" = Option<String>, Query, description = "Filter by name or id")
    ),
    responses(
        (status = 200, description = "Buildings matching the filter", body = Vec<BuildingResponse>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_buildings(
    State(state): State<BuildingState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<BuildingResponse>>, ApiError> {
    let buildings = state.building_service.find_all().await?;

    let responses = filter_rows(buildings, query.term())
        .into_iter()
        .map(BuildingResponse::from)
        .collect();

    Ok(Json(responses))
}

#[utoipa::path(
    post,
    path = "/api/buildings",
    tag = "building",
    request_body = BuildingRequest,
    responses(
        (status = 200, description = "Building created", body = BuildingResponse),
        (status = 400, description = "Blank name"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_building(
    State(state): State<BuildingState>,
    Json(body): Json<BuildingRequest>,
) -> Result<Json<BuildingResponse>, ApiError> {
    let name = validate(&body)?;

    let building = state
        .building_service
        .save(Building { id: 0, name })
        .await?;

    Ok(Json(building.into()))
}

#[utoipa::path(
    get,
    path = "/api/buildings/{building_id}",
    tag = "building",
    params(
        ("building_id" = i32, Path, description = "Building ID")
    ),
    responses(
        (status = 200, description = "Building found", body = BuildingResponse),
        (status = 404, description = "Building not found")
    )
)]
pub async fn get_building_by_id(
    State(state): State<BuildingState>,
    Path(building_id): Path<i32>,
) -> Result<Json<BuildingResponse>, ApiError> {
    let building = find_building(&state, building_id).await?;

    Ok(Json(building.into()))
}

#[utoipa::path(
    put,
    path = "/api/buildings/{building_id}",
    tag = "building",
    params(
        ("building_id" = i32, Path, description = "Building ID")
    ),
    request_body = BuildingRequest,
    responses(
        (status = 200, description = "Building updated", body = BuildingResponse),
        (status = 400, description = "Blank name"),
        (status = 404, description = "Building not found")
    )
)]
pub async fn update_building(
    State(state): State<BuildingState>,
    Path(building_id): Path<i32>,
    Json(body): Json<BuildingRequest>,
) -> Result<Json<BuildingResponse>, ApiError> {
    let name = validate(&body)?;
    let mut building = find_building(&state, building_id).await?;
    building.name = name;

    let building = state.building_service.save(building).await?;

    Ok(Json(building.into()))
}

#[utoipa::path(
    delete,
    path = "/api/buildings/{building_id}",
    tag = "building",
    params(
        ("building_id" = i32, Path, description = "Building ID")
    ),
    responses(
        (status = 204, description = "Building deleted"),
        (status = 409, description = "Building still has rooms")
    )
)]
pub async fn delete_building(
    State(state): State<BuildingState>,
    Path(building_id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    state
        .building_service
        .delete_by_id(building_id)
        .await
        .map_err(|e| match e {
            ManagerError::Reference(_) => ApiError::from(BuildingError::BuildingInUse),
            e => e.into(),
        })?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/buildings/{building_id}/rooms",
    tag = "building",
    params(
        ("building_id" = i32, Path, description = "Building ID")
    ),
    responses(
        (status = 200, description = "Rooms of the building", body = Vec<RoomResponse>),
        (status = 404, description = "Building not found")
    )
)]
pub async fn get_building_rooms(
    State(state): State<BuildingState>,
    Path(building_id): Path<i32>,
) -> Result<Json<Vec<RoomResponse>>, ApiError> {
    find_building(&state, building_id).await?;

    let rooms = state.room_service.find_by_building_id(building_id).await?;

    Ok(Json(rooms.into_iter().map(RoomResponse::from).collect()))
}
