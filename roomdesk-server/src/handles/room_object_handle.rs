use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use roomdesk_api::models::{DeletedResponse, ObjectKind, RoomObjectRequest, RoomObjectResponse};
use serde::Deserialize;

use crate::errors::{ApiError, ManagerError, ObjectError};
use crate::models::{Room, RoomObject};
use crate::services::{
    filter_rows, Manager, ObjectEditor, ObjectForm, ObjectRow, RoomObjectService, RoomService,
};

#[derive(Clone)]
pub struct ObjectState {
    pub object_service: Arc<RoomObjectService>,
    pub room_service: Arc<RoomService>,
}

impl ObjectState {
    fn kind(&self) -> ObjectKind {
        self.object_service.kind()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ObjectQuery {
    pub search: Option<String>,
    pub room_id: Option<i64>,
    pub name: Option<String>,
}

/// Routes for one object kind, mounted under `/api/<route>`.
pub fn room_object_router(object_state: ObjectState) -> Router {
    let base = format!("/api/{}", object_state.kind().route());

    Router::new()
        .route(
            &base,
            get(get_objects).post(create_object).delete(delete_objects),
        )
        .route(
            &format!("{base}/:object_id"),
            get(get_object_by_id).put(update_object).delete(delete_object),
        )
        .with_state(object_state)
}

async fn find_object(state: &ObjectState, object_id: i32) -> Result<RoomObject, ApiError> {
    state
        .object_service
        .find_by_id(object_id)
        .await
        .map_err(|e| match e {
            ManagerError::NotFound { .. } => ObjectError::ObjectNotFound.into(),
            e => e.into(),
        })
}

fn respond(kind: ObjectKind, object: RoomObject, rooms: &[Room]) -> RoomObjectResponse {
    let room_name = object
        .room_id
        .and_then(|id| rooms.iter().find(|room| room.id == id))
        .map(|room| room.name.clone());

    ObjectRow { object, room_name }.into_response(kind)
}

#[utoipa::path(
    get,
    path = "/api/{kind}",
    tag = "room_object",
    params(
        ("kind" = String, Path, description = "Kind route, e.g. lamps or sensors-co2"),
        ("search" = Option<String>, Query, description = "Filter by name, room, position or id"),
        ("room_id" = Option<i64>, Query, description = "Only objects in this room"),
        ("name" = Option<String>, Query, description = "Only objects with this exact custom name")
    ),
    responses(
        (status = 200, description = "Objects of the kind joined with room names", body = Vec<RoomObjectResponse>)
    )
)]
pub async fn get_objects(
    State(state): State<ObjectState>,
    Query(query): Query<ObjectQuery>,
) -> Result<Json<Vec<RoomObjectResponse>>, ApiError> {
    let objects = match (query.room_id, query.name.as_deref()) {
        (Some(room_id), _) => state.object_service.find_by_room_id(room_id).await?,
        (None, Some(name)) => state.object_service.find_by_custom_name(name).await?,
        (None, None) => state.object_service.find_all().await?,
    };
    let rooms = state.room_service.get_all_rooms().await?;

    let term = query.search.as_deref().unwrap_or_default();
    let responses = filter_rows(ObjectRow::join(objects, &rooms), term)
        .into_iter()
        .map(|row| row.into_response(state.kind()))
        .collect();

    Ok(Json(responses))
}

#[utoipa::path(
    post,
    path = "/api/{kind}",
    tag = "room_object",
    params(
        ("kind" = String, Path, description = "Kind route")
    ),
    request_body = RoomObjectRequest,
    responses(
        (status = 200, description = "Object created", body = RoomObjectResponse),
        (status = 400, description = "Missing name or room, invalid number"),
        (status = 404, description = "Room not found")
    )
)]
pub async fn create_object(
    State(state): State<ObjectState>,
    Json(body): Json<RoomObjectRequest>,
) -> Result<Json<RoomObjectResponse>, ApiError> {
    let kind = state.kind();
    let mut editor = ObjectEditor::open_add(kind, &state.room_service).await?;
    *editor.form_mut() = ObjectForm::from_request(&body);
    let rooms = editor.rooms().to_vec();

    let saved = editor
        .save(&state.object_service, || tracing::debug!("{} added", kind))
        .await?;

    Ok(Json(respond(kind, saved, &rooms)))
}

#[utoipa::path(
    get,
    path = "/api/{kind}/{object_id}",
    tag = "room_object",
    params(
        ("kind" = String, Path, description = "Kind route"),
        ("object_id" = i32, Path, description = "Object ID")
    ),
    responses(
        (status = 200, description = "Object found", body = RoomObjectResponse),
        (status = 404, description = "Object not found")
    )
)]
pub async fn get_object_by_id(
    State(state): State<ObjectState>,
    Path(object_id): Path<i32>,
) -> Result<Json<RoomObjectResponse>, ApiError> {
    let object = find_object(&state, object_id).await?;
    let rooms = state.room_service.get_all_rooms().await?;

    Ok(Json(respond(state.kind(), object, &rooms)))
}

#[utoipa::path(
    put,
    path = "/api/{kind}/{object_id}",
    tag = "room_object",
    params(
        ("kind" = String, Path, description = "Kind route"),
        ("object_id" = i32, Path, description = "Object ID")
    ),
    request_body = RoomObjectRequest,
    responses(
        (status = 200, description = "Object updated", body = RoomObjectResponse),
        (status = 400, description = "Missing name or room, invalid number"),
        (status = 404, description = "Object or room not found")
    )
)]
pub async fn update_object(
    State(state): State<ObjectState>,
    Path(object_id): Path<i32>,
    Json(body): Json<RoomObjectRequest>,
) -> Result<Json<RoomObjectResponse>, ApiError> {
    let kind = state.kind();
    let target = find_object(&state, object_id).await?;

    let mut editor = ObjectEditor::open_edit(kind, Some(target), &state.room_service).await?;
    *editor.form_mut() = ObjectForm::from_request(&body);
    let rooms = editor.rooms().to_vec();

    let saved = editor
        .save(&state.object_service, || tracing::debug!("{} {} edited", kind, object_id))
        .await?;

    Ok(Json(respond(kind, saved, &rooms)))
}

#[utoipa::path(
    delete,
    path = "/api/{kind}/{object_id}",
    tag = "room_object",
    params(
        ("kind" = String, Path, description = "Kind route"),
        ("object_id" = i32, Path, description = "Object ID")
    ),
    responses(
        (status = 204, description = "Object deleted"),
        (status = 404, description = "Object not found")
    )
)]
pub async fn delete_object(
    State(state): State<ObjectState>,
    Path(object_id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let kind = state.kind();
    let target = find_object(&state, object_id).await?;

    ObjectEditor::open_delete(kind, Some(target))?
        .confirm_delete(&state.object_service, || {
            tracing::debug!("{} {} deleted", kind, object_id)
        })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/{kind}",
    tag = "room_object",
    params(
        ("kind" = String, Path, description = "Kind route"),
        ("name" = Option<String>, Query, description = "Delete only objects with this custom name")
    ),
    responses(
        (status = 200, description = "Number of objects removed", body = DeletedResponse)
    )
)]
pub async fn delete_objects(
    State(state): State<ObjectState>,
    Query(query): Query<ObjectQuery>,
) -> Result<Json<DeletedResponse>, ApiError> {
    let deleted = match query.name.as_deref() {
        Some(name) => state.object_service.delete_by_custom_name(name).await?,
        None => state.object_service.delete_all().await?,
    };

    Ok(Json(DeletedResponse { deleted }))
}
