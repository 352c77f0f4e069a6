use axum::routing::get;
use axum::{Json, Router};
use roomdesk_api::models::*;
use utoipa::OpenApi;

use crate::handles::*;

#[derive(OpenApi)]
#[openapi(
    paths(
        get_buildings,
        create_building,
        get_building_by_id,
        update_building,
        delete_building,
        get_building_rooms,
        get_room_types,
        create_room_type,
        get_room_type_by_id,
        update_room_type,
        delete_room_type,
        get_rooms,
        create_room,
        get_room_by_id,
        update_room,
        delete_room,
        get_objects,
        create_object,
        get_object_by_id,
        update_object,
        delete_object,
        delete_objects,
        get_dashboard
    ),
    components(schemas(
        BuildingRequest,
        BuildingResponse,
        RoomTypeRequest,
        RoomTypeResponse,
        RoomRequest,
        RoomResponse,
        ObjectKind,
        PositionData,
        SizeData,
        RoomObjectRequest,
        RoomObjectResponse,
        DeletedResponse,
        KindCountResponse,
        DashboardResponse
    )),
    tags(
        (name = "building", description = "Buildings"),
        (name = "room_type", description = "Room types"),
        (name = "room", description = "Rooms"),
        (name = "room_object", description = "Devices and furniture, one route per kind"),
        (name = "dashboard", description = "Inventory counts")
    )
)]
pub struct ApiDoc;

pub fn docs_router() -> Router {
    Router::new().route("/api/docs/openapi.json", get(get_openapi))
}

pub async fn get_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
