use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::configs::{SchemaManager, Settings, Storage};
use crate::handles::*;
use crate::services::{
    BuildingService, DashboardService, RoomObjectService, RoomService, RoomTypeService,
};

pub async fn create_app(settings: &Arc<Settings>) -> Result<Router, sqlx::Error> {
    let storage = Arc::new(Storage::new(settings.database.clone(), SchemaManager::default()).await?);

    Ok(create_router(storage))
}

pub fn create_router(storage: Arc<Storage>) -> Router {
    let building_service = Arc::new(BuildingService::new(storage.clone()));
    let room_type_service = Arc::new(RoomTypeService::new(storage.clone()));
    let room_service = Arc::new(RoomService::new(storage.clone()));
    let object_services = RoomObjectService::all(storage.clone());

    let dashboard_service = Arc::new(DashboardService::new(
        building_service.clone(),
        room_service.clone(),
        object_services.clone(),
    ));

    let objects = object_services
        .into_iter()
        .fold(Router::new(), |router, object_service| {
            router.merge(room_object_router(ObjectState {
                object_service,
                room_service: room_service.clone(),
            }))
        });

    Router::new()
        .merge(building_router(BuildingState {
            building_service: building_service.clone(),
            room_service: room_service.clone(),
        }))
        .merge(room_type_router(RoomTypeState {
            room_type_service: room_type_service.clone(),
        }))
        .merge(room_router(RoomState {
            room_service: room_service.clone(),
            building_service,
            room_type_service,
        }))
        .merge(objects)
        .merge(dashboard_router(DashboardState { dashboard_service }))
        .merge(docs_router())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
