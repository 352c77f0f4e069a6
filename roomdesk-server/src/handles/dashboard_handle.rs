use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use roomdesk_api::models::DashboardResponse;

use crate::services::DashboardService;

#[derive(Clone)]
pub struct DashboardState {
    pub dashboard_service: Arc<DashboardService>,
}

pub fn dashboard_router(dashboard_state: DashboardState) -> Router {
    Router::new()
        .route("/api/dashboard", get(get_dashboard))
        .with_state(dashboard_state)
}

#[utoipa::path(
    get,
    path = "/api/dashboard",
    tag = "dashboard",
    responses(
        (status = 200, description = "Inventory counts; unreadable figures are reported as zero", body = DashboardResponse)
    )
)]
pub async fn get_dashboard(State(state): State<DashboardState>) -> Json<DashboardResponse> {
    Json(state.dashboard_service.kpis().await.into())
}
