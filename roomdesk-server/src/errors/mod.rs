pub mod api;
pub mod building;
pub mod editor;
pub mod manager;
pub mod object;
pub mod room;

pub use api::ApiError;
pub use building::BuildingError;
pub use editor::EditorError;
pub use manager::ManagerError;
pub use object::ObjectError;
pub use room::RoomError;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use uuid::Uuid;

fn internal_error(kind: &str, error: &dyn std::fmt::Display) -> (StatusCode, String, Option<String>) {
    let error_id = Uuid::new_v4();
    tracing::error!(error_id = ?error_id, "{} error: {}", kind, error);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error".to_string(),
        Some(error_id.to_string()),
    )
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Extract status code and error message from the specific error type
        let (status, error_message, log_message) = match self {
            ApiError::BuildingError(e) => (e.status_code(), e.to_string(), None),
            ApiError::RoomError(e) => (e.status_code(), e.to_string(), None),
            ApiError::ObjectError(e) => (e.status_code(), e.to_string(), None),
            ApiError::ManagerError(ManagerError::Database(e)) => internal_error("Database", &e),
            ApiError::ManagerError(e) => (e.status_code(), e.to_string(), None),
            ApiError::DatabaseError(e) => internal_error("Database", &e),
            ApiError::InternalError(e) => internal_error("Internal", &e),
        };

        let mut error_obj = json!({
            "code": status.as_u16(),
            "message": error_message
        });

        // Add error_id if available (for internal errors)
        if let Some(error_id) = log_message {
            error_obj["error_id"] = json!(error_id);
        }

        let body = Json(json!({
            "error": error_obj
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let response = ApiError::from(ManagerError::not_found("lamp", 999)).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_validation_maps_to_400() {
        let response = ApiError::from(EditorError::from(ObjectError::MissingName)).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_opaque_database_error_maps_to_500() {
        let error = ManagerError::from(sqlx::Error::PoolTimedOut);
        assert!(matches!(error, ManagerError::Database(_)));

        let response = ApiError::from(error).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
