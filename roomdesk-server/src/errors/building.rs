use axum::http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum BuildingError {
    #[error("Building not found")]
    BuildingNotFound,

    #[error("Building name must not be blank")]
    InvalidName,

    #[error("Building still has rooms")]
    BuildingInUse,
}

impl BuildingError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            BuildingError::BuildingNotFound => StatusCode::NOT_FOUND,
            BuildingError::InvalidName => StatusCode::BAD_REQUEST,
            BuildingError::BuildingInUse => StatusCode::CONFLICT,
        }
    }
}
