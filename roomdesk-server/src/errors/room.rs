use axum::http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum RoomError {
    #[error("Room not found")]
    RoomNotFound,

    #[error("Room type not found")]
    RoomTypeNotFound,

    #[error("Room type name already exists")]
    RoomTypeNameExists,

    #[error("Room name must not be blank")]
    InvalidName,

    #[error("Invalid room dimensions")]
    InvalidDimensions,

    #[error("Room still holds objects")]
    RoomInUse,
}

impl RoomError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RoomError::RoomNotFound => StatusCode::NOT_FOUND,
            RoomError::RoomTypeNotFound => StatusCode::NOT_FOUND,
            RoomError::RoomTypeNameExists => StatusCode::CONFLICT,
            RoomError::InvalidName => StatusCode::BAD_REQUEST,
            RoomError::InvalidDimensions => StatusCode::BAD_REQUEST,
            RoomError::RoomInUse => StatusCode::CONFLICT,
        }
    }
}
