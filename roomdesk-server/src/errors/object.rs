use axum::http::StatusCode;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ObjectError {
    #[error("Object not found")]
    ObjectNotFound,

    #[error("No object selected")]
    NoSelection,

    #[error("Name is required")]
    MissingName,

    #[error("Room is required")]
    MissingRoom,

    #[error("Room {0} does not exist")]
    UnknownRoom(i32),

    #[error("Field {0} is not a valid number")]
    InvalidNumber(&'static str),

    #[error("Field {0} must be a finite number")]
    NonFiniteNumber(&'static str),

    #[error("Field {0} must not be negative")]
    NegativeSize(&'static str),
}

impl ObjectError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ObjectError::ObjectNotFound => StatusCode::NOT_FOUND,
            ObjectError::NoSelection => StatusCode::BAD_REQUEST,
            ObjectError::MissingName => StatusCode::BAD_REQUEST,
            ObjectError::MissingRoom => StatusCode::BAD_REQUEST,
            ObjectError::UnknownRoom(_) => StatusCode::NOT_FOUND,
            ObjectError::InvalidNumber(_) => StatusCode::BAD_REQUEST,
            ObjectError::NonFiniteNumber(_) => StatusCode::BAD_REQUEST,
            ObjectError::NegativeSize(_) => StatusCode::BAD_REQUEST,
        }
    }
}
