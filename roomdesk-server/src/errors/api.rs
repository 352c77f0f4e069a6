use super::{BuildingError, EditorError, ManagerError, ObjectError, RoomError};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Building error: {0}")]
    BuildingError(#[from] BuildingError),

    #[error("Room error: {0}")]
    RoomError(#[from] RoomError),

    #[error("Object error: {0}")]
    ObjectError(#[from] ObjectError),

    #[error("Manager error: {0}")]
    ManagerError(#[from] ManagerError),

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    InternalError(#[from] anyhow::Error),
}

impl From<EditorError> for ApiError {
    fn from(error: EditorError) -> Self {
        match error {
            EditorError::Invalid(e) => ApiError::ObjectError(e),
            EditorError::Manager(e) => ApiError::ManagerError(e),
            EditorError::WrongMode(mode) => {
                ApiError::InternalError(anyhow::anyhow!("Editor is not open for {mode}"))
            }
        }
    }
}
