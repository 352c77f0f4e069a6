use axum::http::StatusCode;

/// Failure of a manager call.
#[derive(Debug, thiserror::Error)]
pub enum ManagerError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    #[error("Referenced row is missing or still in use")]
    Reference(#[source] sqlx::Error),

    #[error("A row with the same unique value already exists")]
    Duplicate(#[source] sqlx::Error),

    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

impl ManagerError {
    pub fn not_found(entity: &'static str, id: i32) -> Self {
        ManagerError::NotFound { entity, id }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ManagerError::NotFound { .. })
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ManagerError::NotFound { .. } => StatusCode::NOT_FOUND,
            ManagerError::Reference(_) => StatusCode::CONFLICT,
            ManagerError::Duplicate(_) => StatusCode::CONFLICT,
            ManagerError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for ManagerError {
    fn from(error: sqlx::Error) -> Self {
        match &error {
            sqlx::Error::Database(e) if e.is_foreign_key_violation() => {
                ManagerError::Reference(error)
            }
            sqlx::Error::Database(e) if e.is_unique_violation() => ManagerError::Duplicate(error),
            _ => ManagerError::Database(error),
        }
    }
}
