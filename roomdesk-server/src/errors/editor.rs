use super::{ManagerError, ObjectError};

#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    #[error(transparent)]
    Invalid(#[from] ObjectError),

    #[error(transparent)]
    Manager(#[from] ManagerError),

    #[error("Editor is not open for {0}")]
    WrongMode(&'static str),
}
