//! Validation errors

use shared::error::AppError;
use thiserror::Error;

use crate::db::repository::RepoError;

#[derive(Debug, Error)]
pub enum ValidationError {
    /// A rule refused the order; the message is shown to the user as is
    #[error("{0}")]
    Rejected(String),

    /// The snapshot store failed while a rule was reading it
    #[error("Snapshot lookup failed: {0}")]
    Lookup(#[from] RepoError),
}

impl ValidationError {
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected(message.into())
    }

    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    /// Rejection message, if this is a rejection
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Rejected(message) => Some(message),
            Self::Lookup(_) => None,
        }
    }
}

pub type ValidationResult<T> = Result<T, ValidationError>;

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::Rejected(message) => AppError::validation(message),
            ValidationError::Lookup(e) => AppError::database(e.to_string()),
        }
    }
}
