use sea_orm::DbErr;
use thiserror::Error;

/// Failure kinds surfaced by the ticket and comment services.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Structural validation failed before the store was touched.
    #[error("{0}")]
    InvalidInput(String),

    /// The referenced ticket does not exist.
    #[error("Ticket not found")]
    NotFound,

    /// Anything raised by the persistence layer.
    #[error("store failure: {0}")]
    Store(#[from] DbErr),
}

impl ServiceError {
    pub fn invalid(message: impl Into<String>) -> Self {
        ServiceError::InvalidInput(message.into())
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
