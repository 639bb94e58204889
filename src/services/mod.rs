use thiserror::Error;

use crate::forms::products::ProductFormError;
use crate::repository::RepositoryError;

pub mod products;

/// Result type returned by the service layer.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Outcome of a failed service call, independent of the wire encoding.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Client-supplied identifier or payload was rejected.
    #[error("{0}")]
    InvalidInput(String),
    /// No record exists for the requested identifier.
    #[error("not found")]
    NotFound,
    /// Unexpected storage failure; details stay server-side.
    #[error("internal error: {0}")]
    Internal(#[from] RepositoryError),
}

impl From<ProductFormError> for ServiceError {
    fn from(err: ProductFormError) -> Self {
        ServiceError::InvalidInput(err.to_string())
    }
}
