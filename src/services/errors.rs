use thiserror::Error;

/// Generic error type used by service layer functions.
///
/// Every variant is an expected outcome that the storefront renders as an
/// empty or not-found state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// The listing path contains no category segments.
    #[error("invalid listing path")]
    InvalidPath,
    /// No category matches the listing path.
    #[error("category not found")]
    CategoryNotFound,
    /// The storage layer could not serve the request.
    #[error("storage unavailable")]
    StorageUnavailable,
    /// Query parameters failed validation.
    #[error("{0}")]
    Form(String),
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
