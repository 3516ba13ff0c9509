//! Error conversion glue between layers.
//!
//! The domain layer must not depend on service/repository error types, so the
//! conversions live here.

use crate::domain::category_path::ResolveError;
use crate::domain::types::TypeConstraintError;
use crate::forms::listing::ListingQueryFormError;
use crate::repository::errors::RepositoryError;
use crate::services::errors::ServiceError;

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}

impl From<ResolveError> for ServiceError {
    fn from(val: ResolveError) -> Self {
        match val {
            ResolveError::InvalidPath => ServiceError::InvalidPath,
            ResolveError::CategoryNotFound => ServiceError::CategoryNotFound,
        }
    }
}

impl From<ListingQueryFormError> for ServiceError {
    fn from(val: ListingQueryFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}
