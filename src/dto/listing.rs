use serde::Serialize;

use crate::domain::product::ProductSort;
use crate::dto::categories::CategoryDto;
use crate::dto::products::ProductDto;
use crate::services::{ServiceError, ServiceResult};

/// Everything the storefront listing page renders.
#[derive(Debug, Clone, Serialize)]
pub struct ListingDto {
    /// The matched category.
    pub category: CategoryDto,
    /// Resolved path, root to leaf, including `category`.
    pub breadcrumbs: Vec<CategoryDto>,
    /// Direct children of `category`.
    pub related_categories: Vec<CategoryDto>,
    pub products: Vec<ProductDto>,
    pub sort: ProductSort,
}

/// Body of the listing API: either the listing or an error message.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ListingResponse {
    Found {
        products: Vec<ProductDto>,
        related_categories: Vec<CategoryDto>,
    },
    Error {
        error: String,
    },
}

impl From<ListingDto> for ListingResponse {
    fn from(value: ListingDto) -> Self {
        Self::Found {
            products: value.products,
            related_categories: value.related_categories,
        }
    }
}

impl From<ServiceError> for ListingResponse {
    fn from(value: ServiceError) -> Self {
        Self::Error {
            error: value.to_string(),
        }
    }
}

impl From<ServiceResult<ListingDto>> for ListingResponse {
    fn from(value: ServiceResult<ListingDto>) -> Self {
        match value {
            Ok(listing) => listing.into(),
            Err(err) => err.into(),
        }
    }
}
