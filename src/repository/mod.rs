use std::collections::BTreeSet;

use crate::db::{DbConnection, DbPool};
use crate::domain::category::Category;
use crate::domain::product::{Product, ProductFilters, ProductSort};
use crate::domain::types::CategoryId;

pub mod cache;
pub mod category;
pub mod errors;
pub mod product;
#[cfg(test)]
pub mod test;

pub use cache::CachedRepository;
pub use errors::{RepositoryError, RepositoryResult};

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Repository shared by the HTTP handlers.
pub type StorefrontRepository = CachedRepository<DieselRepository>;

/// Query parameters used when listing the products of a category scope.
#[derive(Debug, Clone, Default)]
pub struct ProductListQuery {
    /// Categories whose products are included.
    pub category_ids: BTreeSet<CategoryId>,
    pub sort: ProductSort,
    pub filters: ProductFilters,
}

impl ProductListQuery {
    pub fn new(category_ids: BTreeSet<CategoryId>) -> Self {
        Self {
            category_ids,
            ..Default::default()
        }
    }
    pub fn sort(mut self, sort: ProductSort) -> Self {
        self.sort = sort;
        self
    }
    pub fn filters(mut self, filters: ProductFilters) -> Self {
        self.filters = filters;
        self
    }
}

/// Read-only operations for category entities.
pub trait CategoryReader {
    /// Full, unpaginated category snapshot ordered by id.
    fn list_all_categories(&self) -> RepositoryResult<Vec<Category>>;
}

/// Read-only operations for product entities.
pub trait ProductReader {
    /// List products belonging to any of the query's categories.
    fn list_products_by_category_ids(
        &self,
        query: &ProductListQuery,
    ) -> RepositoryResult<Vec<Product>>;
}
