use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::RwLock;

use crate::domain::category::Category;
use crate::domain::product::Product;
use crate::repository::errors::RepositoryResult;
use crate::repository::{CategoryReader, ProductListQuery, ProductReader};

struct Snapshot {
    fetched_at: Instant,
    categories: Arc<Vec<Category>>,
}

/// Repository wrapper that keeps the category snapshot for a fixed TTL.
///
/// Product queries always go to the inner repository. Failed category reads
/// are never cached, and a zero TTL turns the cache off.
pub struct CachedRepository<R> {
    inner: R,
    ttl: Duration,
    snapshot: RwLock<Option<Snapshot>>,
}

impl<R> CachedRepository<R> {
    pub fn new(inner: R, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            snapshot: RwLock::new(None),
        }
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }

    fn fresh_snapshot(&self) -> Option<Arc<Vec<Category>>> {
        let guard = self.snapshot.read();
        guard
            .as_ref()
            .filter(|snapshot| snapshot.fetched_at.elapsed() < self.ttl)
            .map(|snapshot| Arc::clone(&snapshot.categories))
    }
}

impl<R: CategoryReader> CategoryReader for CachedRepository<R> {
    fn list_all_categories(&self) -> RepositoryResult<Vec<Category>> {
        if let Some(categories) = self.fresh_snapshot() {
            return Ok(categories.as_ref().clone());
        }

        let categories = self.inner.list_all_categories()?;
        if !self.ttl.is_zero() {
            log::debug!("Caching {} categories for {:?}", categories.len(), self.ttl);
            *self.snapshot.write() = Some(Snapshot {
                fetched_at: Instant::now(),
                categories: Arc::new(categories.clone()),
            });
        }

        Ok(categories)
    }
}

impl<R: ProductReader> ProductReader for CachedRepository<R> {
    fn list_products_by_category_ids(
        &self,
        query: &ProductListQuery,
    ) -> RepositoryResult<Vec<Product>> {
        self.inner.list_products_by_category_ids(query)
    }
}
