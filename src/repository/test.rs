use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use chrono::DateTime;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

use crate::domain::category::Category;
use crate::domain::product::Product;
use crate::domain::types::{
    BrandId, CategoryId, CategoryName, CategorySlug, ProductId, ProductName, ProductPrice,
    SortDirection, SortField,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{CategoryReader, ProductListQuery, ProductReader};

/// Simple in-memory repository used for unit tests.
pub struct TestRepository {
    categories: Vec<Category>,
    products: Vec<Product>,
    available: AtomicBool,
    category_reads: AtomicUsize,
}

impl Default for TestRepository {
    fn default() -> Self {
        Self {
            categories: vec![],
            products: vec![],
            available: AtomicBool::new(true),
            category_reads: AtomicUsize::new(0),
        }
    }
}

impl TestRepository {
    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_products(mut self, products: Vec<Product>) -> Self {
        self.products = products;
        self
    }

    /// Makes every read fail until [`Self::set_available`] is called.
    pub fn unavailable(self) -> Self {
        self.set_available(false);
        self
    }

    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Number of category snapshot reads served so far.
    pub fn category_reads(&self) -> usize {
        self.category_reads.load(Ordering::SeqCst)
    }

    fn ensure_available(&self) -> RepositoryResult<()> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(RepositoryError::Database(DieselError::DatabaseError(
                DatabaseErrorKind::ClosedConnection,
                Box::new("test repository is unavailable".to_string()),
            )))
        }
    }
}

impl CategoryReader for TestRepository {
    fn list_all_categories(&self) -> RepositoryResult<Vec<Category>> {
        self.category_reads.fetch_add(1, Ordering::SeqCst);
        self.ensure_available()?;
        Ok(self.categories.clone())
    }
}

impl ProductReader for TestRepository {
    fn list_products_by_category_ids(
        &self,
        query: &ProductListQuery,
    ) -> RepositoryResult<Vec<Product>> {
        self.ensure_available()?;

        let mut items: Vec<Product> = self
            .products
            .iter()
            .filter(|p| query.category_ids.contains(&p.category_id))
            .filter(|p| query.filters.matches(p))
            .cloned()
            .collect();

        items.sort_by(|a, b| {
            let ordering = match query.sort.field {
                SortField::Id => a.id.cmp(&b.id),
                SortField::Price => a.price.get().total_cmp(&b.price.get()),
                SortField::Name => a.name.cmp(&b.name),
            };
            let ordering = match query.sort.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            };
            ordering.then(a.id.cmp(&b.id))
        });

        Ok(items)
    }
}

pub fn sample_category(id: i32, parent_id: Option<i32>, url: &str) -> Category {
    Category {
        id: CategoryId::new(id).unwrap(),
        parent_id: parent_id.map(|p| CategoryId::new(p).unwrap()),
        name: CategoryName::new(url.to_uppercase()).unwrap(),
        url: CategorySlug::new(url).unwrap(),
        created_at: DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
        updated_at: DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
    }
}

/// `electronics` -> `computers` (-> `laptops`, `tablets`), `phones`.
pub fn sample_categories() -> Vec<Category> {
    vec![
        sample_category(1, None, "electronics"),
        sample_category(2, Some(1), "computers"),
        sample_category(3, Some(1), "phones"),
        sample_category(4, Some(2), "laptops"),
        sample_category(5, Some(2), "tablets"),
    ]
}

pub fn sample_product(
    id: i32,
    category_id: i32,
    brand_id: Option<i32>,
    price: f64,
    is_available: bool,
) -> Product {
    Product {
        id: ProductId::new(id).unwrap(),
        category_id: CategoryId::new(category_id).unwrap(),
        brand_id: brand_id.map(|b| BrandId::new(b).unwrap()),
        name: ProductName::new(format!("Product {id}")).unwrap(),
        description: None,
        price: ProductPrice::new(price).unwrap(),
        is_available,
        created_at: DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
        updated_at: DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
    }
}
