use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    BrandId, CategoryId, ProductDescription, ProductId, ProductName, ProductPrice, SortDirection,
    SortField,
};

/// A product offered on the storefront.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub category_id: CategoryId,
    pub brand_id: Option<BrandId>,
    pub name: ProductName,
    pub description: Option<ProductDescription>,
    pub price: ProductPrice,
    pub is_available: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Ordering applied to a product listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSort {
    pub field: SortField,
    pub direction: SortDirection,
}

impl ProductSort {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }
}

/// Inclusive price bounds. A missing bound is unbounded on that side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Option<ProductPrice>,
    pub max: Option<ProductPrice>,
}

impl PriceRange {
    /// Builds a range from raw bounds where zero means "no bound".
    ///
    /// An all-zero range is therefore no filter at all.
    pub fn from_bounds(min: ProductPrice, max: ProductPrice) -> Self {
        let bound = |value: ProductPrice| (value.get() > 0.0).then_some(value);
        Self {
            min: bound(min),
            max: bound(max),
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    pub fn contains(&self, price: ProductPrice) -> bool {
        self.min.is_none_or(|min| price.get() >= min.get())
            && self.max.is_none_or(|max| price.get() <= max.get())
    }
}

/// Optional restrictions applied on top of the category scope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductFilters {
    /// Allowed brands; empty means every brand.
    pub brand_ids: Vec<BrandId>,
    /// Required availability flag; `None` keeps both.
    pub available: Option<bool>,
    pub price: PriceRange,
}

impl ProductFilters {
    /// Whether `product` passes every configured filter.
    pub fn matches(&self, product: &Product) -> bool {
        let brand_ok = self.brand_ids.is_empty()
            || product
                .brand_id
                .is_some_and(|brand_id| self.brand_ids.contains(&brand_id));
        let availability_ok = self
            .available
            .is_none_or(|available| product.is_available == available);

        brand_ok && availability_ok && self.price.contains(product.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn price(value: f64) -> ProductPrice {
        ProductPrice::new(value).unwrap()
    }

    #[test]
    fn zero_bounds_are_unbounded() {
        let range = PriceRange::from_bounds(price(0.0), price(0.0));
        assert!(range.is_unbounded());
        assert!(range.contains(price(1_000_000.0)));
    }

    #[test]
    fn non_zero_bounds_are_inclusive() {
        let range = PriceRange::from_bounds(price(10.0), price(20.0));
        assert!(range.contains(price(10.0)));
        assert!(range.contains(price(20.0)));
        assert!(!range.contains(price(9.99)));
        assert!(!range.contains(price(20.01)));
    }

    #[test]
    fn single_zero_bound_is_open_on_that_side() {
        let range = PriceRange::from_bounds(price(0.0), price(50.0));
        assert_eq!(range.min, None);
        assert!(range.contains(price(0.0)));
        assert!(!range.contains(price(51.0)));
    }
}
