use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product::Product as DomainProduct;
use crate::domain::types::{ProductDescription, ProductName, ProductPrice, TypeConstraintError};

/// Diesel model representing the `products` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::products)]
pub struct Product {
    pub id: i32,
    pub category_id: i32,
    pub brand_id: Option<i32>,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub is_available: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Product> for DomainProduct {
    type Error = TypeConstraintError;

    fn try_from(product: Product) -> Result<Self, Self::Error> {
        // Blank descriptions count as absent.
        let description = product
            .description
            .filter(|d| !d.trim().is_empty())
            .map(ProductDescription::new)
            .transpose()?;

        Ok(Self {
            id: product.id.try_into()?,
            category_id: product.category_id.try_into()?,
            brand_id: product.brand_id.map(TryInto::try_into).transpose()?,
            name: ProductName::new(product.name)?,
            description,
            price: ProductPrice::new(product.price)?,
            is_available: product.is_available,
            created_at: product.created_at,
            updated_at: product.updated_at,
        })
    }
}
