use serde::Serialize;

use crate::domain::product::Product;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDto {
    pub id: i32,
    pub category_id: i32,
    pub brand_id: Option<i32>,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub is_available: bool,
}

impl From<Product> for ProductDto {
    fn from(value: Product) -> Self {
        Self {
            id: value.id.get(),
            category_id: value.category_id.get(),
            brand_id: value.brand_id.map(|id| id.get()),
            name: value.name.into_inner(),
            description: value.description.map(|d| d.into_inner()),
            price: value.price.get(),
            is_available: value.is_available,
        }
    }
}
