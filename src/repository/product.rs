use diesel::prelude::*;

use crate::domain::product::Product;
use crate::domain::types::{SortDirection, SortField};
use crate::models::product::Product as DbProduct;
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, ProductListQuery, ProductReader};

impl ProductReader for DieselRepository {
    fn list_products_by_category_ids(
        &self,
        query: &ProductListQuery,
    ) -> RepositoryResult<Vec<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let category_ids: Vec<i32> = query.category_ids.iter().map(|id| id.get()).collect();
        let mut items = products::table
            .filter(products::category_id.eq_any(category_ids))
            .into_boxed::<diesel::sqlite::Sqlite>();

        let filters = &query.filters;
        if !filters.brand_ids.is_empty() {
            let brand_ids: Vec<Option<i32>> =
                filters.brand_ids.iter().map(|id| Some(id.get())).collect();
            items = items.filter(products::brand_id.eq_any(brand_ids));
        }
        if let Some(available) = filters.available {
            items = items.filter(products::is_available.eq(available));
        }
        if let Some(min) = filters.price.min {
            items = items.filter(products::price.ge(min.get()));
        }
        if let Some(max) = filters.price.max {
            items = items.filter(products::price.le(max.get()));
        }

        items = match (query.sort.field, query.sort.direction) {
            (SortField::Id, SortDirection::Asc) => items.order(products::id.asc()),
            (SortField::Id, SortDirection::Desc) => items.order(products::id.desc()),
            (SortField::Price, SortDirection::Asc) => items.order(products::price.asc()),
            (SortField::Price, SortDirection::Desc) => items.order(products::price.desc()),
            (SortField::Name, SortDirection::Asc) => items.order(products::name.asc()),
            (SortField::Name, SortDirection::Desc) => items.order(products::name.desc()),
        };

        // Equal prices and names fall back to id order.
        let items = items
            .then_order_by(products::id.asc())
            .load::<DbProduct>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Product>, _>>()?;

        Ok(items)
    }
}
