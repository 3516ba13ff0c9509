use std::fmt;
use std::str::FromStr;

use actix_web::web;
use serde::{Deserialize, Deserializer, de};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::product::{PriceRange, ProductFilters, ProductSort};
use crate::domain::types::{BrandId, ProductPrice, SortDirection, SortField, TypeConstraintError};

/// Query string accepted by the listing page and API.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ListingQueryForm {
    pub sort: Option<String>,
    pub order: Option<String>,
    /// Comma-separated brand ids.
    pub brands: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub available: Option<bool>,
    /// Empty input boxes arrive as `min_price=`.
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(range(min = 0.0))]
    pub min_price: Option<f64>,
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(range(min = 0.0))]
    pub max_price: Option<f64>,
}

fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    match non_blank(value.as_deref()) {
        Some(value) => value.parse().map(Some).map_err(de::Error::custom),
        None => Ok(None),
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingQueryPayload {
    pub sort: ProductSort,
    pub filters: ProductFilters,
}

#[derive(Debug, Error)]
pub enum ListingQueryFormError {
    #[error("Listing query is malformed: {0}")]
    Malformed(String),
    #[error("Listing query validation failed: {0}")]
    Validation(String),
    #[error("Listing query contains invalid data: {0}")]
    TypeConstraint(String),
    #[error("Listing query has a minimum price above its maximum price")]
    InvalidPriceRange,
}

impl From<ValidationErrors> for ListingQueryFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for ListingQueryFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_brand_ids(value: &str) -> Result<Vec<BrandId>, TypeConstraintError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            let raw: i32 = part
                .parse()
                .map_err(|_| TypeConstraintError::InvalidValue(format!("brand id: {part}")))?;
            BrandId::new(raw)
        })
        .collect()
}

impl ListingQueryPayload {
    /// Parses and validates a raw query string such as `sort=price&order=desc`.
    pub fn from_query(query: &str) -> Result<Self, ListingQueryFormError> {
        let web::Query(form) = web::Query::<ListingQueryForm>::from_query(query)
            .map_err(|e| ListingQueryFormError::Malformed(e.to_string()))?;
        form.try_into()
    }
}

impl TryFrom<ListingQueryForm> for ListingQueryPayload {
    type Error = ListingQueryFormError;

    fn try_from(value: ListingQueryForm) -> Result<Self, Self::Error> {
        value.validate()?;

        let field = non_blank(value.sort.as_deref())
            .map(SortField::try_from)
            .transpose()?
            .unwrap_or_default();
        let direction = non_blank(value.order.as_deref())
            .map(SortDirection::try_from)
            .transpose()?
            .unwrap_or_default();

        let brand_ids = match non_blank(value.brands.as_deref()) {
            Some(brands) => parse_brand_ids(brands)?,
            None => vec![],
        };

        let min = ProductPrice::new(value.min_price.unwrap_or(0.0))?;
        let max = ProductPrice::new(value.max_price.unwrap_or(0.0))?;
        let price = PriceRange::from_bounds(min, max);
        if let (Some(min), Some(max)) = (price.min, price.max) {
            if min.get() > max.get() {
                return Err(ListingQueryFormError::InvalidPriceRange);
            }
        }

        Ok(Self {
            sort: ProductSort::new(field, direction),
            filters: ProductFilters {
                brand_ids,
                available: value.available,
                price,
            },
        })
    }
}
