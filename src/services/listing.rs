use crate::domain::category_path::{CategoryTree, ListingPath};
use crate::dto::categories::CategoryDto;
use crate::dto::listing::ListingDto;
use crate::dto::products::ProductDto;
use crate::forms::listing::ListingQueryPayload;
use crate::repository::{CategoryReader, ProductListQuery, ProductReader};

use super::{ServiceError, ServiceResult};

/// Core business logic for the storefront listing page.
///
/// Normalizes `raw_path`, resolves it against a fresh category snapshot and
/// loads the products of every related category with the requested sort and
/// filters. An empty product list is a valid listing. Repository errors are
/// logged and reported as [`ServiceError::StorageUnavailable`] so that the
/// HTTP route can stay a thin wrapper.
pub fn show_listing<R>(
    raw_path: &str,
    query: ListingQueryPayload,
    repo: &R,
) -> ServiceResult<ListingDto>
where
    R: CategoryReader + ProductReader,
{
    let path = ListingPath::parse(raw_path)?;

    let categories = match repo.list_all_categories() {
        Ok(categories) => categories,
        Err(e) => {
            log::error!("Failed to list categories: {e}");
            return Err(ServiceError::StorageUnavailable);
        }
    };

    let tree = CategoryTree::new(categories);
    let resolution = tree.resolve(&path)?;

    let product_query = ProductListQuery::new(resolution.related_ids.clone())
        .sort(query.sort)
        .filters(query.filters);
    let products = match repo.list_products_by_category_ids(&product_query) {
        Ok(products) => products,
        Err(e) => {
            log::error!("Failed to list products for category {}: {e}", resolution.matched_id);
            return Err(ServiceError::StorageUnavailable);
        }
    };

    let slugs: Vec<&str> = resolution.path.iter().map(|c| c.url.as_str()).collect();
    let breadcrumbs: Vec<CategoryDto> = resolution
        .path
        .iter()
        .enumerate()
        .map(|(depth, category)| CategoryDto::linked(category, slugs[..depth].iter().copied()))
        .collect();
    let category = breadcrumbs
        .last()
        .cloned()
        .ok_or(ServiceError::CategoryNotFound)?;
    let related_categories = resolution
        .immediate_children
        .iter()
        .map(|child| CategoryDto::linked(child, slugs.iter().copied()))
        .collect();

    Ok(ListingDto {
        category,
        breadcrumbs,
        related_categories,
        products: products.into_iter().map(ProductDto::from).collect(),
        sort: product_query.sort,
    })
}
