use crate::domain::category_path::CategoryTree;
use crate::dto::categories::CategoryDto;
use crate::repository::CategoryReader;

use super::{ServiceError, ServiceResult};

/// Core business logic for the storefront home page.
///
/// Returns the top-level category groups in table order, each linking to its
/// listing page.
pub fn show_index<R>(repo: &R) -> ServiceResult<Vec<CategoryDto>>
where
    R: CategoryReader,
{
    let categories = match repo.list_all_categories() {
        Ok(categories) => categories,
        Err(e) => {
            log::error!("Failed to list categories: {e}");
            return Err(ServiceError::StorageUnavailable);
        }
    };

    let tree = CategoryTree::new(categories);
    Ok(tree.roots().map(CategoryDto::from).collect())
}
