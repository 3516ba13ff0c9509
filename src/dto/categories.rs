use serde::Serialize;

use crate::domain::category::Category;
use crate::domain::category_path::listing_href;

/// Category link rendered in navigation, breadcrumbs and related lists.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryDto {
    pub id: i32,
    pub name: String,
    pub url: String,
    /// Listing page of this category.
    pub href: String,
}

impl CategoryDto {
    /// Builds a link to `category` nested under the `parents` slugs.
    pub fn linked<'a>(category: &'a Category, parents: impl IntoIterator<Item = &'a str>) -> Self {
        let href = listing_href(
            parents
                .into_iter()
                .chain(std::iter::once(category.url.as_str())),
        );
        Self {
            id: category.id.get(),
            name: category.name.as_str().to_string(),
            url: category.url.as_str().to_string(),
            href,
        }
    }
}

impl From<&Category> for CategoryDto {
    fn from(value: &Category) -> Self {
        Self::linked(value, std::iter::empty())
    }
}
