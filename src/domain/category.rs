use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryId, CategoryName, CategorySlug};

/// Node of the storefront category forest.
///
/// Categories are stored as a flat table: `parent_id` points at the parent
/// node and `None` marks a top-level group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub parent_id: Option<CategoryId>,
    pub name: CategoryName,
    /// Slug used in listing paths, unique among siblings only.
    pub url: CategorySlug,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Category {
    /// Whether this category is a top-level group.
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}
