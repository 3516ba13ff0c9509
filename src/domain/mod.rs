//! Domain entities, value objects and the category path resolver.

pub mod category;
pub mod category_path;
pub mod product;
pub mod types;
