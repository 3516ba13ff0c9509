//! Serializable views handed to templates and API clients.

pub mod categories;
pub mod listing;
pub mod products;
