pub mod errors;
pub mod listing;
pub mod main;

pub use errors::{ServiceError, ServiceResult};
