//! Core library exports for the storefront service.
//!
//! The `data` feature exposes the domain layer (including the category path
//! resolver), Diesel models and schema. The default `server` feature adds
//! repositories, forms, services and the actix-web routes.

pub mod domain;
pub mod models;
pub mod schema;

#[cfg(feature = "server")]
pub mod db;
#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
mod error_conversions;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;
