//! # catalog-database
//!
//! PostgreSQL connection management and concrete repository
//! implementations for the product catalog.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use repositories::product::{PgProductRepository, ProductRepository};
