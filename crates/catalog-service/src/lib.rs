//! # catalog-service
//!
//! Business logic services for the product catalog. The service layer
//! validates incoming data and delegates storage to an injected
//! [`ProductRepository`](catalog_database::ProductRepository).

pub mod product;

pub use product::ProductCatalogService;
