//! # catalog-entity
//!
//! Domain entity models for the product catalog.

pub mod product;

pub use product::Product;
