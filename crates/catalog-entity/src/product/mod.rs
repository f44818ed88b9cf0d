//! Product entity.

pub mod model;

pub use model::Product;
