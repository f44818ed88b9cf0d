//! Concrete repository implementations.

pub mod memory;
pub mod product;

pub use memory::InMemoryProductRepository;
pub use product::{PgProductRepository, ProductRepository};
