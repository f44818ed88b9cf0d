//! Core abstractions implemented by other catalog crates.

pub mod repository;

pub use repository::Repository;
