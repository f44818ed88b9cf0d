//! # catalog-core
//!
//! Core crate for the product catalog. Contains the repository trait,
//! configuration schemas, typed identifiers, the logging bootstrap, and
//! the unified error system.
//!
//! This crate has **no** internal dependencies on other catalog crates.

pub mod config;
pub mod error;
pub mod logging;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
