//! Product catalog service — validation and existence checks over the
//! injected repository.

use std::sync::Arc;

use tracing::{debug, info};

use catalog_core::error::AppError;
use catalog_core::result::AppResult;
use catalog_core::types::ProductId;
use catalog_database::ProductRepository;
use catalog_entity::Product;

/// Validates incoming product data and delegates storage operations to
/// the injected repository.
///
/// Every operation is a single synchronous request-response; the
/// repository is responsible for any transactional discipline.
#[derive(Clone)]
pub struct ProductCatalogService {
    /// Product repository.
    repo: Arc<dyn ProductRepository>,
}

impl ProductCatalogService {
    /// Creates a new product catalog service.
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { repo }
    }

    /// Persists a product after validating its price and quantity.
    ///
    /// Validation runs before any repository call: a negative price or
    /// quantity never reaches the store. Returns the persisted record,
    /// with its store-assigned identifier on first save.
    pub async fn save(&self, product: &Product) -> AppResult<Product> {
        if product.price < 0.0 {
            return Err(AppError::validation("Price cannot be negative"));
        }
        if product.quantity < 0 {
            return Err(AppError::validation("Quantity cannot be negative"));
        }

        let saved = self.repo.save(product).await?;
        info!(product_id = ?saved.id, name = %saved.name, "Product saved");
        Ok(saved)
    }

    /// Fetches a product by identifier, failing if it does not exist.
    pub async fn get_by_id(&self, id: ProductId) -> AppResult<Product> {
        debug!(product_id = %id, "Fetching product by id");
        self.repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| AppError::not_found("Product not found"))
    }

    /// Lists all products, in whatever order the repository provides.
    pub async fn get_all(&self) -> AppResult<Vec<Product>> {
        self.repo.find_all().await
    }

    /// Overwrites an existing product in full.
    ///
    /// Fails with a not-found error when the record carries no
    /// identifier or no stored record matches it; otherwise delegates
    /// to [`save`](Self::save), which re-applies the sign checks.
    pub async fn update(&self, product: &Product) -> AppResult<Product> {
        let id = product
            .id
            .ok_or_else(|| AppError::not_found("Product not found"))?;

        if !self.repo.exists_by_id(&id).await? {
            return Err(AppError::not_found("Product not found"));
        }

        self.save(product).await
    }

    /// Deletes a product by identifier.
    ///
    /// Deleting an unknown identifier is not an error; the call always
    /// reaches the repository.
    pub async fn delete(&self, id: ProductId) -> AppResult<()> {
        self.repo.delete_by_id(&id).await?;
        info!(product_id = %id, "Product deleted");
        Ok(())
    }

    /// Fetches a product by exact name.
    ///
    /// Unlike [`get_by_id`](Self::get_by_id), an absent name yields
    /// `Ok(None)` rather than a not-found error.
    pub async fn get_by_name(&self, name: &str) -> AppResult<Option<Product>> {
        debug!(name, "Fetching product by name");
        self.repo.find_by_name(name).await
    }
}
