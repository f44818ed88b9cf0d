//! In-memory product repository.
//!
//! Backed by a [`dashmap::DashMap`], with the same save/lookup semantics
//! as the PostgreSQL implementation. Used in tests and for running the
//! service without a database.

use async_trait::async_trait;
use dashmap::DashMap;

use catalog_core::result::AppResult;
use catalog_core::traits::Repository;
use catalog_core::types::ProductId;
use catalog_entity::Product;

use super::product::ProductRepository;

/// In-memory product repository over a concurrent map.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: DashMap<ProductId, Product>,
}

impl InMemoryProductRepository {
    /// Create an empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the repository holds no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[async_trait]
impl Repository<Product, ProductId> for InMemoryProductRepository {
    async fn save(&self, product: &Product) -> AppResult<Product> {
        let id = product.id.unwrap_or_else(ProductId::new);
        let stored = Product {
            id: Some(id),
            ..product.clone()
        };
        self.products.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: &ProductId) -> AppResult<Option<Product>> {
        Ok(self.products.get(id).map(|entry| entry.value().clone()))
    }

    async fn find_all(&self) -> AppResult<Vec<Product>> {
        Ok(self
            .products
            .iter()
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn exists_by_id(&self, id: &ProductId) -> AppResult<bool> {
        Ok(self.products.contains_key(id))
    }

    async fn delete_by_id(&self, id: &ProductId) -> AppResult<()> {
        self.products.remove(id);
        Ok(())
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Product>> {
        Ok(self
            .products
            .iter()
            .find(|entry| entry.value().name == name)
            .map(|entry| entry.value().clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_assigns_id_to_transient_product() {
        let repo = InMemoryProductRepository::new();
        let saved = repo.save(&Product::new("Widget", 9.99, 5)).await.unwrap();

        assert!(saved.is_persisted());
        assert_eq!(saved.name, "Widget");
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_save_with_id_overwrites() {
        let repo = InMemoryProductRepository::new();
        let saved = repo.save(&Product::new("Widget", 9.99, 5)).await.unwrap();

        let mut updated = saved.clone();
        updated.price = 4.99;
        let saved_again = repo.save(&updated).await.unwrap();

        assert_eq!(saved_again.id, saved.id);
        assert_eq!(repo.len(), 1);
        let found = repo.find_by_id(&saved.id.unwrap()).await.unwrap().unwrap();
        assert_eq!(found.price, 4.99);
    }

    #[tokio::test]
    async fn test_find_by_id_missing_is_none() {
        let repo = InMemoryProductRepository::new();
        let found = repo.find_by_id(&ProductId::new()).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_exists_and_delete() {
        let repo = InMemoryProductRepository::new();
        let saved = repo.save(&Product::new("Widget", 9.99, 5)).await.unwrap();
        let id = saved.id.unwrap();

        assert!(repo.exists_by_id(&id).await.unwrap());
        repo.delete_by_id(&id).await.unwrap();
        assert!(!repo.exists_by_id(&id).await.unwrap());

        // Deleting again is not an error.
        repo.delete_by_id(&id).await.unwrap();
    }

    #[tokio::test]
    async fn test_find_by_name() {
        let repo = InMemoryProductRepository::new();
        repo.save(&Product::new("Widget", 9.99, 5)).await.unwrap();
        repo.save(&Product::new("Gadget", 19.99, 2)).await.unwrap();

        let found = repo.find_by_name("Gadget").await.unwrap().unwrap();
        assert_eq!(found.name, "Gadget");
        assert!(repo.find_by_name("Sprocket").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_all_returns_everything() {
        let repo = InMemoryProductRepository::new();
        repo.save(&Product::new("Widget", 9.99, 5)).await.unwrap();
        repo.save(&Product::new("Gadget", 19.99, 2)).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 2);
    }
}
