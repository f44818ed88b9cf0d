//! Product entity model.

use serde::{Deserialize, Serialize};

use catalog_core::types::ProductId;

/// A product in the catalog.
///
/// The record is flat: no relationships to other entities. Price and
/// quantity must be non-negative before any persistence write; the
/// service layer enforces this and the database schema backs it with
/// CHECK constraints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Unique product identifier. `None` until first save; assigned by
    /// the store.
    pub id: Option<ProductId>,
    /// Product name.
    pub name: String,
    /// Unit price. Non-negative once persisted.
    pub price: f64,
    /// Units in stock. Non-negative once persisted.
    pub quantity: i32,
}

impl Product {
    /// Create a transient product with no identifier yet.
    pub fn new(name: impl Into<String>, price: f64, quantity: i32) -> Self {
        Self {
            id: None,
            name: name.into(),
            price,
            quantity,
        }
    }

    /// Whether this record has been persisted (has a store-assigned id).
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_product_is_transient() {
        let product = Product::new("Widget", 9.99, 5);
        assert!(!product.is_persisted());
        assert_eq!(product.name, "Widget");
        assert_eq!(product.price, 9.99);
        assert_eq!(product.quantity, 5);
    }

    #[test]
    fn test_persisted_after_id_assignment() {
        let mut product = Product::new("Widget", 9.99, 5);
        product.id = Some(ProductId::new());
        assert!(product.is_persisted());
    }

    #[test]
    fn test_serde_round_trip() {
        let mut product = Product::new("Widget", 9.99, 5);
        product.id = Some(ProductId::new());

        let json = serde_json::to_string(&product).unwrap();
        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(product, back);
    }
}
