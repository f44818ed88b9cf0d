//! Product repository trait and PostgreSQL implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use catalog_core::config::database::DatabaseConfig;
use catalog_core::error::{AppError, ErrorKind};
use catalog_core::result::AppResult;
use catalog_core::traits::Repository;
use catalog_core::types::ProductId;
use catalog_entity::Product;

use crate::{connection, migration};

/// Persistence abstraction for products.
///
/// Extends the generic [`Repository`] CRUD surface with the
/// product-specific name lookup. The service layer depends on this
/// trait only, so storage backends (and test mocks) are swappable.
#[async_trait]
pub trait ProductRepository: Repository<Product, ProductId> {
    /// Find a product by exact name. Returns the first match, if any.
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Product>>;
}

/// Repository for product CRUD and query operations, backed by PostgreSQL.
#[derive(Debug, Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    /// Create a new product repository over an existing pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a pool from configuration, run pending migrations, and
    /// return a ready-to-use repository.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        let pool = connection::connect(config).await?;
        migration::run_migrations(&pool).await?;
        Ok(Self::new(pool))
    }
}

#[async_trait]
impl Repository<Product, ProductId> for PgProductRepository {
    async fn save(&self, product: &Product) -> AppResult<Product> {
        // Transient records get their identifier here; records that
        // already carry one are overwritten in full.
        let id = product.id.unwrap_or_else(ProductId::new);

        sqlx::query_as::<_, Product>(
            "INSERT INTO products (id, name, price, quantity) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (id) DO UPDATE \
             SET name = EXCLUDED.name, price = EXCLUDED.price, quantity = EXCLUDED.quantity \
             RETURNING *",
        )
        .bind(id)
        .bind(&product.name)
        .bind(product.price)
        .bind(product.quantity)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to save product", e))
    }

    async fn find_by_id(&self, id: &ProductId) -> AppResult<Option<Product>> {
        sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find product by id", e)
            })
    }

    async fn find_all(&self) -> AppResult<Vec<Product>> {
        sqlx::query_as::<_, Product>("SELECT * FROM products")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list products", e))
    }

    async fn exists_by_id(&self, id: &ProductId) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM products WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to check product existence", e)
            })
    }

    async fn delete_by_id(&self, id: &ProductId) -> AppResult<()> {
        // Deleting an absent id is not an error.
        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete product", e)
            })?;
        Ok(())
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Product>> {
        sqlx::query_as::<_, Product>("SELECT * FROM products WHERE name = $1 LIMIT 1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find product by name", e)
            })
    }
}
