//! Generic repository trait for persistence access.

use async_trait::async_trait;

use crate::result::AppResult;

/// Generic CRUD repository trait.
///
/// This trait is defined with generic type parameters so that each
/// entity can have a strongly typed repository. Entity-specific
/// query methods are defined on the concrete repository traits.
#[async_trait]
pub trait Repository<Entity, Id>: Send + Sync + 'static
where
    Entity: Send + Sync + 'static,
    Id: Send + Sync + 'static,
{
    /// Persist an entity and return the stored version.
    ///
    /// A transient entity (no identifier yet) is assigned one by the
    /// store; an entity that already has an identifier is overwritten
    /// in full.
    async fn save(&self, entity: &Entity) -> AppResult<Entity>;

    /// Find an entity by its primary key.
    async fn find_by_id(&self, id: &Id) -> AppResult<Option<Entity>>;

    /// Find all entities, in whatever order the store provides.
    async fn find_all(&self) -> AppResult<Vec<Entity>>;

    /// Check whether an entity with the given primary key exists.
    async fn exists_by_id(&self, id: &Id) -> AppResult<bool>;

    /// Delete an entity by its primary key. Deleting an absent key is
    /// not an error.
    async fn delete_by_id(&self, id: &Id) -> AppResult<()>;
}
