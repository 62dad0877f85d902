//! Core traits shared by the store, repository and service layers.

use crate::FitnessResult;
use async_trait::async_trait;

/// Storage contract every record store fulfils.
///
/// `save` assigns an id when the entity has none and overwrites the stored
/// record otherwise. `find_all` returns records in the store's scan order.
#[async_trait]
pub trait Store<T, ID>: Send + Sync
where
    T: Send + Sync,
    ID: Send + Sync,
{
    /// Persists the entity and returns the stored copy.
    async fn save(&self, entity: T) -> FitnessResult<T>;

    /// Finds an entity by its ID.
    async fn find_by_id(&self, id: ID) -> FitnessResult<Option<T>>;

    /// Returns every stored entity.
    async fn find_all(&self) -> FitnessResult<Vec<T>>;

    /// Checks if an entity exists by its ID.
    async fn exists_by_id(&self, id: ID) -> FitnessResult<bool>;

    /// Deletes an entity by its ID. Deleting a missing id is a no-op.
    async fn delete_by_id(&self, id: ID) -> FitnessResult<()>;
}

/// Trait for records that carry a store-assigned identifier.
pub trait Entity<ID: Copy> {
    /// Returns the identifier, `None` while the record is unsaved.
    fn id(&self) -> Option<ID>;

    /// True once the store has assigned an id.
    fn is_persisted(&self) -> bool {
        self.id().is_some()
    }
}

/// Trait for mapping between domain entities and DTOs.
pub trait Mapper<From, To> {
    /// Maps from source type to target type.
    fn map(from: &From) -> To;
}

/// Trait for bidirectional mapping between domain entities and DTOs.
pub trait BiMapper<A, B>: Mapper<A, B> {
    /// Maps from target type back to source type.
    fn map_back(from: B) -> A;
}
