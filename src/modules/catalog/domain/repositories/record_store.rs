//! Persistence port shared by every catalog kind
//!
//! One store serves all kinds; callers pick the kind through the type
//! parameter and declare which relations they need loaded.

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::catalog::domain::entity::Entity;
use crate::shared::errors::AppResult;

#[async_trait]
pub trait RecordStore<E: Entity>: Send + Sync {
    /// Look up one record, filling exactly the given relations
    async fn find_by_id(&self, id: Uuid, relations: &[E::Relation]) -> AppResult<Option<E>>;

    /// All records of the kind, filling the given relations on each
    async fn find_all(&self, relations: &[E::Relation]) -> AppResult<Vec<E>>;

    /// Upsert by id. Loaded relation collections replace the stored ones;
    /// unloaded collections are left as they are.
    async fn save(&self, entity: E) -> AppResult<E>;

    /// Delete the record, dropping association rows that point at it
    async fn remove(&self, entity: &E) -> AppResult<()>;

    /// Delete every record of the kind (test setup)
    async fn clear(&self) -> AppResult<()>;
}
