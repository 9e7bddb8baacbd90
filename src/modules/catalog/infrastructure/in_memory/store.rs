use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::tables::{CatalogTables, InMemoryTable};
use crate::log_debug;
use crate::modules::catalog::domain::RecordStore;
use crate::shared::errors::AppResult;

/// Record store kept entirely in process memory.
///
/// Clones share the same tables, so one store can back every service of a
/// catalog. Each save runs under a single write lock.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordStore {
    tables: Arc<RwLock<CatalogTables>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl<E: InMemoryTable> RecordStore<E> for InMemoryRecordStore {
    async fn find_by_id(&self, id: Uuid, relations: &[E::Relation]) -> AppResult<Option<E>> {
        let tables = self.tables.read().await;
        Ok(tables.load::<E>(id, relations))
    }

    async fn find_all(&self, relations: &[E::Relation]) -> AppResult<Vec<E>> {
        let tables = self.tables.read().await;
        Ok(tables.load_all::<E>(relations))
    }

    async fn save(&self, entity: E) -> AppResult<E> {
        let mut tables = self.tables.write().await;
        tables.upsert(&entity)?;

        log_debug!("Saved {} {}", E::KIND, entity.id());
        Ok(entity)
    }

    async fn remove(&self, entity: &E) -> AppResult<()> {
        let mut tables = self.tables.write().await;
        tables.delete::<E>(entity.id());
        Ok(())
    }

    async fn clear(&self) -> AppResult<()> {
        let mut tables = self.tables.write().await;
        tables.delete_all::<E>();
        Ok(())
    }
}
