use std::sync::Arc;
use uuid::Uuid;

use crate::modules::catalog::domain::{not_found, Entity, RecordStore};
use crate::shared::errors::AppResult;
use crate::{log_debug, log_info};

/// Plain create/read/update/delete for one catalog kind
pub struct EntityService<E: Entity> {
    repo: Arc<dyn RecordStore<E>>,
}

impl<E: Entity> EntityService<E> {
    pub fn new(repo: Arc<dyn RecordStore<E>>) -> Self {
        Self { repo }
    }

    pub async fn find_all(&self) -> AppResult<Vec<E>> {
        self.repo.find_all(E::RELATIONS).await
    }

    pub async fn find_one(&self, id: Uuid) -> AppResult<E> {
        self.repo
            .find_by_id(id, E::RELATIONS)
            .await?
            .ok_or_else(not_found::<E>)
    }

    /// Persist a new record under a freshly generated id.
    /// Loaded collections on the input are stored along with it.
    pub async fn create(&self, mut entity: E) -> AppResult<E> {
        entity.validate()?;
        entity.set_id(Uuid::new_v4());

        let created = self.repo.save(entity).await?;

        log_info!("Created {} {}", E::KIND, created.id());
        Ok(created)
    }

    /// Replace the scalar fields of an existing record; associations are kept
    pub async fn update(&self, id: Uuid, entity: E) -> AppResult<E> {
        // Check that the record exists
        self.repo
            .find_by_id(id, &[])
            .await?
            .ok_or_else(not_found::<E>)?;

        entity.validate()?;

        let mut entity = entity.detach();
        entity.set_id(id);

        log_debug!("Updating {} {}", E::KIND, id);
        self.repo.save(entity).await
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let entity = self
            .repo
            .find_by_id(id, &[])
            .await?
            .ok_or_else(not_found::<E>)?;

        self.repo.remove(&entity).await?;

        log_info!("Deleted {} {}", E::KIND, id);
        Ok(())
    }
}
