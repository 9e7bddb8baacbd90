use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::Connection;
use std::sync::Arc;
use tokio::task;
use uuid::Uuid;

use super::tables::PgTable;
use crate::{log_debug, log_warn};
use crate::modules::catalog::domain::RecordStore;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::TimedOperation;
use crate::shared::Database;

/// Record store backed by PostgreSQL through the shared connection pool.
///
/// Diesel is synchronous, so every call runs on the blocking thread pool
/// with its own pooled connection.
#[derive(Clone)]
pub struct PgRecordStore {
    db: Arc<Database>,
}

impl PgRecordStore {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    async fn run<T, F>(&self, work: F) -> AppResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut PgConnection) -> AppResult<T> + Send + 'static,
    {
        let db = Arc::clone(&self.db);
        task::spawn_blocking(move || -> AppResult<T> {
            let mut conn = db.get_connection()?;
            work(&mut conn)
        })
        .await?
    }
}

#[async_trait]
impl<E: PgTable> RecordStore<E> for PgRecordStore {
    async fn find_by_id(&self, id: Uuid, relations: &[E::Relation]) -> AppResult<Option<E>> {
        let relations = relations.to_vec();
        self.run(move |conn| {
            let timer = TimedOperation::new("find_by_id", E::TABLE);
            let found = match E::load_row(conn, id)? {
                Some(row) => Some(E::attach(conn, row, &relations)?),
                None => None,
            };
            timer.finish();
            Ok(found)
        })
        .await
    }

    async fn find_all(&self, relations: &[E::Relation]) -> AppResult<Vec<E>> {
        let relations = relations.to_vec();
        self.run(move |conn| {
            let timer = TimedOperation::new("find_all", E::TABLE);
            let rows = E::load_all_rows(conn)?
                .into_iter()
                .map(|row| E::attach(conn, row, &relations))
                .collect::<AppResult<Vec<E>>>()?;
            timer.finish();
            Ok(rows)
        })
        .await
    }

    async fn save(&self, entity: E) -> AppResult<E> {
        self.run(move |conn| {
            let timer = TimedOperation::new("save", E::TABLE);
            conn.transaction::<_, AppError, _>(|conn| {
                E::upsert_row(conn, &entity)?;
                E::write_relations(conn, &entity)
            })
            .inspect_err(|e| {
                log_warn!("Rolled back save of {} {}: {}", E::KIND, entity.id(), e);
            })?;
            timer.finish();

            log_debug!("Saved {} {}", E::KIND, entity.id());
            Ok(entity)
        })
        .await
    }

    async fn remove(&self, entity: &E) -> AppResult<()> {
        let id = entity.id();
        self.run(move |conn| {
            let deleted = E::delete_row(conn, id)?;
            log_debug!("Removed {} {} ({} rows)", E::KIND, id, deleted);
            Ok(())
        })
        .await
    }

    async fn clear(&self) -> AppResult<()> {
        self.run(|conn| {
            let deleted = E::delete_all(conn)?;
            log_debug!("Cleared {} rows from {}", deleted, E::TABLE);
            Ok(())
        })
        .await
    }
}
