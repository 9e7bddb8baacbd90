use std::fmt::Debug;
use uuid::Uuid;

use crate::shared::errors::{AppError, AppResult};

/// A catalog record kind as seen by the record store.
///
/// Relation collections on an entity are either loaded (`Some`) or not
/// loaded (`None`). Stores fill exactly the relations a caller declares and
/// rewrite only the loaded collections on save.
pub trait Entity: Clone + Debug + Send + Sync + 'static {
    /// Relations that can be eager-loaded with a record of this kind
    type Relation: Copy + Debug + PartialEq + Eq + Send + Sync + 'static;

    /// Human readable kind, used in error messages
    const KIND: &'static str;

    /// Every relation of the kind
    const RELATIONS: &'static [Self::Relation];

    fn id(&self) -> Uuid;

    fn set_id(&mut self, id: Uuid);

    /// Drop every loaded relation, keeping scalar fields only
    fn detach(self) -> Self;

    /// Field level checks run before create/update
    fn validate(&self) -> AppResult<()> {
        Ok(())
    }
}

pub fn not_found<E: Entity>() -> AppError {
    AppError::NotFound(format!("The {} with the given id was not found", E::KIND))
}

/// Keep `rows` in the order of `ids`, repeating a row when its id repeats
pub fn in_id_order<E: Entity>(ids: &[Uuid], rows: &[E]) -> Vec<E> {
    ids.iter()
        .filter_map(|id| rows.iter().find(|row| row.id() == *id).cloned())
        .collect()
}
