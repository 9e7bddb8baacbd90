use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Restaurant;
use crate::modules::catalog::domain::entity::Entity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MichelinStarRelation {
    Restaurant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MichelinStar {
    pub id: Uuid,
    /// Day the star was awarded
    pub date: NaiveDate,
    /// Holder of the star; read-only view, written through the restaurant's star collection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restaurant: Option<Box<Restaurant>>,
}

impl MichelinStar {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            restaurant: None,
        }
    }
}

impl Entity for MichelinStar {
    type Relation = MichelinStarRelation;

    const KIND: &'static str = "michelin star";
    const RELATIONS: &'static [MichelinStarRelation] = &[MichelinStarRelation::Restaurant];

    fn id(&self) -> Uuid {
        self.id
    }

    fn set_id(&mut self, id: Uuid) {
        self.id = id;
    }

    fn detach(self) -> Self {
        Self {
            restaurant: None,
            ..self
        }
    }
}
