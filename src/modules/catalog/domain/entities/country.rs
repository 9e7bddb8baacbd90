use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::GastronomicCulture;
use crate::modules::catalog::domain::entity::Entity;
use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountryRelation {
    GastronomicCultures,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gastronomic_cultures: Option<Vec<GastronomicCulture>>,
}

impl Country {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            gastronomic_cultures: None,
        }
    }

    pub fn with_gastronomic_cultures(mut self, cultures: Vec<GastronomicCulture>) -> Self {
        self.gastronomic_cultures = Some(cultures);
        self
    }
}

impl Entity for Country {
    type Relation = CountryRelation;

    const KIND: &'static str = "country";
    const RELATIONS: &'static [CountryRelation] = &[CountryRelation::GastronomicCultures];

    fn id(&self) -> Uuid {
        self.id
    }

    fn set_id(&mut self, id: Uuid) {
        self.id = id;
    }

    fn detach(self) -> Self {
        Self {
            gastronomic_cultures: None,
            ..self
        }
    }

    fn validate(&self) -> AppResult<()> {
        Validator::validate_name("Country name", &self.name)
    }
}
