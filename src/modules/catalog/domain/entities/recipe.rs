use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::GastronomicCulture;
use crate::modules::catalog::domain::entity::Entity;
use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipeRelation {
    GastronomicCulture,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub photo: String,
    pub preparation: String,
    pub video: String,
    /// Owning culture; read-only view, written through the culture's recipe collection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gastronomic_culture: Option<Box<GastronomicCulture>>,
}

impl Recipe {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        photo: impl Into<String>,
        preparation: impl Into<String>,
        video: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: description.into(),
            photo: photo.into(),
            preparation: preparation.into(),
            video: video.into(),
            gastronomic_culture: None,
        }
    }
}

impl Entity for Recipe {
    type Relation = RecipeRelation;

    const KIND: &'static str = "recipe";
    const RELATIONS: &'static [RecipeRelation] = &[RecipeRelation::GastronomicCulture];

    fn id(&self) -> Uuid {
        self.id
    }

    fn set_id(&mut self, id: Uuid) {
        self.id = id;
    }

    fn detach(self) -> Self {
        Self {
            gastronomic_culture: None,
            ..self
        }
    }

    fn validate(&self) -> AppResult<()> {
        Validator::validate_name("Recipe name", &self.name)
    }
}
