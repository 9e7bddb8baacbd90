use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Category, GastronomicCulture};
use crate::modules::catalog::domain::entity::Entity;
use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductRelation {
    Category,
    GastronomicCulture,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub history: String,
    pub description: String,
    /// Owning side of the one-to-one link with a category
    pub category_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Box<Category>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gastronomic_culture: Option<Box<GastronomicCulture>>,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        history: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            history: history.into(),
            description: description.into(),
            category_id: None,
            category: None,
            gastronomic_culture: None,
        }
    }

    pub fn in_category(mut self, category_id: Uuid) -> Self {
        self.category_id = Some(category_id);
        self
    }
}

impl Entity for Product {
    type Relation = ProductRelation;

    const KIND: &'static str = "product";
    const RELATIONS: &'static [ProductRelation] =
        &[ProductRelation::Category, ProductRelation::GastronomicCulture];

    fn id(&self) -> Uuid {
        self.id
    }

    fn set_id(&mut self, id: Uuid) {
        self.id = id;
    }

    fn detach(self) -> Self {
        Self {
            category: None,
            gastronomic_culture: None,
            ..self
        }
    }

    fn validate(&self) -> AppResult<()> {
        Validator::validate_name("Product name", &self.name)
    }
}
