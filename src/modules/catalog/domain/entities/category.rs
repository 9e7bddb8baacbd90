use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Product;
use crate::modules::catalog::domain::entity::Entity;
use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryRelation {
    Product,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    /// Product filed under this category (the product owns the link)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<Box<Product>>,
}

impl Category {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: description.into(),
            product: None,
        }
    }
}

impl Entity for Category {
    type Relation = CategoryRelation;

    const KIND: &'static str = "category";
    const RELATIONS: &'static [CategoryRelation] = &[CategoryRelation::Product];

    fn id(&self) -> Uuid {
        self.id
    }

    fn set_id(&mut self, id: Uuid) {
        self.id = id;
    }

    fn detach(self) -> Self {
        Self {
            product: None,
            ..self
        }
    }

    fn validate(&self) -> AppResult<()> {
        Validator::validate_name("Category name", &self.name)?;
        Validator::validate_text("Category description", &self.description)
    }
}
