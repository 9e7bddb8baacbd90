use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{GastronomicCulture, MichelinStar};
use crate::modules::catalog::domain::entity::Entity;
use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestaurantRelation {
    MichelinStars,
    GastronomicCultures,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: Uuid,
    pub name: String,
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub michelin_stars: Option<Vec<MichelinStar>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gastronomic_cultures: Option<Vec<GastronomicCulture>>,
}

impl Restaurant {
    pub fn new(name: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            city: city.into(),
            michelin_stars: None,
            gastronomic_cultures: None,
        }
    }

    pub fn with_michelin_stars(mut self, stars: Vec<MichelinStar>) -> Self {
        self.michelin_stars = Some(stars);
        self
    }

    pub fn with_gastronomic_cultures(mut self, cultures: Vec<GastronomicCulture>) -> Self {
        self.gastronomic_cultures = Some(cultures);
        self
    }
}

impl Entity for Restaurant {
    type Relation = RestaurantRelation;

    const KIND: &'static str = "restaurant";
    const RELATIONS: &'static [RestaurantRelation] = &[
        RestaurantRelation::MichelinStars,
        RestaurantRelation::GastronomicCultures,
    ];

    fn id(&self) -> Uuid {
        self.id
    }

    fn set_id(&mut self, id: Uuid) {
        self.id = id;
    }

    fn detach(self) -> Self {
        Self {
            michelin_stars: None,
            gastronomic_cultures: None,
            ..self
        }
    }

    fn validate(&self) -> AppResult<()> {
        Validator::validate_name("Restaurant name", &self.name)?;
        Validator::validate_name("Restaurant city", &self.city)
    }
}
