use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Country, Product, Recipe, Restaurant};
use crate::modules::catalog::domain::entity::Entity;
use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GastronomicCultureRelation {
    Countries,
    Restaurants,
    Recipes,
    Products,
}

/// A culinary tradition tying countries, restaurants, recipes and products together
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GastronomicCulture {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub countries: Option<Vec<Country>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restaurants: Option<Vec<Restaurant>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipes: Option<Vec<Recipe>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<Product>>,
}

impl GastronomicCulture {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: description.into(),
            countries: None,
            restaurants: None,
            recipes: None,
            products: None,
        }
    }

    pub fn with_countries(mut self, countries: Vec<Country>) -> Self {
        self.countries = Some(countries);
        self
    }

    pub fn with_restaurants(mut self, restaurants: Vec<Restaurant>) -> Self {
        self.restaurants = Some(restaurants);
        self
    }

    pub fn with_recipes(mut self, recipes: Vec<Recipe>) -> Self {
        self.recipes = Some(recipes);
        self
    }

    pub fn with_products(mut self, products: Vec<Product>) -> Self {
        self.products = Some(products);
        self
    }
}

impl Entity for GastronomicCulture {
    type Relation = GastronomicCultureRelation;

    const KIND: &'static str = "gastronomic culture";
    const RELATIONS: &'static [GastronomicCultureRelation] = &[
        GastronomicCultureRelation::Countries,
        GastronomicCultureRelation::Restaurants,
        GastronomicCultureRelation::Recipes,
        GastronomicCultureRelation::Products,
    ];

    fn id(&self) -> Uuid {
        self.id
    }

    fn set_id(&mut self, id: Uuid) {
        self.id = id;
    }

    fn detach(self) -> Self {
        Self {
            countries: None,
            restaurants: None,
            recipes: None,
            products: None,
            ..self
        }
    }

    fn validate(&self) -> AppResult<()> {
        Validator::validate_name("Gastronomic culture name", &self.name)?;
        Validator::validate_text("Gastronomic culture description", &self.description)
    }
}
