use std::sync::Arc;
use uuid::Uuid;

use crate::modules::catalog::domain::{GastronomicCulture, Recipe, RecordStore};
use crate::modules::relationships::application::RelationshipManager;
use crate::modules::relationships::domain::GastronomicCultureRecipes;
use crate::shared::errors::AppResult;

/// Recipes belonging to a gastronomic culture.
///
/// A recipe has at most one culture, so adding it here takes it away from
/// any culture that held it before.
pub struct GastronomicCultureRecipeService {
    manager: RelationshipManager<GastronomicCultureRecipes>,
}

impl GastronomicCultureRecipeService {
    pub fn new(
        gastronomic_cultures: Arc<dyn RecordStore<GastronomicCulture>>,
        recipes: Arc<dyn RecordStore<Recipe>>,
    ) -> Self {
        Self {
            manager: RelationshipManager::new(gastronomic_cultures, recipes),
        }
    }

    pub async fn add_recipe_gastronomic(
        &self,
        gastronomic_culture_id: Uuid,
        recipe_id: Uuid,
    ) -> AppResult<GastronomicCulture> {
        self.manager.add_related(gastronomic_culture_id, recipe_id).await
    }

    pub async fn find_recipe_by_gastronomic_id_recipe_id(
        &self,
        gastronomic_culture_id: Uuid,
        recipe_id: Uuid,
    ) -> AppResult<Recipe> {
        self.manager.find_one_related(gastronomic_culture_id, recipe_id).await
    }

    pub async fn find_recipes_by_gastronomic_id(
        &self,
        gastronomic_culture_id: Uuid,
    ) -> AppResult<Vec<Recipe>> {
        self.manager.find_all_related(gastronomic_culture_id).await
    }

    pub async fn associate_recipes_gastronomic(
        &self,
        gastronomic_culture_id: Uuid,
        recipes: Vec<Recipe>,
    ) -> AppResult<GastronomicCulture> {
        self.manager.associate_related(gastronomic_culture_id, recipes).await
    }

    pub async fn delete_recipe_gastronomic(
        &self,
        gastronomic_culture_id: Uuid,
        recipe_id: Uuid,
    ) -> AppResult<()> {
        self.manager.delete_related(gastronomic_culture_id, recipe_id).await
    }
}
