use std::sync::Arc;
use uuid::Uuid;

use crate::modules::catalog::domain::{GastronomicCulture, Restaurant, RecordStore};
use crate::modules::relationships::application::RelationshipManager;
use crate::modules::relationships::domain::GastronomicCultureRestaurants;
use crate::shared::errors::AppResult;

/// Restaurants serving a gastronomic culture
pub struct GastronomicCultureRestaurantService {
    manager: RelationshipManager<GastronomicCultureRestaurants>,
}

impl GastronomicCultureRestaurantService {
    pub fn new(
        gastronomic_cultures: Arc<dyn RecordStore<GastronomicCulture>>,
        restaurants: Arc<dyn RecordStore<Restaurant>>,
    ) -> Self {
        Self {
            manager: RelationshipManager::new(gastronomic_cultures, restaurants),
        }
    }

    pub async fn add_restaurant_gastronomic_culture(
        &self,
        gastronomic_culture_id: Uuid,
        restaurant_id: Uuid,
    ) -> AppResult<GastronomicCulture> {
        self.manager.add_related(gastronomic_culture_id, restaurant_id).await
    }

    pub async fn find_restaurant_by_gastronomic_culture_id_restaurant_id(
        &self,
        gastronomic_culture_id: Uuid,
        restaurant_id: Uuid,
    ) -> AppResult<Restaurant> {
        self.manager.find_one_related(gastronomic_culture_id, restaurant_id).await
    }

    pub async fn find_restaurants_by_gastronomic_culture_id(
        &self,
        gastronomic_culture_id: Uuid,
    ) -> AppResult<Vec<Restaurant>> {
        self.manager.find_all_related(gastronomic_culture_id).await
    }

    pub async fn associate_restaurants_gastronomic_culture(
        &self,
        gastronomic_culture_id: Uuid,
        restaurants: Vec<Restaurant>,
    ) -> AppResult<GastronomicCulture> {
        self.manager.associate_related(gastronomic_culture_id, restaurants).await
    }

    pub async fn delete_restaurant_gastronomic_culture(
        &self,
        gastronomic_culture_id: Uuid,
        restaurant_id: Uuid,
    ) -> AppResult<()> {
        self.manager.delete_related(gastronomic_culture_id, restaurant_id).await
    }
}
