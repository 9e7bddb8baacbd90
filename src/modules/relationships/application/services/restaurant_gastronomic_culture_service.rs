use std::sync::Arc;
use uuid::Uuid;

use crate::modules::catalog::domain::{GastronomicCulture, Restaurant, RecordStore};
use crate::modules::relationships::application::RelationshipManager;
use crate::modules::relationships::domain::RestaurantGastronomicCultures;
use crate::shared::errors::AppResult;

/// Gastronomic cultures served by a restaurant.
///
/// Reads and writes the same association rows as
/// [`GastronomicCultureRestaurantService`](super::GastronomicCultureRestaurantService).
pub struct RestaurantGastronomicCultureService {
    manager: RelationshipManager<RestaurantGastronomicCultures>,
}

impl RestaurantGastronomicCultureService {
    pub fn new(
        restaurants: Arc<dyn RecordStore<Restaurant>>,
        gastronomic_cultures: Arc<dyn RecordStore<GastronomicCulture>>,
    ) -> Self {
        Self {
            manager: RelationshipManager::new(restaurants, gastronomic_cultures),
        }
    }

    pub async fn add_gastronomic_culture_restaurant(
        &self,
        restaurant_id: Uuid,
        gastronomic_culture_id: Uuid,
    ) -> AppResult<Restaurant> {
        self.manager.add_related(restaurant_id, gastronomic_culture_id).await
    }

    pub async fn find_gastronomic_culture_by_restaurant_id_gastronomic_culture_id(
        &self,
        restaurant_id: Uuid,
        gastronomic_culture_id: Uuid,
    ) -> AppResult<GastronomicCulture> {
        self.manager.find_one_related(restaurant_id, gastronomic_culture_id).await
    }

    pub async fn find_gastronomic_cultures_by_restaurant_id(
        &self,
        restaurant_id: Uuid,
    ) -> AppResult<Vec<GastronomicCulture>> {
        self.manager.find_all_related(restaurant_id).await
    }

    pub async fn associate_gastronomic_cultures_restaurant(
        &self,
        restaurant_id: Uuid,
        gastronomic_cultures: Vec<GastronomicCulture>,
    ) -> AppResult<Restaurant> {
        self.manager.associate_related(restaurant_id, gastronomic_cultures).await
    }

    pub async fn delete_gastronomic_culture_restaurant(
        &self,
        restaurant_id: Uuid,
        gastronomic_culture_id: Uuid,
    ) -> AppResult<()> {
        self.manager.delete_related(restaurant_id, gastronomic_culture_id).await
    }
}
