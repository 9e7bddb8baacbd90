use std::sync::Arc;
use uuid::Uuid;

use crate::modules::catalog::domain::{MichelinStar, Restaurant, RecordStore};
use crate::modules::relationships::application::RelationshipManager;
use crate::modules::relationships::domain::RestaurantMichelinStars;
use crate::shared::errors::AppResult;

pub struct RestaurantMichelinStarService {
    manager: RelationshipManager<RestaurantMichelinStars>,
}

impl RestaurantMichelinStarService {
    pub fn new(
        restaurants: Arc<dyn RecordStore<Restaurant>>,
        michelin_stars: Arc<dyn RecordStore<MichelinStar>>,
    ) -> Self {
        Self {
            manager: RelationshipManager::new(restaurants, michelin_stars),
        }
    }

    pub async fn add_michelin_star_restaurant(
        &self,
        restaurant_id: Uuid,
        michelin_star_id: Uuid,
    ) -> AppResult<Restaurant> {
        self.manager.add_related(restaurant_id, michelin_star_id).await
    }

    pub async fn find_michelin_star_by_restaurant_id_michelin_star_id(
        &self,
        restaurant_id: Uuid,
        michelin_star_id: Uuid,
    ) -> AppResult<MichelinStar> {
        self.manager.find_one_related(restaurant_id, michelin_star_id).await
    }

    pub async fn find_michelin_stars_by_restaurant_id(
        &self,
        restaurant_id: Uuid,
    ) -> AppResult<Vec<MichelinStar>> {
        self.manager.find_all_related(restaurant_id).await
    }

    pub async fn associate_michelin_stars_restaurant(
        &self,
        restaurant_id: Uuid,
        michelin_stars: Vec<MichelinStar>,
    ) -> AppResult<Restaurant> {
        self.manager.associate_related(restaurant_id, michelin_stars).await
    }

    pub async fn delete_michelin_star_restaurant(
        &self,
        restaurant_id: Uuid,
        michelin_star_id: Uuid,
    ) -> AppResult<()> {
        self.manager.delete_related(restaurant_id, michelin_star_id).await
    }
}
