use std::sync::Arc;
use uuid::Uuid;

use crate::modules::catalog::domain::{Country, GastronomicCulture, RecordStore};
use crate::modules::relationships::application::RelationshipManager;
use crate::modules::relationships::domain::CountryGastronomicCultures;
use crate::shared::errors::AppResult;

/// Gastronomic cultures practised in a country
pub struct CountryGastronomicCultureService {
    manager: RelationshipManager<CountryGastronomicCultures>,
}

impl CountryGastronomicCultureService {
    pub fn new(
        countries: Arc<dyn RecordStore<Country>>,
        gastronomic_cultures: Arc<dyn RecordStore<GastronomicCulture>>,
    ) -> Self {
        Self {
            manager: RelationshipManager::new(countries, gastronomic_cultures),
        }
    }

    pub async fn add_gastronomic_culture_country(
        &self,
        country_id: Uuid,
        gastronomic_culture_id: Uuid,
    ) -> AppResult<Country> {
        self.manager.add_related(country_id, gastronomic_culture_id).await
    }

    pub async fn find_gastronomic_culture_by_country_id_gastronomic_culture_id(
        &self,
        country_id: Uuid,
        gastronomic_culture_id: Uuid,
    ) -> AppResult<GastronomicCulture> {
        self.manager.find_one_related(country_id, gastronomic_culture_id).await
    }

    pub async fn find_gastronomic_cultures_by_country_id(
        &self,
        country_id: Uuid,
    ) -> AppResult<Vec<GastronomicCulture>> {
        self.manager.find_all_related(country_id).await
    }

    pub async fn associate_gastronomic_cultures_country(
        &self,
        country_id: Uuid,
        gastronomic_cultures: Vec<GastronomicCulture>,
    ) -> AppResult<Country> {
        self.manager.associate_related(country_id, gastronomic_cultures).await
    }

    pub async fn delete_gastronomic_culture_country(
        &self,
        country_id: Uuid,
        gastronomic_culture_id: Uuid,
    ) -> AppResult<()> {
        self.manager.delete_related(country_id, gastronomic_culture_id).await
    }
}
