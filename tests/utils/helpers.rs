//! Test helper functions and catalog builders

use super::db::get_test_database;
use super::factories::{
    CountryFactory, GastronomicCultureFactory, MichelinStarFactory, RecipeFactory,
    RestaurantFactory,
};
use gastro_lib::modules::catalog::{
    Category, Country, Entity, GastronomicCulture, InMemoryRecordStore, MichelinStar, PgRecordStore,
    Product, Recipe, RecordStore, Restaurant,
};
use gastro_lib::shared::AppResult;
use gastro_lib::Catalog;
use std::sync::Arc;
use uuid::Uuid;

/// Catalog together with the store behind it
pub struct TestCatalog<S> {
    pub store: Arc<S>,
    pub catalog: Catalog,
}

pub fn in_memory_catalog() -> TestCatalog<InMemoryRecordStore> {
    let store = Arc::new(InMemoryRecordStore::new());
    TestCatalog {
        catalog: Catalog::with_store(Arc::clone(&store)),
        store,
    }
}

/// Postgres-backed catalog, or `None` when no test database is configured
pub async fn pg_catalog() -> AppResult<Option<TestCatalog<PgRecordStore>>> {
    let Some(database) = get_test_database() else {
        return Ok(None);
    };

    let store = Arc::new(PgRecordStore::new(database));
    clear_all(store.as_ref()).await?;

    Ok(Some(TestCatalog {
        catalog: Catalog::with_store(Arc::clone(&store)),
        store,
    }))
}

/// Empty every table, children first
pub async fn clear_all<S>(store: &S) -> AppResult<()>
where
    S: RecordStore<Category>
        + RecordStore<Product>
        + RecordStore<Country>
        + RecordStore<GastronomicCulture>
        + RecordStore<Recipe>
        + RecordStore<Restaurant>
        + RecordStore<MichelinStar>,
{
    RecordStore::<MichelinStar>::clear(store).await?;
    RecordStore::<Recipe>::clear(store).await?;
    RecordStore::<Product>::clear(store).await?;
    RecordStore::<Category>::clear(store).await?;
    RecordStore::<Country>::clear(store).await?;
    RecordStore::<Restaurant>::clear(store).await?;
    RecordStore::<GastronomicCulture>::clear(store).await?;
    Ok(())
}

pub async fn seed_countries(catalog: &Catalog, count: usize) -> AppResult<Vec<Country>> {
    let mut countries = Vec::with_capacity(count);
    for _ in 0..count {
        countries.push(catalog.countries.create(CountryFactory::new().build()).await?);
    }
    Ok(countries)
}

pub async fn seed_cultures(catalog: &Catalog, count: usize) -> AppResult<Vec<GastronomicCulture>> {
    let mut cultures = Vec::with_capacity(count);
    for _ in 0..count {
        cultures.push(
            catalog
                .gastronomic_cultures
                .create(GastronomicCultureFactory::new().build())
                .await?,
        );
    }
    Ok(cultures)
}

pub async fn seed_recipes(catalog: &Catalog, count: usize) -> AppResult<Vec<Recipe>> {
    let mut recipes = Vec::with_capacity(count);
    for _ in 0..count {
        recipes.push(catalog.recipes.create(RecipeFactory::new().build()).await?);
    }
    Ok(recipes)
}

pub async fn seed_restaurants(catalog: &Catalog, count: usize) -> AppResult<Vec<Restaurant>> {
    let mut restaurants = Vec::with_capacity(count);
    for _ in 0..count {
        restaurants.push(
            catalog
                .restaurants
                .create(RestaurantFactory::new().build())
                .await?,
        );
    }
    Ok(restaurants)
}

pub async fn seed_michelin_stars(catalog: &Catalog, count: usize) -> AppResult<Vec<MichelinStar>> {
    let mut stars = Vec::with_capacity(count);
    for _ in 0..count {
        stars.push(
            catalog
                .michelin_stars
                .create(MichelinStarFactory::new().build())
                .await?,
        );
    }
    Ok(stars)
}

pub fn ids<E: Entity>(items: &[E]) -> Vec<Uuid> {
    items.iter().map(Entity::id).collect()
}
