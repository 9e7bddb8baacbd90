pub mod modules;
mod schema;
pub mod shared;

use std::sync::Arc;

use modules::catalog::{
    Category, Country, EntityService, GastronomicCulture, InMemoryRecordStore, MichelinStar,
    PgRecordStore, Product, Recipe, RecordStore, Restaurant,
};
use modules::relationships::{
    CountryGastronomicCultureService, GastronomicCultureRecipeService,
    GastronomicCultureRestaurantService, RestaurantGastronomicCultureService,
    RestaurantMichelinStarService,
};
use shared::utils::logger::init_logger;
use shared::{AppResult, Database};

/// Every catalog service wired over a single record store
#[derive(Clone)]
pub struct Catalog {
    pub categories: Arc<EntityService<Category>>,
    pub products: Arc<EntityService<Product>>,
    pub countries: Arc<EntityService<Country>>,
    pub gastronomic_cultures: Arc<EntityService<GastronomicCulture>>,
    pub recipes: Arc<EntityService<Recipe>>,
    pub restaurants: Arc<EntityService<Restaurant>>,
    pub michelin_stars: Arc<EntityService<MichelinStar>>,

    pub country_gastronomic_cultures: Arc<CountryGastronomicCultureService>,
    pub gastronomic_culture_recipes: Arc<GastronomicCultureRecipeService>,
    pub gastronomic_culture_restaurants: Arc<GastronomicCultureRestaurantService>,
    pub restaurant_gastronomic_cultures: Arc<RestaurantGastronomicCultureService>,
    pub restaurant_michelin_stars: Arc<RestaurantMichelinStarService>,
}

impl Catalog {
    /// Catalog kept in process memory
    pub fn in_memory() -> Self {
        Self::with_store(Arc::new(InMemoryRecordStore::new()))
    }

    /// Catalog persisted in PostgreSQL; pending migrations are applied first
    pub fn postgres(database: Arc<Database>) -> AppResult<Self> {
        database.run_migrations()?;
        Ok(Self::with_store(Arc::new(PgRecordStore::new(database))))
    }

    /// Initialise logging and connect using `DATABASE_URL`
    pub fn from_env() -> AppResult<Self> {
        init_logger();

        let database = Arc::new(Database::new()?);
        Self::postgres(database)
    }

    pub fn with_store<S>(store: Arc<S>) -> Self
    where
        S: RecordStore<Category>
            + RecordStore<Product>
            + RecordStore<Country>
            + RecordStore<GastronomicCulture>
            + RecordStore<Recipe>
            + RecordStore<Restaurant>
            + RecordStore<MichelinStar>
            + 'static,
    {
        // Cast to trait objects for dependency injection
        let category_store: Arc<dyn RecordStore<Category>> = store.clone();
        let product_store: Arc<dyn RecordStore<Product>> = store.clone();
        let country_store: Arc<dyn RecordStore<Country>> = store.clone();
        let culture_store: Arc<dyn RecordStore<GastronomicCulture>> = store.clone();
        let recipe_store: Arc<dyn RecordStore<Recipe>> = store.clone();
        let restaurant_store: Arc<dyn RecordStore<Restaurant>> = store.clone();
        let star_store: Arc<dyn RecordStore<MichelinStar>> = store;

        Self {
            categories: Arc::new(EntityService::new(category_store)),
            products: Arc::new(EntityService::new(product_store)),
            countries: Arc::new(EntityService::new(Arc::clone(&country_store))),
            gastronomic_cultures: Arc::new(EntityService::new(Arc::clone(&culture_store))),
            recipes: Arc::new(EntityService::new(Arc::clone(&recipe_store))),
            restaurants: Arc::new(EntityService::new(Arc::clone(&restaurant_store))),
            michelin_stars: Arc::new(EntityService::new(Arc::clone(&star_store))),

            country_gastronomic_cultures: Arc::new(CountryGastronomicCultureService::new(
                country_store,
                Arc::clone(&culture_store),
            )),
            gastronomic_culture_recipes: Arc::new(GastronomicCultureRecipeService::new(
                Arc::clone(&culture_store),
                recipe_store,
            )),
            gastronomic_culture_restaurants: Arc::new(GastronomicCultureRestaurantService::new(
                Arc::clone(&culture_store),
                Arc::clone(&restaurant_store),
            )),
            restaurant_gastronomic_cultures: Arc::new(RestaurantGastronomicCultureService::new(
                Arc::clone(&restaurant_store),
                culture_store,
            )),
            restaurant_michelin_stars: Arc::new(RestaurantMichelinStarService::new(
                restaurant_store,
                star_store,
            )),
        }
    }
}
