pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::EntityService;
pub use domain::{
    Category, CategoryRelation, Country, CountryRelation, Entity, GastronomicCulture,
    GastronomicCultureRelation, MichelinStar, MichelinStarRelation, Product, ProductRelation,
    Recipe, RecipeRelation, RecordStore, Restaurant, RestaurantRelation,
};
pub use infrastructure::{InMemoryRecordStore, PgRecordStore};
