pub mod relationship_manager;
pub mod services;

pub use relationship_manager::RelationshipManager;
pub use services::{
    CountryGastronomicCultureService, GastronomicCultureRecipeService,
    GastronomicCultureRestaurantService, RestaurantGastronomicCultureService,
    RestaurantMichelinStarService,
};
