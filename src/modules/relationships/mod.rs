pub mod application;
pub mod domain;

pub use application::{
    CountryGastronomicCultureService, GastronomicCultureRecipeService,
    GastronomicCultureRestaurantService, RelationshipManager, RestaurantGastronomicCultureService,
    RestaurantMichelinStarService,
};
pub use domain::Association;
