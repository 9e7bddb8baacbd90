pub mod country_gastronomic_culture_service;
pub mod gastronomic_culture_recipe_service;
pub mod gastronomic_culture_restaurant_service;
pub mod restaurant_gastronomic_culture_service;
pub mod restaurant_michelin_star_service;

pub use country_gastronomic_culture_service::CountryGastronomicCultureService;
pub use gastronomic_culture_recipe_service::GastronomicCultureRecipeService;
pub use gastronomic_culture_restaurant_service::GastronomicCultureRestaurantService;
pub use restaurant_gastronomic_culture_service::RestaurantGastronomicCultureService;
pub use restaurant_michelin_star_service::RestaurantMichelinStarService;
