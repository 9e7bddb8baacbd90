pub mod association;

pub use association::{
    Association, CountryGastronomicCultures, GastronomicCultureRecipes,
    GastronomicCultureRestaurants, RestaurantGastronomicCultures, RestaurantMichelinStars,
};
