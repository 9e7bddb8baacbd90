pub mod category;
pub mod country;
pub mod gastronomic_culture;
pub mod michelin_star;
pub mod product;
pub mod recipe;
pub mod restaurant;

pub use category::{Category, CategoryRelation};
pub use country::{Country, CountryRelation};
pub use gastronomic_culture::{GastronomicCulture, GastronomicCultureRelation};
pub use michelin_star::{MichelinStar, MichelinStarRelation};
pub use product::{Product, ProductRelation};
pub use recipe::{Recipe, RecipeRelation};
pub use restaurant::{Restaurant, RestaurantRelation};
