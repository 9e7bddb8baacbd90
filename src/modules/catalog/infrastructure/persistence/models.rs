use chrono::NaiveDate;
use diesel::prelude::*;
use uuid::Uuid;

use crate::modules::catalog::domain::{
    Category, Country, GastronomicCulture, MichelinStar, Product, Recipe, Restaurant,
};
use crate::schema::{
    categories, countries, country_gastronomic_cultures, gastronomic_culture_restaurants,
    gastronomic_cultures, michelin_stars, products, recipes, restaurants,
};

// ================== ROW MODELS ==================
//
// Read models select every column; write records leave out the foreign keys
// owned by the other side of a relation so an upsert never clobbers them.

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = categories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CategoryModel {
    pub id: Uuid,
    pub name: String,
    pub description: String,
}

#[derive(Insertable, AsChangeset, Debug, Clone)]
#[diesel(table_name = categories)]
pub struct CategoryRecord {
    pub id: Uuid,
    pub name: String,
    pub description: String,
}

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = products)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProductModel {
    pub id: Uuid,
    pub name: String,
    pub history: String,
    pub description: String,
    pub category_id: Option<Uuid>,
    pub gastronomic_culture_id: Option<Uuid>,
}

/// `category_id` is owned by the product, so clearing it must write NULL
#[derive(Insertable, AsChangeset, Debug, Clone)]
#[diesel(table_name = products)]
#[diesel(treat_none_as_null = true)]
pub struct ProductRecord {
    pub id: Uuid,
    pub name: String,
    pub history: String,
    pub description: String,
    pub category_id: Option<Uuid>,
}

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = countries)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CountryModel {
    pub id: Uuid,
    pub name: String,
}

#[derive(Insertable, AsChangeset, Debug, Clone)]
#[diesel(table_name = countries)]
pub struct CountryRecord {
    pub id: Uuid,
    pub name: String,
}

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = gastronomic_cultures)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct GastronomicCultureModel {
    pub id: Uuid,
    pub name: String,
    pub description: String,
}

#[derive(Insertable, AsChangeset, Debug, Clone)]
#[diesel(table_name = gastronomic_cultures)]
pub struct GastronomicCultureRecord {
    pub id: Uuid,
    pub name: String,
    pub description: String,
}

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = recipes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct RecipeModel {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub photo: String,
    pub preparation: String,
    pub video: String,
    pub gastronomic_culture_id: Option<Uuid>,
}

#[derive(Insertable, AsChangeset, Debug, Clone)]
#[diesel(table_name = recipes)]
pub struct RecipeRecord {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub photo: String,
    pub preparation: String,
    pub video: String,
}

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = restaurants)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct RestaurantModel {
    pub id: Uuid,
    pub name: String,
    pub city: String,
}

#[derive(Insertable, AsChangeset, Debug, Clone)]
#[diesel(table_name = restaurants)]
pub struct RestaurantRecord {
    pub id: Uuid,
    pub name: String,
    pub city: String,
}

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = michelin_stars)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MichelinStarModel {
    pub id: Uuid,
    pub awarded_on: NaiveDate,
    pub restaurant_id: Option<Uuid>,
}

#[derive(Insertable, AsChangeset, Debug, Clone)]
#[diesel(table_name = michelin_stars)]
pub struct MichelinStarRecord {
    pub id: Uuid,
    pub awarded_on: NaiveDate,
}

// ================== ASSOCIATION ROWS ==================

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = country_gastronomic_cultures)]
pub struct NewCountryGastronomicCulture {
    pub country_id: Uuid,
    pub gastronomic_culture_id: Uuid,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = gastronomic_culture_restaurants)]
pub struct NewGastronomicCultureRestaurant {
    pub gastronomic_culture_id: Uuid,
    pub restaurant_id: Uuid,
}

// ================== MAPPING ==================

impl From<CategoryModel> for Category {
    fn from(model: CategoryModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            product: None,
        }
    }
}

impl From<&Category> for CategoryRecord {
    fn from(entity: &Category) -> Self {
        Self {
            id: entity.id,
            name: entity.name.clone(),
            description: entity.description.clone(),
        }
    }
}

impl From<ProductModel> for Product {
    fn from(model: ProductModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            history: model.history,
            description: model.description,
            category_id: model.category_id,
            category: None,
            gastronomic_culture: None,
        }
    }
}

impl From<&Product> for ProductRecord {
    fn from(entity: &Product) -> Self {
        Self {
            id: entity.id,
            name: entity.name.clone(),
            history: entity.history.clone(),
            description: entity.description.clone(),
            category_id: entity.category_id,
        }
    }
}

impl From<CountryModel> for Country {
    fn from(model: CountryModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            gastronomic_cultures: None,
        }
    }
}

impl From<&Country> for CountryRecord {
    fn from(entity: &Country) -> Self {
        Self {
            id: entity.id,
            name: entity.name.clone(),
        }
    }
}

impl From<GastronomicCultureModel> for GastronomicCulture {
    fn from(model: GastronomicCultureModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            countries: None,
            restaurants: None,
            recipes: None,
            products: None,
        }
    }
}

impl From<&GastronomicCulture> for GastronomicCultureRecord {
    fn from(entity: &GastronomicCulture) -> Self {
        Self {
            id: entity.id,
            name: entity.name.clone(),
            description: entity.description.clone(),
        }
    }
}

impl From<RecipeModel> for Recipe {
    fn from(model: RecipeModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            photo: model.photo,
            preparation: model.preparation,
            video: model.video,
            gastronomic_culture: None,
        }
    }
}

impl From<&Recipe> for RecipeRecord {
    fn from(entity: &Recipe) -> Self {
        Self {
            id: entity.id,
            name: entity.name.clone(),
            description: entity.description.clone(),
            photo: entity.photo.clone(),
            preparation: entity.preparation.clone(),
            video: entity.video.clone(),
        }
    }
}

impl From<RestaurantModel> for Restaurant {
    fn from(model: RestaurantModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            city: model.city,
            michelin_stars: None,
            gastronomic_cultures: None,
        }
    }
}

impl From<&Restaurant> for RestaurantRecord {
    fn from(entity: &Restaurant) -> Self {
        Self {
            id: entity.id,
            name: entity.name.clone(),
            city: entity.city.clone(),
        }
    }
}

impl From<MichelinStarModel> for MichelinStar {
    fn from(model: MichelinStarModel) -> Self {
        Self {
            id: model.id,
            date: model.awarded_on,
            restaurant: None,
        }
    }
}

impl From<&MichelinStar> for MichelinStarRecord {
    fn from(entity: &MichelinStar) -> Self {
        Self {
            id: entity.id,
            awarded_on: entity.date,
        }
    }
}
