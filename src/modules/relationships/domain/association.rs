use crate::modules::catalog::domain::{
    Country, CountryRelation, Entity, GastronomicCulture, GastronomicCultureRelation,
    MichelinStar, Recipe, Restaurant, RestaurantRelation,
};

/// Binds an owner kind to one of its related collections.
///
/// `RELATION` is the only relation a manager loads when it reads the owner,
/// and `collection`/`collection_mut` reach the matching field.
pub trait Association: Send + Sync + 'static {
    type Owner: Entity;
    type Related: Entity;

    const RELATION: <Self::Owner as Entity>::Relation;

    fn collection(owner: &Self::Owner) -> Option<&Vec<Self::Related>>;

    fn collection_mut(owner: &mut Self::Owner) -> &mut Option<Vec<Self::Related>>;
}

/// Country -> gastronomic cultures (many-to-many)
pub struct CountryGastronomicCultures;

impl Association for CountryGastronomicCultures {
    type Owner = Country;
    type Related = GastronomicCulture;

    const RELATION: CountryRelation = CountryRelation::GastronomicCultures;

    fn collection(owner: &Country) -> Option<&Vec<GastronomicCulture>> {
        owner.gastronomic_cultures.as_ref()
    }

    fn collection_mut(owner: &mut Country) -> &mut Option<Vec<GastronomicCulture>> {
        &mut owner.gastronomic_cultures
    }
}

/// Gastronomic culture -> recipes (one-to-many)
pub struct GastronomicCultureRecipes;

impl Association for GastronomicCultureRecipes {
    type Owner = GastronomicCulture;
    type Related = Recipe;

    const RELATION: GastronomicCultureRelation = GastronomicCultureRelation::Recipes;

    fn collection(owner: &GastronomicCulture) -> Option<&Vec<Recipe>> {
        owner.recipes.as_ref()
    }

    fn collection_mut(owner: &mut GastronomicCulture) -> &mut Option<Vec<Recipe>> {
        &mut owner.recipes
    }
}

/// Gastronomic culture -> restaurants (many-to-many)
pub struct GastronomicCultureRestaurants;

impl Association for GastronomicCultureRestaurants {
    type Owner = GastronomicCulture;
    type Related = Restaurant;

    const RELATION: GastronomicCultureRelation = GastronomicCultureRelation::Restaurants;

    fn collection(owner: &GastronomicCulture) -> Option<&Vec<Restaurant>> {
        owner.restaurants.as_ref()
    }

    fn collection_mut(owner: &mut GastronomicCulture) -> &mut Option<Vec<Restaurant>> {
        &mut owner.restaurants
    }
}

/// Restaurant -> gastronomic cultures; same rows as [`GastronomicCultureRestaurants`]
pub struct RestaurantGastronomicCultures;

impl Association for RestaurantGastronomicCultures {
    type Owner = Restaurant;
    type Related = GastronomicCulture;

    const RELATION: RestaurantRelation = RestaurantRelation::GastronomicCultures;

    fn collection(owner: &Restaurant) -> Option<&Vec<GastronomicCulture>> {
        owner.gastronomic_cultures.as_ref()
    }

    fn collection_mut(owner: &mut Restaurant) -> &mut Option<Vec<GastronomicCulture>> {
        &mut owner.gastronomic_cultures
    }
}

/// Restaurant -> michelin stars (one-to-many)
pub struct RestaurantMichelinStars;

impl Association for RestaurantMichelinStars {
    type Owner = Restaurant;
    type Related = MichelinStar;

    const RELATION: RestaurantRelation = RestaurantRelation::MichelinStars;

    fn collection(owner: &Restaurant) -> Option<&Vec<MichelinStar>> {
        owner.michelin_stars.as_ref()
    }

    fn collection_mut(owner: &mut Restaurant) -> &mut Option<Vec<MichelinStar>> {
        &mut owner.michelin_stars
    }
}
