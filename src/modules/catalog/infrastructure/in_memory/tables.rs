//! Row storage behind the in-memory record store
//!
//! Mirrors the relational schema: rows hold scalar fields only,
//! many-to-many links live in ordered association rows and one-to-many
//! links are foreign keys keyed by the child id.

use std::collections::HashMap;
use uuid::Uuid;

use crate::modules::catalog::domain::{
    Category, CategoryRelation, Country, CountryRelation, Entity, GastronomicCulture,
    GastronomicCultureRelation, MichelinStar, MichelinStarRelation, Product, ProductRelation,
    Recipe, RecipeRelation, Restaurant, RestaurantRelation,
};
use crate::shared::errors::{AppError, AppResult};

#[derive(Debug, Default)]
pub struct CatalogTables {
    categories: Vec<Category>,
    products: Vec<Product>,
    countries: Vec<Country>,
    gastronomic_cultures: Vec<GastronomicCulture>,
    recipes: Vec<Recipe>,
    restaurants: Vec<Restaurant>,
    michelin_stars: Vec<MichelinStar>,

    // (country_id, gastronomic_culture_id)
    country_cultures: Vec<(Uuid, Uuid)>,
    // (gastronomic_culture_id, restaurant_id)
    culture_restaurants: Vec<(Uuid, Uuid)>,

    // child id -> owner id
    recipe_culture: HashMap<Uuid, Uuid>,
    product_culture: HashMap<Uuid, Uuid>,
    star_restaurant: HashMap<Uuid, Uuid>,
}

/// Per-kind access to the row tables
pub trait InMemoryTable: Entity {
    fn rows(tables: &CatalogTables) -> &Vec<Self>;

    fn rows_mut(tables: &mut CatalogTables) -> &mut Vec<Self>;

    /// Fill the requested relations on a stored row
    fn attach(tables: &CatalogTables, row: Self, relations: &[Self::Relation]) -> Self;

    /// Fail when a loaded collection points at a missing record
    fn check_references(_tables: &CatalogTables, _entity: &Self) -> AppResult<()> {
        Ok(())
    }

    /// Rewrite the links of every loaded collection
    fn write_relations(_tables: &mut CatalogTables, _entity: &Self) {}

    /// Drop links pointing at a record about to disappear
    fn detach_references(tables: &mut CatalogTables, id: Uuid);
}

impl CatalogTables {
    pub fn row<E: InMemoryTable>(&self, id: Uuid) -> Option<&E> {
        E::rows(self).iter().find(|row| row.id() == id)
    }

    pub fn contains<E: InMemoryTable>(&self, id: Uuid) -> bool {
        self.row::<E>(id).is_some()
    }

    pub fn load<E: InMemoryTable>(&self, id: Uuid, relations: &[E::Relation]) -> Option<E> {
        self.row::<E>(id)
            .cloned()
            .map(|row| E::attach(self, row, relations))
    }

    pub fn load_all<E: InMemoryTable>(&self, relations: &[E::Relation]) -> Vec<E> {
        E::rows(self)
            .iter()
            .cloned()
            .map(|row| E::attach(self, row, relations))
            .collect()
    }

    pub fn upsert<E: InMemoryTable>(&mut self, entity: &E) -> AppResult<()> {
        E::check_references(self, entity)?;

        let row = entity.clone().detach();
        let rows = E::rows_mut(self);
        match rows.iter().position(|existing| existing.id() == row.id()) {
            Some(index) => rows[index] = row,
            None => rows.push(row),
        }

        E::write_relations(self, entity);
        Ok(())
    }

    pub fn delete<E: InMemoryTable>(&mut self, id: Uuid) {
        E::detach_references(self, id);
        E::rows_mut(self).retain(|row| row.id() != id);
    }

    pub fn delete_all<E: InMemoryTable>(&mut self) {
        let ids: Vec<Uuid> = E::rows(self).iter().map(|row| row.id()).collect();
        for id in ids {
            self.delete::<E>(id);
        }
    }

    fn rows_by_ids<E: InMemoryTable>(&self, ids: impl Iterator<Item = Uuid>) -> Vec<E> {
        ids.filter_map(|id| self.row::<E>(id).cloned()).collect()
    }

    fn children_of<E: InMemoryTable>(&self, links: &HashMap<Uuid, Uuid>, owner_id: Uuid) -> Vec<E> {
        E::rows(self)
            .iter()
            .filter(|row| links.get(&row.id()) == Some(&owner_id))
            .cloned()
            .collect()
    }

    fn require_all<E: InMemoryTable>(&self, items: Option<&Vec<E>>) -> AppResult<()> {
        for item in items.into_iter().flatten() {
            if !self.contains::<E>(item.id()) {
                return Err(AppError::DatabaseError(format!(
                    "Foreign key violation: {} {} does not exist",
                    E::KIND,
                    item.id()
                )));
            }
        }
        Ok(())
    }
}

fn replace_children(links: &mut HashMap<Uuid, Uuid>, owner_id: Uuid, child_ids: Vec<Uuid>) {
    links.retain(|_, owner| *owner != owner_id);
    for child_id in child_ids {
        links.insert(child_id, owner_id);
    }
}

impl InMemoryTable for Category {
    fn rows(tables: &CatalogTables) -> &Vec<Self> {
        &tables.categories
    }

    fn rows_mut(tables: &mut CatalogTables) -> &mut Vec<Self> {
        &mut tables.categories
    }

    fn attach(tables: &CatalogTables, mut row: Self, relations: &[CategoryRelation]) -> Self {
        if relations.contains(&CategoryRelation::Product) {
            row.product = tables
                .products
                .iter()
                .find(|product| product.category_id == Some(row.id))
                .cloned()
                .map(Box::new);
        }
        row
    }

    fn detach_references(tables: &mut CatalogTables, id: Uuid) {
        for product in tables.products.iter_mut() {
            if product.category_id == Some(id) {
                product.category_id = None;
            }
        }
    }
}

impl InMemoryTable for Product {
    fn rows(tables: &CatalogTables) -> &Vec<Self> {
        &tables.products
    }

    fn rows_mut(tables: &mut CatalogTables) -> &mut Vec<Self> {
        &mut tables.products
    }

    fn attach(tables: &CatalogTables, mut row: Self, relations: &[ProductRelation]) -> Self {
        if relations.contains(&ProductRelation::Category) {
            row.category = row
                .category_id
                .and_then(|id| tables.row::<Category>(id).cloned())
                .map(Box::new);
        }
        if relations.contains(&ProductRelation::GastronomicCulture) {
            row.gastronomic_culture = tables
                .product_culture
                .get(&row.id)
                .and_then(|id| tables.row::<GastronomicCulture>(*id).cloned())
                .map(Box::new);
        }
        row
    }

    fn check_references(tables: &CatalogTables, entity: &Self) -> AppResult<()> {
        let Some(category_id) = entity.category_id else {
            return Ok(());
        };

        if !tables.contains::<Category>(category_id) {
            return Err(AppError::DatabaseError(format!(
                "Foreign key violation: category {} does not exist",
                category_id
            )));
        }

        // One product per category
        let taken = tables
            .products
            .iter()
            .any(|product| product.id != entity.id && product.category_id == Some(category_id));
        if taken {
            return Err(AppError::DatabaseError(format!(
                "Unique violation: category {} already has a product",
                category_id
            )));
        }
        Ok(())
    }

    fn detach_references(tables: &mut CatalogTables, id: Uuid) {
        tables.product_culture.remove(&id);
    }
}

impl InMemoryTable for Country {
    fn rows(tables: &CatalogTables) -> &Vec<Self> {
        &tables.countries
    }

    fn rows_mut(tables: &mut CatalogTables) -> &mut Vec<Self> {
        &mut tables.countries
    }

    fn attach(tables: &CatalogTables, mut row: Self, relations: &[CountryRelation]) -> Self {
        if relations.contains(&CountryRelation::GastronomicCultures) {
            let culture_ids = tables
                .country_cultures
                .iter()
                .filter(|(country_id, _)| *country_id == row.id)
                .map(|(_, culture_id)| *culture_id);
            row.gastronomic_cultures = Some(tables.rows_by_ids(culture_ids));
        }
        row
    }

    fn check_references(tables: &CatalogTables, entity: &Self) -> AppResult<()> {
        tables.require_all(entity.gastronomic_cultures.as_ref())
    }

    fn write_relations(tables: &mut CatalogTables, entity: &Self) {
        if let Some(cultures) = &entity.gastronomic_cultures {
            tables
                .country_cultures
                .retain(|(country_id, _)| *country_id != entity.id);
            tables
                .country_cultures
                .extend(cultures.iter().map(|culture| (entity.id, culture.id)));
        }
    }

    fn detach_references(tables: &mut CatalogTables, id: Uuid) {
        tables
            .country_cultures
            .retain(|(country_id, _)| *country_id != id);
    }
}

impl InMemoryTable for GastronomicCulture {
    fn rows(tables: &CatalogTables) -> &Vec<Self> {
        &tables.gastronomic_cultures
    }

    fn rows_mut(tables: &mut CatalogTables) -> &mut Vec<Self> {
        &mut tables.gastronomic_cultures
    }

    fn attach(
        tables: &CatalogTables,
        mut row: Self,
        relations: &[GastronomicCultureRelation],
    ) -> Self {
        let id = row.id;
        for relation in relations {
            match relation {
                GastronomicCultureRelation::Countries => {
                    let country_ids = tables
                        .country_cultures
                        .iter()
                        .filter(|(_, culture_id)| *culture_id == id)
                        .map(|(country_id, _)| *country_id);
                    row.countries = Some(tables.rows_by_ids(country_ids));
                }
                GastronomicCultureRelation::Restaurants => {
                    let restaurant_ids = tables
                        .culture_restaurants
                        .iter()
                        .filter(|(culture_id, _)| *culture_id == id)
                        .map(|(_, restaurant_id)| *restaurant_id);
                    row.restaurants = Some(tables.rows_by_ids(restaurant_ids));
                }
                GastronomicCultureRelation::Recipes => {
                    row.recipes = Some(tables.children_of(&tables.recipe_culture, id));
                }
                GastronomicCultureRelation::Products => {
                    row.products = Some(tables.children_of(&tables.product_culture, id));
                }
            }
        }
        row
    }

    fn check_references(tables: &CatalogTables, entity: &Self) -> AppResult<()> {
        tables.require_all(entity.countries.as_ref())?;
        tables.require_all(entity.restaurants.as_ref())?;
        tables.require_all(entity.recipes.as_ref())?;
        tables.require_all(entity.products.as_ref())
    }

    fn write_relations(tables: &mut CatalogTables, entity: &Self) {
        let id = entity.id;

        if let Some(countries) = &entity.countries {
            tables
                .country_cultures
                .retain(|(_, culture_id)| *culture_id != id);
            tables
                .country_cultures
                .extend(countries.iter().map(|country| (country.id, id)));
        }

        if let Some(restaurants) = &entity.restaurants {
            tables
                .culture_restaurants
                .retain(|(culture_id, _)| *culture_id != id);
            tables
                .culture_restaurants
                .extend(restaurants.iter().map(|restaurant| (id, restaurant.id)));
        }

        if let Some(recipes) = &entity.recipes {
            let recipe_ids = recipes.iter().map(|recipe| recipe.id).collect();
            replace_children(&mut tables.recipe_culture, id, recipe_ids);
        }

        if let Some(products) = &entity.products {
            let product_ids = products.iter().map(|product| product.id).collect();
            replace_children(&mut tables.product_culture, id, product_ids);
        }
    }

    fn detach_references(tables: &mut CatalogTables, id: Uuid) {
        tables
            .country_cultures
            .retain(|(_, culture_id)| *culture_id != id);
        tables
            .culture_restaurants
            .retain(|(culture_id, _)| *culture_id != id);
        tables.recipe_culture.retain(|_, culture_id| *culture_id != id);
        tables.product_culture.retain(|_, culture_id| *culture_id != id);
    }
}

impl InMemoryTable for Recipe {
    fn rows(tables: &CatalogTables) -> &Vec<Self> {
        &tables.recipes
    }

    fn rows_mut(tables: &mut CatalogTables) -> &mut Vec<Self> {
        &mut tables.recipes
    }

    fn attach(tables: &CatalogTables, mut row: Self, relations: &[RecipeRelation]) -> Self {
        if relations.contains(&RecipeRelation::GastronomicCulture) {
            row.gastronomic_culture = tables
                .recipe_culture
                .get(&row.id)
                .and_then(|id| tables.row::<GastronomicCulture>(*id).cloned())
                .map(Box::new);
        }
        row
    }

    fn detach_references(tables: &mut CatalogTables, id: Uuid) {
        tables.recipe_culture.remove(&id);
    }
}

impl InMemoryTable for Restaurant {
    fn rows(tables: &CatalogTables) -> &Vec<Self> {
        &tables.restaurants
    }

    fn rows_mut(tables: &mut CatalogTables) -> &mut Vec<Self> {
        &mut tables.restaurants
    }

    fn attach(tables: &CatalogTables, mut row: Self, relations: &[RestaurantRelation]) -> Self {
        let id = row.id;
        for relation in relations {
            match relation {
                RestaurantRelation::MichelinStars => {
                    row.michelin_stars = Some(tables.children_of(&tables.star_restaurant, id));
                }
                RestaurantRelation::GastronomicCultures => {
                    let culture_ids = tables
                        .culture_restaurants
                        .iter()
                        .filter(|(_, restaurant_id)| *restaurant_id == id)
                        .map(|(culture_id, _)| *culture_id);
                    row.gastronomic_cultures = Some(tables.rows_by_ids(culture_ids));
                }
            }
        }
        row
    }

    fn check_references(tables: &CatalogTables, entity: &Self) -> AppResult<()> {
        tables.require_all(entity.michelin_stars.as_ref())?;
        tables.require_all(entity.gastronomic_cultures.as_ref())
    }

    fn write_relations(tables: &mut CatalogTables, entity: &Self) {
        let id = entity.id;

        if let Some(stars) = &entity.michelin_stars {
            let star_ids = stars.iter().map(|star| star.id).collect();
            replace_children(&mut tables.star_restaurant, id, star_ids);
        }

        if let Some(cultures) = &entity.gastronomic_cultures {
            tables
                .culture_restaurants
                .retain(|(_, restaurant_id)| *restaurant_id != id);
            tables
                .culture_restaurants
                .extend(cultures.iter().map(|culture| (culture.id, id)));
        }
    }

    fn detach_references(tables: &mut CatalogTables, id: Uuid) {
        tables
            .culture_restaurants
            .retain(|(_, restaurant_id)| *restaurant_id != id);
        tables
            .star_restaurant
            .retain(|_, restaurant_id| *restaurant_id != id);
    }
}

impl InMemoryTable for MichelinStar {
    fn rows(tables: &CatalogTables) -> &Vec<Self> {
        &tables.michelin_stars
    }

    fn rows_mut(tables: &mut CatalogTables) -> &mut Vec<Self> {
        &mut tables.michelin_stars
    }

    fn attach(tables: &CatalogTables, mut row: Self, relations: &[MichelinStarRelation]) -> Self {
        if relations.contains(&MichelinStarRelation::Restaurant) {
            row.restaurant = tables
                .star_restaurant
                .get(&row.id)
                .and_then(|id| tables.row::<Restaurant>(*id).cloned())
                .map(Box::new);
        }
        row
    }

    fn detach_references(tables: &mut CatalogTables, id: Uuid) {
        tables.star_restaurant.remove(&id);
    }
}
