//! Diesel mapping of each catalog kind onto its table and link columns

use diesel::pg::PgConnection;
use diesel::prelude::*;
use std::collections::HashSet;
use uuid::Uuid;

use super::models::*;
use crate::modules::catalog::domain::{
    in_id_order, Category, CategoryRelation, Country, CountryRelation, Entity,
    GastronomicCulture, GastronomicCultureRelation, MichelinStar, MichelinStarRelation, Product,
    ProductRelation, Recipe, RecipeRelation, Restaurant, RestaurantRelation,
};
use crate::schema::{
    categories, countries, country_gastronomic_cultures, gastronomic_culture_restaurants,
    gastronomic_cultures, michelin_stars, products, recipes, restaurants,
};
use crate::shared::errors::{AppError, AppResult};

pub trait PgTable: Entity {
    /// Table name, used in timing logs
    const TABLE: &'static str;

    fn load_row(conn: &mut PgConnection, id: Uuid) -> QueryResult<Option<Self>>;

    fn load_all_rows(conn: &mut PgConnection) -> QueryResult<Vec<Self>>;

    /// Fill the requested relations on a loaded row
    fn attach(conn: &mut PgConnection, row: Self, relations: &[Self::Relation]) -> AppResult<Self>;

    /// Insert the scalar columns, or overwrite them when the id exists
    fn upsert_row(conn: &mut PgConnection, entity: &Self) -> QueryResult<usize>;

    /// Rewrite the link rows of every loaded collection
    fn write_relations(_conn: &mut PgConnection, _entity: &Self) -> AppResult<()> {
        Ok(())
    }

    fn delete_row(conn: &mut PgConnection, id: Uuid) -> QueryResult<usize>;

    fn delete_all(conn: &mut PgConnection) -> QueryResult<usize>;
}

fn ids_of<E: Entity>(items: &[E]) -> Vec<Uuid> {
    items.iter().map(|item| item.id()).collect()
}

/// Every id of a one-to-many collection must have matched a child row
fn expect_children<E: Entity>(ids: &[Uuid], updated: usize) -> AppResult<()> {
    let distinct: HashSet<&Uuid> = ids.iter().collect();
    if updated < distinct.len() {
        return Err(AppError::DatabaseError(format!(
            "Foreign key violation: {} {} of {} referenced rows exist",
            E::KIND,
            updated,
            distinct.len()
        )));
    }
    Ok(())
}

fn cultures_by_ids(conn: &mut PgConnection, ids: &[Uuid]) -> QueryResult<Vec<GastronomicCulture>> {
    let rows: Vec<GastronomicCulture> = gastronomic_cultures::table
        .filter(gastronomic_cultures::id.eq_any(ids))
        .select(GastronomicCultureModel::as_select())
        .load::<GastronomicCultureModel>(conn)?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(in_id_order(ids, &rows))
}

fn restaurants_by_ids(conn: &mut PgConnection, ids: &[Uuid]) -> QueryResult<Vec<Restaurant>> {
    let rows: Vec<Restaurant> = restaurants::table
        .filter(restaurants::id.eq_any(ids))
        .select(RestaurantModel::as_select())
        .load::<RestaurantModel>(conn)?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(in_id_order(ids, &rows))
}

fn countries_by_ids(conn: &mut PgConnection, ids: &[Uuid]) -> QueryResult<Vec<Country>> {
    let rows: Vec<Country> = countries::table
        .filter(countries::id.eq_any(ids))
        .select(CountryModel::as_select())
        .load::<CountryModel>(conn)?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(in_id_order(ids, &rows))
}

fn culture_by_id(
    conn: &mut PgConnection,
    id: Option<Uuid>,
) -> QueryResult<Option<Box<GastronomicCulture>>> {
    let Some(id) = id else {
        return Ok(None);
    };
    let culture = gastronomic_cultures::table
        .find(id)
        .select(GastronomicCultureModel::as_select())
        .first::<GastronomicCultureModel>(conn)
        .optional()?;
    Ok(culture.map(|model| Box::new(model.into())))
}

impl PgTable for Category {
    const TABLE: &'static str = "categories";

    fn load_row(conn: &mut PgConnection, id: Uuid) -> QueryResult<Option<Self>> {
        let model = categories::table
            .find(id)
            .select(CategoryModel::as_select())
            .first::<CategoryModel>(conn)
            .optional()?;
        Ok(model.map(Into::into))
    }

    fn load_all_rows(conn: &mut PgConnection) -> QueryResult<Vec<Self>> {
        let models = categories::table
            .order(categories::name.asc())
            .select(CategoryModel::as_select())
            .load::<CategoryModel>(conn)?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    fn attach(
        conn: &mut PgConnection,
        mut row: Self,
        relations: &[CategoryRelation],
    ) -> AppResult<Self> {
        if relations.contains(&CategoryRelation::Product) {
            let product = products::table
                .filter(products::category_id.eq(row.id))
                .select(ProductModel::as_select())
                .first::<ProductModel>(conn)
                .optional()?;
            row.product = product.map(|model| Box::new(model.into()));
        }
        Ok(row)
    }

    fn upsert_row(conn: &mut PgConnection, entity: &Self) -> QueryResult<usize> {
        let record = CategoryRecord::from(entity);
        diesel::insert_into(categories::table)
            .values(&record)
            .on_conflict(categories::id)
            .do_update()
            .set(&record)
            .execute(conn)
    }

    fn delete_row(conn: &mut PgConnection, id: Uuid) -> QueryResult<usize> {
        diesel::delete(categories::table.find(id)).execute(conn)
    }

    fn delete_all(conn: &mut PgConnection) -> QueryResult<usize> {
        diesel::delete(categories::table).execute(conn)
    }
}

impl PgTable for Product {
    const TABLE: &'static str = "products";

    fn load_row(conn: &mut PgConnection, id: Uuid) -> QueryResult<Option<Self>> {
        let model = products::table
            .find(id)
            .select(ProductModel::as_select())
            .first::<ProductModel>(conn)
            .optional()?;
        Ok(model.map(Into::into))
    }

    fn load_all_rows(conn: &mut PgConnection) -> QueryResult<Vec<Self>> {
        let models = products::table
            .order(products::name.asc())
            .select(ProductModel::as_select())
            .load::<ProductModel>(conn)?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    fn attach(
        conn: &mut PgConnection,
        mut row: Self,
        relations: &[ProductRelation],
    ) -> AppResult<Self> {
        for relation in relations {
            match relation {
                ProductRelation::Category => {
                    row.category = match row.category_id {
                        Some(category_id) => categories::table
                            .find(category_id)
                            .select(CategoryModel::as_select())
                            .first::<CategoryModel>(conn)
                            .optional()?
                            .map(|model| Box::new(model.into())),
                        None => None,
                    };
                }
                ProductRelation::GastronomicCulture => {
                    let culture_id = products::table
                        .find(row.id)
                        .select(products::gastronomic_culture_id)
                        .first::<Option<Uuid>>(conn)
                        .optional()?
                        .flatten();
                    row.gastronomic_culture = culture_by_id(conn, culture_id)?;
                }
            }
        }
        Ok(row)
    }

    fn upsert_row(conn: &mut PgConnection, entity: &Self) -> QueryResult<usize> {
        let record = ProductRecord::from(entity);
        diesel::insert_into(products::table)
            .values(&record)
            .on_conflict(products::id)
            .do_update()
            .set(&record)
            .execute(conn)
    }

    fn delete_row(conn: &mut PgConnection, id: Uuid) -> QueryResult<usize> {
        diesel::delete(products::table.find(id)).execute(conn)
    }

    fn delete_all(conn: &mut PgConnection) -> QueryResult<usize> {
        diesel::delete(products::table).execute(conn)
    }
}

impl PgTable for Country {
    const TABLE: &'static str = "countries";

    fn load_row(conn: &mut PgConnection, id: Uuid) -> QueryResult<Option<Self>> {
        let model = countries::table
            .find(id)
            .select(CountryModel::as_select())
            .first::<CountryModel>(conn)
            .optional()?;
        Ok(model.map(Into::into))
    }

    fn load_all_rows(conn: &mut PgConnection) -> QueryResult<Vec<Self>> {
        let models = countries::table
            .order(countries::name.asc())
            .select(CountryModel::as_select())
            .load::<CountryModel>(conn)?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    fn attach(
        conn: &mut PgConnection,
        mut row: Self,
        relations: &[CountryRelation],
    ) -> AppResult<Self> {
        if relations.contains(&CountryRelation::GastronomicCultures) {
            let culture_ids: Vec<Uuid> = country_gastronomic_cultures::table
                .filter(country_gastronomic_cultures::country_id.eq(row.id))
                .order(country_gastronomic_cultures::id.asc())
                .select(country_gastronomic_cultures::gastronomic_culture_id)
                .load(conn)?;
            row.gastronomic_cultures = Some(cultures_by_ids(conn, &culture_ids)?);
        }
        Ok(row)
    }

    fn upsert_row(conn: &mut PgConnection, entity: &Self) -> QueryResult<usize> {
        let record = CountryRecord::from(entity);
        diesel::insert_into(countries::table)
            .values(&record)
            .on_conflict(countries::id)
            .do_update()
            .set(&record)
            .execute(conn)
    }

    fn write_relations(conn: &mut PgConnection, entity: &Self) -> AppResult<()> {
        if let Some(cultures) = &entity.gastronomic_cultures {
            diesel::delete(
                country_gastronomic_cultures::table
                    .filter(country_gastronomic_cultures::country_id.eq(entity.id)),
            )
            .execute(conn)?;

            let links: Vec<NewCountryGastronomicCulture> = cultures
                .iter()
                .map(|culture| NewCountryGastronomicCulture {
                    country_id: entity.id,
                    gastronomic_culture_id: culture.id,
                })
                .collect();
            if !links.is_empty() {
                diesel::insert_into(country_gastronomic_cultures::table)
                    .values(&links)
                    .execute(conn)?;
            }
        }
        Ok(())
    }

    fn delete_row(conn: &mut PgConnection, id: Uuid) -> QueryResult<usize> {
        diesel::delete(countries::table.find(id)).execute(conn)
    }

    fn delete_all(conn: &mut PgConnection) -> QueryResult<usize> {
        diesel::delete(countries::table).execute(conn)
    }
}

impl PgTable for GastronomicCulture {
    const TABLE: &'static str = "gastronomic_cultures";

    fn load_row(conn: &mut PgConnection, id: Uuid) -> QueryResult<Option<Self>> {
        let model = gastronomic_cultures::table
            .find(id)
            .select(GastronomicCultureModel::as_select())
            .first::<GastronomicCultureModel>(conn)
            .optional()?;
        Ok(model.map(Into::into))
    }

    fn load_all_rows(conn: &mut PgConnection) -> QueryResult<Vec<Self>> {
        let models = gastronomic_cultures::table
            .order(gastronomic_cultures::name.asc())
            .select(GastronomicCultureModel::as_select())
            .load::<GastronomicCultureModel>(conn)?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    fn attach(
        conn: &mut PgConnection,
        mut row: Self,
        relations: &[GastronomicCultureRelation],
    ) -> AppResult<Self> {
        for relation in relations {
            match relation {
                GastronomicCultureRelation::Countries => {
                    let country_ids: Vec<Uuid> = country_gastronomic_cultures::table
                        .filter(country_gastronomic_cultures::gastronomic_culture_id.eq(row.id))
                        .order(country_gastronomic_cultures::id.asc())
                        .select(country_gastronomic_cultures::country_id)
                        .load(conn)?;
                    row.countries = Some(countries_by_ids(conn, &country_ids)?);
                }
                GastronomicCultureRelation::Restaurants => {
                    let restaurant_ids: Vec<Uuid> = gastronomic_culture_restaurants::table
                        .filter(gastronomic_culture_restaurants::gastronomic_culture_id.eq(row.id))
                        .order(gastronomic_culture_restaurants::id.asc())
                        .select(gastronomic_culture_restaurants::restaurant_id)
                        .load(conn)?;
                    row.restaurants = Some(restaurants_by_ids(conn, &restaurant_ids)?);
                }
                GastronomicCultureRelation::Recipes => {
                    let models = recipes::table
                        .filter(recipes::gastronomic_culture_id.eq(row.id))
                        .order(recipes::name.asc())
                        .select(RecipeModel::as_select())
                        .load::<RecipeModel>(conn)?;
                    row.recipes = Some(models.into_iter().map(Into::into).collect());
                }
                GastronomicCultureRelation::Products => {
                    let models = products::table
                        .filter(products::gastronomic_culture_id.eq(row.id))
                        .order(products::name.asc())
                        .select(ProductModel::as_select())
                        .load::<ProductModel>(conn)?;
                    row.products = Some(models.into_iter().map(Into::into).collect());
                }
            }
        }
        Ok(row)
    }

    fn upsert_row(conn: &mut PgConnection, entity: &Self) -> QueryResult<usize> {
        let record = GastronomicCultureRecord::from(entity);
        diesel::insert_into(gastronomic_cultures::table)
            .values(&record)
            .on_conflict(gastronomic_cultures::id)
            .do_update()
            .set(&record)
            .execute(conn)
    }

    fn write_relations(conn: &mut PgConnection, entity: &Self) -> AppResult<()> {
        let id = entity.id;

        if let Some(countries) = &entity.countries {
            diesel::delete(
                country_gastronomic_cultures::table
                    .filter(country_gastronomic_cultures::gastronomic_culture_id.eq(id)),
            )
            .execute(conn)?;

            let links: Vec<NewCountryGastronomicCulture> = countries
                .iter()
                .map(|country| NewCountryGastronomicCulture {
                    country_id: country.id,
                    gastronomic_culture_id: id,
                })
                .collect();
            if !links.is_empty() {
                diesel::insert_into(country_gastronomic_cultures::table)
                    .values(&links)
                    .execute(conn)?;
            }
        }

        if let Some(restaurants) = &entity.restaurants {
            diesel::delete(
                gastronomic_culture_restaurants::table
                    .filter(gastronomic_culture_restaurants::gastronomic_culture_id.eq(id)),
            )
            .execute(conn)?;

            let links: Vec<NewGastronomicCultureRestaurant> = restaurants
                .iter()
                .map(|restaurant| NewGastronomicCultureRestaurant {
                    gastronomic_culture_id: id,
                    restaurant_id: restaurant.id,
                })
                .collect();
            if !links.is_empty() {
                diesel::insert_into(gastronomic_culture_restaurants::table)
                    .values(&links)
                    .execute(conn)?;
            }
        }

        if let Some(recipes) = &entity.recipes {
            let recipe_ids = ids_of(recipes);
            diesel::update(recipes::table.filter(recipes::gastronomic_culture_id.eq(id)))
                .set(recipes::gastronomic_culture_id.eq(None::<Uuid>))
                .execute(conn)?;
            let updated = diesel::update(recipes::table.filter(recipes::id.eq_any(&recipe_ids)))
                .set(recipes::gastronomic_culture_id.eq(Some(id)))
                .execute(conn)?;
            expect_children::<Recipe>(&recipe_ids, updated)?;
        }

        if let Some(products) = &entity.products {
            let product_ids = ids_of(products);
            diesel::update(products::table.filter(products::gastronomic_culture_id.eq(id)))
                .set(products::gastronomic_culture_id.eq(None::<Uuid>))
                .execute(conn)?;
            let updated = diesel::update(products::table.filter(products::id.eq_any(&product_ids)))
                .set(products::gastronomic_culture_id.eq(Some(id)))
                .execute(conn)?;
            expect_children::<Product>(&product_ids, updated)?;
        }

        Ok(())
    }

    fn delete_row(conn: &mut PgConnection, id: Uuid) -> QueryResult<usize> {
        diesel::delete(gastronomic_cultures::table.find(id)).execute(conn)
    }

    fn delete_all(conn: &mut PgConnection) -> QueryResult<usize> {
        diesel::delete(gastronomic_cultures::table).execute(conn)
    }
}

impl PgTable for Recipe {
    const TABLE: &'static str = "recipes";

    fn load_row(conn: &mut PgConnection, id: Uuid) -> QueryResult<Option<Self>> {
        let model = recipes::table
            .find(id)
            .select(RecipeModel::as_select())
            .first::<RecipeModel>(conn)
            .optional()?;
        Ok(model.map(Into::into))
    }

    fn load_all_rows(conn: &mut PgConnection) -> QueryResult<Vec<Self>> {
        let models = recipes::table
            .order(recipes::name.asc())
            .select(RecipeModel::as_select())
            .load::<RecipeModel>(conn)?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    fn attach(
        conn: &mut PgConnection,
        mut row: Self,
        relations: &[RecipeRelation],
    ) -> AppResult<Self> {
        if relations.contains(&RecipeRelation::GastronomicCulture) {
            let culture_id = recipes::table
                .find(row.id)
                .select(recipes::gastronomic_culture_id)
                .first::<Option<Uuid>>(conn)
                .optional()?
                .flatten();
            row.gastronomic_culture = culture_by_id(conn, culture_id)?;
        }
        Ok(row)
    }

    fn upsert_row(conn: &mut PgConnection, entity: &Self) -> QueryResult<usize> {
        let record = RecipeRecord::from(entity);
        diesel::insert_into(recipes::table)
            .values(&record)
            .on_conflict(recipes::id)
            .do_update()
            .set(&record)
            .execute(conn)
    }

    fn delete_row(conn: &mut PgConnection, id: Uuid) -> QueryResult<usize> {
        diesel::delete(recipes::table.find(id)).execute(conn)
    }

    fn delete_all(conn: &mut PgConnection) -> QueryResult<usize> {
        diesel::delete(recipes::table).execute(conn)
    }
}

impl PgTable for Restaurant {
    const TABLE: &'static str = "restaurants";

    fn load_row(conn: &mut PgConnection, id: Uuid) -> QueryResult<Option<Self>> {
        let model = restaurants::table
            .find(id)
            .select(RestaurantModel::as_select())
            .first::<RestaurantModel>(conn)
            .optional()?;
        Ok(model.map(Into::into))
    }

    fn load_all_rows(conn: &mut PgConnection) -> QueryResult<Vec<Self>> {
        let models = restaurants::table
            .order(restaurants::name.asc())
            .select(RestaurantModel::as_select())
            .load::<RestaurantModel>(conn)?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    fn attach(
        conn: &mut PgConnection,
        mut row: Self,
        relations: &[RestaurantRelation],
    ) -> AppResult<Self> {
        for relation in relations {
            match relation {
                RestaurantRelation::MichelinStars => {
                    let models = michelin_stars::table
                        .filter(michelin_stars::restaurant_id.eq(row.id))
                        .order(michelin_stars::awarded_on.asc())
                        .select(MichelinStarModel::as_select())
                        .load::<MichelinStarModel>(conn)?;
                    row.michelin_stars = Some(models.into_iter().map(Into::into).collect());
                }
                RestaurantRelation::GastronomicCultures => {
                    let culture_ids: Vec<Uuid> = gastronomic_culture_restaurants::table
                        .filter(gastronomic_culture_restaurants::restaurant_id.eq(row.id))
                        .order(gastronomic_culture_restaurants::id.asc())
                        .select(gastronomic_culture_restaurants::gastronomic_culture_id)
                        .load(conn)?;
                    row.gastronomic_cultures = Some(cultures_by_ids(conn, &culture_ids)?);
                }
            }
        }
        Ok(row)
    }

    fn upsert_row(conn: &mut PgConnection, entity: &Self) -> QueryResult<usize> {
        let record = RestaurantRecord::from(entity);
        diesel::insert_into(restaurants::table)
            .values(&record)
            .on_conflict(restaurants::id)
            .do_update()
            .set(&record)
            .execute(conn)
    }

    fn write_relations(conn: &mut PgConnection, entity: &Self) -> AppResult<()> {
        let id = entity.id;

        if let Some(stars) = &entity.michelin_stars {
            let star_ids = ids_of(stars);
            diesel::update(michelin_stars::table.filter(michelin_stars::restaurant_id.eq(id)))
                .set(michelin_stars::restaurant_id.eq(None::<Uuid>))
                .execute(conn)?;
            let updated =
                diesel::update(michelin_stars::table.filter(michelin_stars::id.eq_any(&star_ids)))
                    .set(michelin_stars::restaurant_id.eq(Some(id)))
                    .execute(conn)?;
            expect_children::<MichelinStar>(&star_ids, updated)?;
        }

        if let Some(cultures) = &entity.gastronomic_cultures {
            diesel::delete(
                gastronomic_culture_restaurants::table
                    .filter(gastronomic_culture_restaurants::restaurant_id.eq(id)),
            )
            .execute(conn)?;

            let links: Vec<NewGastronomicCultureRestaurant> = cultures
                .iter()
                .map(|culture| NewGastronomicCultureRestaurant {
                    gastronomic_culture_id: culture.id,
                    restaurant_id: id,
                })
                .collect();
            if !links.is_empty() {
                diesel::insert_into(gastronomic_culture_restaurants::table)
                    .values(&links)
                    .execute(conn)?;
            }
        }

        Ok(())
    }

    fn delete_row(conn: &mut PgConnection, id: Uuid) -> QueryResult<usize> {
        diesel::delete(restaurants::table.find(id)).execute(conn)
    }

    fn delete_all(conn: &mut PgConnection) -> QueryResult<usize> {
        diesel::delete(restaurants::table).execute(conn)
    }
}

impl PgTable for MichelinStar {
    const TABLE: &'static str = "michelin_stars";

    fn load_row(conn: &mut PgConnection, id: Uuid) -> QueryResult<Option<Self>> {
        let model = michelin_stars::table
            .find(id)
            .select(MichelinStarModel::as_select())
            .first::<MichelinStarModel>(conn)
            .optional()?;
        Ok(model.map(Into::into))
    }

    fn load_all_rows(conn: &mut PgConnection) -> QueryResult<Vec<Self>> {
        let models = michelin_stars::table
            .order(michelin_stars::awarded_on.asc())
            .select(MichelinStarModel::as_select())
            .load::<MichelinStarModel>(conn)?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    fn attach(
        conn: &mut PgConnection,
        mut row: Self,
        relations: &[MichelinStarRelation],
    ) -> AppResult<Self> {
        if relations.contains(&MichelinStarRelation::Restaurant) {
            let restaurant_id = michelin_stars::table
                .find(row.id)
                .select(michelin_stars::restaurant_id)
                .first::<Option<Uuid>>(conn)
                .optional()?
                .flatten();
            row.restaurant = match restaurant_id {
                Some(restaurant_id) => restaurants::table
                    .find(restaurant_id)
                    .select(RestaurantModel::as_select())
                    .first::<RestaurantModel>(conn)
                    .optional()?
                    .map(|model| Box::new(model.into())),
                None => None,
            };
        }
        Ok(row)
    }

    fn upsert_row(conn: &mut PgConnection, entity: &Self) -> QueryResult<usize> {
        let record = MichelinStarRecord::from(entity);
        diesel::insert_into(michelin_stars::table)
            .values(&record)
            .on_conflict(michelin_stars::id)
            .do_update()
            .set(&record)
            .execute(conn)
    }

    fn delete_row(conn: &mut PgConnection, id: Uuid) -> QueryResult<usize> {
        diesel::delete(michelin_stars::table.find(id)).execute(conn)
    }

    fn delete_all(conn: &mut PgConnection) -> QueryResult<usize> {
        diesel::delete(michelin_stars::table).execute(conn)
    }
}
