use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::modules::catalog::domain::{not_found, Entity, RecordStore};
use crate::modules::relationships::domain::Association;
use crate::shared::errors::{AppError, AppResult};

/// Manages one owner -> related collection over the record stores.
///
/// The related record is always resolved before the owner, so a request
/// naming two missing ids reports the related kind.
pub struct RelationshipManager<A: Association> {
    owners: Arc<dyn RecordStore<A::Owner>>,
    related: Arc<dyn RecordStore<A::Related>>,
    _association: PhantomData<A>,
}

impl<A: Association> RelationshipManager<A> {
    pub fn new(
        owners: Arc<dyn RecordStore<A::Owner>>,
        related: Arc<dyn RecordStore<A::Related>>,
    ) -> Self {
        Self {
            owners,
            related,
            _association: PhantomData,
        }
    }

    /// Append an existing related record to the owner's collection.
    ///
    /// Repeats are not filtered out. For one-to-many relations the link is a
    /// foreign key on the related record, so the store keeps a single entry
    /// even when the returned owner lists it twice.
    pub async fn add_related(&self, owner_id: Uuid, related_id: Uuid) -> AppResult<A::Owner> {
        let related = self.require_related(related_id).await?;
        let mut owner = self.require_owner(owner_id).await?;

        match A::collection_mut(&mut owner) {
            Some(items) => items.push(related),
            None => return Err(missing_collection::<A>()),
        }

        let saved = self.owners.save(owner).await?;
        info!(
            owner = %owner_id,
            related = %related_id,
            "Added {} to {}",
            <A::Related as Entity>::KIND,
            <A::Owner as Entity>::KIND
        );
        Ok(saved)
    }

    /// Return the copy of a related record held in the owner's collection
    pub async fn find_one_related(
        &self,
        owner_id: Uuid,
        related_id: Uuid,
    ) -> AppResult<A::Related> {
        self.require_related(related_id).await?;
        let owner = self.require_owner(owner_id).await?;

        let items = A::collection(&owner).ok_or_else(missing_collection::<A>)?;
        items
            .iter()
            .find(|item| item.id() == related_id)
            .cloned()
            .ok_or_else(not_associated::<A>)
    }

    pub async fn find_all_related(&self, owner_id: Uuid) -> AppResult<Vec<A::Related>> {
        let owner = self.require_owner(owner_id).await?;

        A::collection(&owner)
            .cloned()
            .ok_or_else(missing_collection::<A>)
    }

    /// Replace the whole collection; every item must exist
    pub async fn associate_related(
        &self,
        owner_id: Uuid,
        items: Vec<A::Related>,
    ) -> AppResult<A::Owner> {
        let mut owner = self.require_owner(owner_id).await?;

        // One lookup at a time, stopping at the first missing id
        for item in &items {
            self.require_related(item.id()).await?;
        }

        let count = items.len();
        *A::collection_mut(&mut owner) = Some(items);

        let saved = self.owners.save(owner).await?;
        info!(
            owner = %owner_id,
            count,
            "Associated {} with {}",
            <A::Related as Entity>::KIND,
            <A::Owner as Entity>::KIND
        );
        Ok(saved)
    }

    pub async fn delete_related(&self, owner_id: Uuid, related_id: Uuid) -> AppResult<()> {
        self.require_related(related_id).await?;
        let mut owner = self.require_owner(owner_id).await?;

        let items = A::collection_mut(&mut owner)
            .as_mut()
            .ok_or_else(missing_collection::<A>)?;
        if !items.iter().any(|item| item.id() == related_id) {
            return Err(not_associated::<A>());
        }
        items.retain(|item| item.id() != related_id);

        self.owners.save(owner).await?;
        info!(
            owner = %owner_id,
            related = %related_id,
            "Removed {} from {}",
            <A::Related as Entity>::KIND,
            <A::Owner as Entity>::KIND
        );
        Ok(())
    }

    async fn require_related(&self, id: Uuid) -> AppResult<A::Related> {
        debug!(id = %id, "Looking up {}", <A::Related as Entity>::KIND);
        self.related
            .find_by_id(id, &[])
            .await?
            .ok_or_else(not_found::<A::Related>)
    }

    async fn require_owner(&self, id: Uuid) -> AppResult<A::Owner> {
        debug!(
            id = %id,
            relation = ?A::RELATION,
            "Looking up {}",
            <A::Owner as Entity>::KIND
        );
        self.owners
            .find_by_id(id, &[A::RELATION])
            .await?
            .ok_or_else(not_found::<A::Owner>)
    }
}

fn not_associated<A: Association>() -> AppError {
    AppError::PreconditionFailed(format!(
        "The {} with the given id is not associated to the {}",
        <A::Related as Entity>::KIND,
        <A::Owner as Entity>::KIND
    ))
}

fn missing_collection<A: Association>() -> AppError {
    AppError::InternalError(format!(
        "The {} was loaded without its {} collection",
        <A::Owner as Entity>::KIND,
        <A::Related as Entity>::KIND
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::catalog::domain::{
        MichelinStar, MichelinStarRelation, Restaurant, RestaurantRelation,
    };
    use crate::modules::relationships::domain::RestaurantMichelinStars;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use mockall::{mock, Sequence};

    mock! {
        RestaurantStore {}

        #[async_trait]
        impl RecordStore<Restaurant> for RestaurantStore {
            async fn find_by_id(&self, id: Uuid, relations: &[RestaurantRelation]) -> AppResult<Option<Restaurant>>;
            async fn find_all(&self, relations: &[RestaurantRelation]) -> AppResult<Vec<Restaurant>>;
            async fn save(&self, entity: Restaurant) -> AppResult<Restaurant>;
            async fn remove(&self, entity: &Restaurant) -> AppResult<()>;
            async fn clear(&self) -> AppResult<()>;
        }
    }

    mock! {
        StarStore {}

        #[async_trait]
        impl RecordStore<MichelinStar> for StarStore {
            async fn find_by_id(&self, id: Uuid, relations: &[MichelinStarRelation]) -> AppResult<Option<MichelinStar>>;
            async fn find_all(&self, relations: &[MichelinStarRelation]) -> AppResult<Vec<MichelinStar>>;
            async fn save(&self, entity: MichelinStar) -> AppResult<MichelinStar>;
            async fn remove(&self, entity: &MichelinStar) -> AppResult<()>;
            async fn clear(&self) -> AppResult<()>;
        }
    }

    type Manager = RelationshipManager<RestaurantMichelinStars>;

    fn star() -> MichelinStar {
        MichelinStar::new(NaiveDate::from_ymd_opt(2022, 3, 14).unwrap())
    }

    #[tokio::test]
    async fn add_checks_related_then_owner_then_saves() {
        let star = star();
        let restaurant = Restaurant::new("Central", "Lima").with_michelin_stars(vec![]);
        let (star_id, restaurant_id) = (star.id, restaurant.id);

        let mut seq = Sequence::new();
        let mut stars = MockStarStore::new();
        let mut restaurants = MockRestaurantStore::new();

        let found_star = star.clone();
        stars
            .expect_find_by_id()
            .withf(move |id, relations| *id == star_id && relations.is_empty())
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |_, _| Ok(Some(found_star.clone())));
        let found_restaurant = restaurant.clone();
        restaurants
            .expect_find_by_id()
            .withf(move |id, relations| {
                *id == restaurant_id && relations == [RestaurantRelation::MichelinStars].as_slice()
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |_, _| Ok(Some(found_restaurant.clone())));
        restaurants
            .expect_save()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|restaurant| Ok(restaurant));

        let manager = Manager::new(Arc::new(restaurants), Arc::new(stars));
        let saved = manager.add_related(restaurant_id, star_id).await.unwrap();

        let held = saved.michelin_stars.unwrap();
        assert_eq!(held.len(), 1);
        assert_eq!(held[0].id, star_id);
    }

    #[tokio::test]
    async fn missing_related_short_circuits_before_owner_lookup() {
        let mut stars = MockStarStore::new();
        let mut restaurants = MockRestaurantStore::new();

        stars.expect_find_by_id().returning(|_, _| Ok(None));
        restaurants.expect_find_by_id().never();
        restaurants.expect_save().never();

        let manager = Manager::new(Arc::new(restaurants), Arc::new(stars));
        let err = manager
            .delete_related(Uuid::new_v4(), Uuid::new_v4())
            .await
            .unwrap_err();

        assert_eq!(
            err,
            AppError::NotFound("The michelin star with the given id was not found".to_string())
        );
    }

    #[tokio::test]
    async fn associate_stops_at_first_missing_item() {
        let present = star();
        let missing = star();
        let trailing = star();
        let present_id = present.id;
        let restaurant = Restaurant::new("Maido", "Lima").with_michelin_stars(vec![]);
        let restaurant_id = restaurant.id;

        let mut stars = MockStarStore::new();
        let mut restaurants = MockRestaurantStore::new();

        restaurants
            .expect_find_by_id()
            .times(1)
            .returning(move |_, _| Ok(Some(restaurant.clone())));
        let found = present.clone();
        stars
            .expect_find_by_id()
            .times(2)
            .returning(move |id, _| Ok((id == present_id).then(|| found.clone())));
        restaurants.expect_save().never();

        let manager = Manager::new(Arc::new(restaurants), Arc::new(stars));
        let err = manager
            .associate_related(restaurant_id, vec![present, missing, trailing])
            .await
            .unwrap_err();

        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn unloaded_collection_is_an_internal_error() {
        let star = star();
        let restaurant = Restaurant::new("Kjolle", "Lima");
        let (star_id, restaurant_id) = (star.id, restaurant.id);

        let mut stars = MockStarStore::new();
        let mut restaurants = MockRestaurantStore::new();
        stars
            .expect_find_by_id()
            .returning(move |_, _| Ok(Some(star.clone())));
        restaurants
            .expect_find_by_id()
            .returning(move |_, _| Ok(Some(restaurant.clone())));

        let manager = Manager::new(Arc::new(restaurants), Arc::new(stars));
        let err = manager
            .find_one_related(restaurant_id, star_id)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::InternalError(_)));
    }

    #[tokio::test]
    async fn store_failures_propagate() {
        let mut stars = MockStarStore::new();
        let restaurants = MockRestaurantStore::new();
        stars
            .expect_find_by_id()
            .returning(|_, _| Err(AppError::DatabaseError("connection refused".to_string())));

        let manager = Manager::new(Arc::new(restaurants), Arc::new(stars));
        let err = manager
            .add_related(Uuid::new_v4(), Uuid::new_v4())
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), 500);
    }
}
