//! Country <-> gastronomic culture association, country side

mod utils;

use gastro_lib::modules::catalog::{Country, CountryRelation, RecordStore};
use gastro_lib::shared::AppError;
use utils::factories::GastronomicCultureFactory;
use utils::helpers::{ids, in_memory_catalog, seed_countries, seed_cultures};
use uuid::Uuid;

#[tokio::test]
async fn add_then_find_one_returns_the_culture() -> anyhow::Result<()> {
    let test = in_memory_catalog();
    let service = &test.catalog.country_gastronomic_cultures;
    let country = seed_countries(&test.catalog, 1).await?.remove(0);
    let culture = seed_cultures(&test.catalog, 1).await?.remove(0);

    let updated = service
        .add_gastronomic_culture_country(country.id, culture.id)
        .await?;
    assert_eq!(updated.gastronomic_cultures.as_ref().map(Vec::len), Some(1));

    let found = service
        .find_gastronomic_culture_by_country_id_gastronomic_culture_id(country.id, culture.id)
        .await?;
    assert_eq!(found.id, culture.id);
    assert_eq!(found.name, culture.name);
    assert_eq!(found.description, culture.description);
    Ok(())
}

#[tokio::test]
async fn add_with_invalid_culture_fails_even_when_country_is_invalid() -> anyhow::Result<()> {
    let test = in_memory_catalog();
    let service = &test.catalog.country_gastronomic_cultures;

    let err = service
        .add_gastronomic_culture_country(Uuid::new_v4(), Uuid::new_v4())
        .await
        .unwrap_err();

    assert_eq!(
        err,
        AppError::NotFound("The gastronomic culture with the given id was not found".to_string())
    );
    Ok(())
}

#[tokio::test]
async fn add_with_invalid_country_fails() -> anyhow::Result<()> {
    let test = in_memory_catalog();
    let service = &test.catalog.country_gastronomic_cultures;
    let culture = seed_cultures(&test.catalog, 1).await?.remove(0);

    let err = service
        .add_gastronomic_culture_country(Uuid::new_v4(), culture.id)
        .await
        .unwrap_err();

    assert_eq!(err.message(), "The country with the given id was not found");
    Ok(())
}

#[tokio::test]
async fn adding_twice_keeps_both_entries() -> anyhow::Result<()> {
    let test = in_memory_catalog();
    let service = &test.catalog.country_gastronomic_cultures;
    let country = seed_countries(&test.catalog, 1).await?.remove(0);
    let culture = seed_cultures(&test.catalog, 1).await?.remove(0);

    service
        .add_gastronomic_culture_country(country.id, culture.id)
        .await?;
    service
        .add_gastronomic_culture_country(country.id, culture.id)
        .await?;

    let all = service
        .find_gastronomic_cultures_by_country_id(country.id)
        .await?;
    assert_eq!(ids(&all), vec![culture.id, culture.id]);
    Ok(())
}

#[tokio::test]
async fn find_one_not_associated_is_a_precondition_failure() -> anyhow::Result<()> {
    let test = in_memory_catalog();
    let service = &test.catalog.country_gastronomic_cultures;
    let country = seed_countries(&test.catalog, 1).await?.remove(0);
    let culture = seed_cultures(&test.catalog, 1).await?.remove(0);

    let err = service
        .find_gastronomic_culture_by_country_id_gastronomic_culture_id(country.id, culture.id)
        .await
        .unwrap_err();

    assert!(err.is_precondition_failed());
    assert_eq!(
        err.message(),
        "The gastronomic culture with the given id is not associated to the country"
    );
    assert_eq!(err.status_code(), 412);
    Ok(())
}

#[tokio::test]
async fn find_all_with_invalid_country_fails() -> anyhow::Result<()> {
    let test = in_memory_catalog();

    let err = test
        .catalog
        .country_gastronomic_cultures
        .find_gastronomic_cultures_by_country_id(Uuid::new_v4())
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    Ok(())
}

#[tokio::test]
async fn associate_replaces_the_collection() -> anyhow::Result<()> {
    let test = in_memory_catalog();
    let service = &test.catalog.country_gastronomic_cultures;
    let country = seed_countries(&test.catalog, 1).await?.remove(0);
    let cultures = seed_cultures(&test.catalog, 5).await?;

    service
        .add_gastronomic_culture_country(country.id, cultures[0].id)
        .await?;
    let updated = service
        .associate_gastronomic_cultures_country(country.id, cultures[1..].to_vec())
        .await?;
    assert_eq!(updated.gastronomic_cultures.map(|c| c.len()), Some(4));

    let all = service
        .find_gastronomic_cultures_by_country_id(country.id)
        .await?;
    assert_eq!(ids(&all), ids(&cultures[1..]));
    Ok(())
}

#[tokio::test]
async fn associate_with_empty_list_clears_the_collection() -> anyhow::Result<()> {
    let test = in_memory_catalog();
    let service = &test.catalog.country_gastronomic_cultures;
    let country = seed_countries(&test.catalog, 1).await?.remove(0);
    let cultures = seed_cultures(&test.catalog, 3).await?;

    service
        .associate_gastronomic_cultures_country(country.id, cultures)
        .await?;
    service
        .associate_gastronomic_cultures_country(country.id, vec![])
        .await?;

    let all = service
        .find_gastronomic_cultures_by_country_id(country.id)
        .await?;
    assert!(all.is_empty());
    Ok(())
}

#[tokio::test]
async fn associate_with_tampered_id_leaves_collection_unchanged() -> anyhow::Result<()> {
    let test = in_memory_catalog();
    let service = &test.catalog.country_gastronomic_cultures;
    let country = seed_countries(&test.catalog, 1).await?.remove(0);
    let cultures = seed_cultures(&test.catalog, 2).await?;
    service
        .associate_gastronomic_cultures_country(country.id, cultures.clone())
        .await?;

    // Same fields as a stored culture, but an id the store never issued
    let mut tampered = cultures[0].clone();
    tampered.id = Uuid::new_v4();

    let err = service
        .associate_gastronomic_cultures_country(country.id, vec![tampered])
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    let all = service
        .find_gastronomic_cultures_by_country_id(country.id)
        .await?;
    assert_eq!(ids(&all), ids(&cultures));
    Ok(())
}

#[tokio::test]
async fn associate_with_invalid_country_fails() -> anyhow::Result<()> {
    let test = in_memory_catalog();
    let cultures = seed_cultures(&test.catalog, 1).await?;

    let err = test
        .catalog
        .country_gastronomic_cultures
        .associate_gastronomic_cultures_country(Uuid::new_v4(), cultures)
        .await
        .unwrap_err();

    assert_eq!(err.message(), "The country with the given id was not found");
    Ok(())
}

#[tokio::test]
async fn delete_removes_the_culture() -> anyhow::Result<()> {
    let test = in_memory_catalog();
    let service = &test.catalog.country_gastronomic_cultures;
    let country = seed_countries(&test.catalog, 1).await?.remove(0);
    let cultures = seed_cultures(&test.catalog, 3).await?;
    service
        .associate_gastronomic_cultures_country(country.id, cultures.clone())
        .await?;

    service
        .delete_gastronomic_culture_country(country.id, cultures[1].id)
        .await?;

    let all = service
        .find_gastronomic_cultures_by_country_id(country.id)
        .await?;
    assert_eq!(ids(&all), vec![cultures[0].id, cultures[2].id]);

    // The culture record itself survives
    let culture = test.catalog.gastronomic_cultures.find_one(cultures[1].id).await?;
    assert_eq!(culture.countries.map(|c| c.len()), Some(0));
    Ok(())
}

#[tokio::test]
async fn delete_not_associated_leaves_collection_unchanged() -> anyhow::Result<()> {
    let test = in_memory_catalog();
    let service = &test.catalog.country_gastronomic_cultures;
    let country = seed_countries(&test.catalog, 1).await?.remove(0);
    let associated = seed_cultures(&test.catalog, 1).await?;
    service
        .associate_gastronomic_cultures_country(country.id, associated.clone())
        .await?;
    let stranger = test
        .catalog
        .gastronomic_cultures
        .create(GastronomicCultureFactory::new().name("Nordic").build())
        .await?;

    let err = service
        .delete_gastronomic_culture_country(country.id, stranger.id)
        .await
        .unwrap_err();
    assert!(err.is_precondition_failed());

    let all = service
        .find_gastronomic_cultures_by_country_id(country.id)
        .await?;
    assert_eq!(ids(&all), ids(&associated));
    Ok(())
}

#[tokio::test]
async fn store_loads_cultures_only_when_asked() -> anyhow::Result<()> {
    let test = in_memory_catalog();
    let country = seed_countries(&test.catalog, 1).await?.remove(0);
    let cultures = seed_cultures(&test.catalog, 2).await?;
    test.catalog
        .country_gastronomic_cultures
        .associate_gastronomic_cultures_country(country.id, cultures.clone())
        .await?;

    let bare = RecordStore::<Country>::find_by_id(test.store.as_ref(), country.id, &[])
        .await?
        .expect("country was seeded");
    assert!(bare.gastronomic_cultures.is_none());

    let loaded = RecordStore::<Country>::find_by_id(
        test.store.as_ref(),
        country.id,
        &[CountryRelation::GastronomicCultures],
    )
    .await?
    .expect("country was seeded");
    assert_eq!(ids(&loaded.gastronomic_cultures.unwrap_or_default()), ids(&cultures));
    Ok(())
}
