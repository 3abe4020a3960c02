use super::*;

/// Tests that only live trips of the asset are returned.
///
/// Expected: Ok with one trip
#[tokio::test]
async fn skips_deleted_and_foreign_trips() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let asset = factory::create_asset(db).await?;
    let other = factory::create_asset(db).await?;
    let kept = factory::create_trip(db, &asset.id).await?;
    TripFactory::new(db, &asset.id).deleted(true).build().await?;
    factory::create_trip(db, &other.id).await?;

    let repo = TripRepository::new(db);
    let trips = repo.get_by_asset_id(&asset.id).await?;

    assert_eq!(trips.len(), 1);
    assert_eq!(trips[0].trip.id, kept.id);
    assert!(trips[0].legs.is_empty());

    Ok(())
}

/// Tests that soft-deleting a trip hides it from `get_by_id`.
///
/// Expected: Ok(true) then Ok(None)
#[tokio::test]
async fn deleted_trip_is_hidden() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let asset = factory::create_asset(db).await?;
    let trip = factory::create_trip(db, &asset.id).await?;

    let repo = TripRepository::new(db);

    assert!(repo.soft_delete(trip.id).await?);
    assert!(repo.get_by_id(trip.id).await?.is_none());

    Ok(())
}
