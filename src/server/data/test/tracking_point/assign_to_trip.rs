use super::*;

/// Tests that only the listed points receive the trip id.
///
/// Expected: Ok(2) and the third point still unlabeled
#[tokio::test]
async fn labels_listed_points() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (asset, device) = create_linked_device(db).await?;
    let trip = factory::create_trip(db, &asset.id).await?;
    let first = factory::create_point(db, &device.id, &asset.id).await?;
    let second = factory::create_point(db, &device.id, &asset.id).await?;
    let untouched = factory::create_point(db, &device.id, &asset.id).await?;

    let repo = TrackingPointRepository::new(db);
    let updated = repo.assign_to_trip(trip.id, &[first.id, second.id]).await?;

    assert_eq!(updated, 2);
    let labeled = repo.get_by_trip_id(trip.id).await?;
    assert_eq!(labeled.len(), 2);
    assert!(repo.get_by_id(untouched.id).await?.unwrap().trip_id.is_none());

    Ok(())
}

/// Tests that an empty id list is a no-op.
///
/// Expected: Ok(0)
#[tokio::test]
async fn empty_list_updates_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (asset, _device) = create_linked_device(db).await?;
    let trip = factory::create_trip(db, &asset.id).await?;

    let repo = TrackingPointRepository::new(db);

    assert_eq!(repo.assign_to_trip(trip.id, &[]).await?, 0);

    Ok(())
}
