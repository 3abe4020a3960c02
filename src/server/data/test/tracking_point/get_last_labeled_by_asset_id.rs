use super::*;

/// Tests that the newest received point with a trip is returned.
///
/// Expected: Ok(Some) with the later labeled point, ignoring newer unlabeled points
#[tokio::test]
async fn returns_newest_labeled_point() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (asset, device) = create_linked_device(db).await?;
    let trip = factory::create_trip(db, &asset.id).await?;
    TrackingPointFactory::new(db, &device.id, &asset.id)
        .created_at(at(10, 0))
        .trip_id(Some(trip.id))
        .build()
        .await?;
    let newest_labeled = TrackingPointFactory::new(db, &device.id, &asset.id)
        .created_at(at(11, 0))
        .trip_id(Some(trip.id))
        .build()
        .await?;
    TrackingPointFactory::new(db, &device.id, &asset.id)
        .created_at(at(12, 0))
        .build()
        .await?;

    let repo = TrackingPointRepository::new(db);
    let point = repo.get_last_labeled_by_asset_id(&asset.id).await?;

    assert_eq!(point.map(|p| p.id), Some(newest_labeled.id));

    Ok(())
}

/// Tests that an asset without labeled points yields none.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_labeled_points() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (asset, device) = create_linked_device(db).await?;
    factory::create_point(db, &device.id, &asset.id).await?;

    let repo = TrackingPointRepository::new(db);

    assert!(repo.get_last_labeled_by_asset_id(&asset.id).await?.is_none());

    Ok(())
}
