use super::*;

/// Tests that only points received strictly after the bound are returned.
///
/// Expected: Ok with the later point only
#[tokio::test]
async fn excludes_points_received_at_or_before_bound() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (asset, device) = create_linked_device(db).await?;
    TrackingPointFactory::new(db, &device.id, &asset.id)
        .created_at(at(10, 0))
        .build()
        .await?;
    let later = TrackingPointFactory::new(db, &device.id, &asset.id)
        .created_at(at(11, 0))
        .build()
        .await?;

    let repo = TrackingPointRepository::new(db);
    let points = repo.get_by_asset_id_after(&asset.id, at(10, 0), false).await?;

    assert_eq!(points.len(), 1);
    assert_eq!(points[0].id, later.id);

    Ok(())
}

/// Tests that debug points are filtered unless requested.
///
/// Expected: Ok with the debug point only when `include_debug` is set
#[tokio::test]
async fn filters_debug_points() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (asset, device) = create_linked_device(db).await?;
    TrackingPointFactory::new(db, &device.id, &asset.id)
        .created_at(at(11, 0))
        .build()
        .await?;
    TrackingPointFactory::new(db, &device.id, &asset.id)
        .created_at(at(11, 5))
        .debug(true)
        .build()
        .await?;

    let repo = TrackingPointRepository::new(db);
    let since = at(11, 0) - Duration::hours(1);

    assert_eq!(repo.get_by_asset_id_after(&asset.id, since, false).await?.len(), 1);
    assert_eq!(repo.get_by_asset_id_after(&asset.id, since, true).await?.len(), 2);

    Ok(())
}

/// Tests that points of other assets are not returned.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn ignores_other_assets() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (asset, device) = create_linked_device(db).await?;
    let other = factory::create_asset(db).await?;
    TrackingPointFactory::new(db, &device.id, &asset.id)
        .created_at(at(11, 0))
        .build()
        .await?;

    let repo = TrackingPointRepository::new(db);
    let points = repo.get_by_asset_id_after(&other.id, at(0, 0), true).await?;

    assert!(points.is_empty());

    Ok(())
}
