use super::*;

/// Tests that points are counted per asset.
///
/// Expected: Ok with 2 points for the first asset and 1 for the second
#[tokio::test]
async fn counts_points_per_asset() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (asset_a, device_a) = create_linked_device(db).await?;
    let (asset_b, device_b) = create_linked_device(db).await?;
    factory::create_point(db, &device_a.id, &asset_a.id).await?;
    factory::create_point(db, &device_a.id, &asset_a.id).await?;
    factory::create_point(db, &device_b.id, &asset_b.id).await?;

    let repo = TrackingPointRepository::new(db);
    let counts = repo.count_per_asset().await?;

    assert_eq!(counts.len(), 2);
    assert_eq!(counts.get(&asset_a.id), Some(&2));
    assert_eq!(counts.get(&asset_b.id), Some(&1));

    Ok(())
}

/// Tests that an empty table yields an empty map.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn empty_without_points() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TrackingPointRepository::new(db);

    assert!(repo.count_per_asset().await?.is_empty());

    Ok(())
}
