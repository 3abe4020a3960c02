use super::*;

/// Tests that trips starting or ending at a location are counted per asset.
///
/// Expected: Ok with 2 visits for the first asset and 1 for the second
#[tokio::test]
async fn counts_visits_per_asset() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let depot = factory::create_location(db).await?;
    let elsewhere = factory::create_location(db).await?;
    let asset_a = factory::create_asset(db).await?;
    let asset_b = factory::create_asset(db).await?;

    TripFactory::new(db, &asset_a.id)
        .start_location(&depot.id)
        .build()
        .await?;
    TripFactory::new(db, &asset_a.id)
        .end_location(&depot.id)
        .build()
        .await?;
    TripFactory::new(db, &asset_b.id)
        .start_location(&depot.id)
        .end_location(&depot.id)
        .build()
        .await?;
    TripFactory::new(db, &asset_b.id)
        .start_location(&depot.id)
        .deleted(true)
        .build()
        .await?;
    TripFactory::new(db, &asset_b.id)
        .start_location(&elsewhere.id)
        .build()
        .await?;

    let repo = TripRepository::new(db);
    let counts = repo.count_per_asset_for_location(&depot.id).await?;

    assert_eq!(counts.len(), 2);
    assert_eq!(counts.get(&asset_a.id), Some(&2));
    assert_eq!(counts.get(&asset_b.id), Some(&1));

    Ok(())
}

/// Tests a location that no trip visits.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn empty_for_unvisited_location() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let depot = factory::create_location(db).await?;
    let asset = factory::create_asset(db).await?;
    factory::create_trip(db, &asset.id).await?;

    let counts = TripRepository::new(db)
        .count_per_asset_for_location(&depot.id)
        .await?;

    assert!(counts.is_empty());

    Ok(())
}
