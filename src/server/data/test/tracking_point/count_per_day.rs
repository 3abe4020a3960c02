use super::*;

/// Tests that points are bucketed by the UTC day they were received.
///
/// Expected: Ok with two points on Jan 1 and one on Jan 2
#[tokio::test]
async fn buckets_by_receive_day() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (asset, device) = create_linked_device(db).await?;
    for received in [at(0, 0), at(23, 59), at(23, 59) + Duration::minutes(2)] {
        TrackingPointFactory::new(db, &device.id, &asset.id)
            .created_at(received)
            .build()
            .await?;
    }

    let repo = TrackingPointRepository::new(db);
    let counts = repo.count_per_day().await?;

    let jan_1 = at(0, 0).date_naive();
    let jan_2 = jan_1.succ_opt().unwrap();
    assert_eq!(counts.len(), 2);
    assert_eq!(counts.get(&jan_1), Some(&2));
    assert_eq!(counts.get(&jan_2), Some(&1));

    Ok(())
}

/// Tests that no points yield no days.
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

    assert!(TrackingPointRepository::new(db).count_per_day().await?.is_empty());

    Ok(())
}
