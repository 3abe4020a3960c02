use chrono::{Duration, Utc};
use test_utils::factory::{helpers::create_linked_device, location::create_location};

use super::*;
use crate::server::service::{statistics::StatisticsService, tracking_point::TrackingPointService};

/// Tests the active asset threshold against latest positions.
///
/// Expected: Ok with the asset counted only when its latest point is newer than `since`
#[tokio::test]
async fn active_assets_uses_latest_receive_time() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, device) = create_linked_device(db).await?;
    create_linked_device(db).await?;
    TrackingPointService::new(db)
        .add(reading(&device.id, at(12, 0)))
        .await?;

    let service = StatisticsService::new(db);
    let now = Utc::now();

    assert_eq!(service.active_assets(now - Duration::hours(1)).await?, 1);
    assert_eq!(service.active_assets(now + Duration::hours(1)).await?, 0);

    Ok(())
}

/// Tests the overall entity counts.
///
/// Expected: Ok with one count per live entity kind
#[tokio::test]
async fn counts_live_entities() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, device) = create_linked_device(db).await?;
    create_location(db).await?;
    TrackingPointService::new(db)
        .add_many(vec![
            reading(&device.id, at(12, 0)),
            reading(&device.id, at(12, 1)),
        ])
        .await?;

    let counts = StatisticsService::new(db).counts().await?;

    assert_eq!(counts.assets, 1);
    assert_eq!(counts.tracking_devices, 1);
    assert_eq!(counts.locations, 1);
    assert_eq!(counts.tracking_points, 2);

    Ok(())
}

/// Tests per-asset and per-day point counts after ingestion.
///
/// Expected: Ok with all points under the asset and under today's date
#[tokio::test]
async fn points_per_asset_and_day() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (asset, device) = create_linked_device(db).await?;
    let saved = TrackingPointService::new(db)
        .add_many(vec![
            reading(&device.id, at(12, 0)),
            reading(&device.id, at(12, 1)),
            reading(&device.id, at(12, 2)),
        ])
        .await?;

    let service = StatisticsService::new(db);

    let per_asset = service.points_per_asset().await?;
    assert_eq!(per_asset[&asset.id], 3);

    let per_day = service.points_per_day().await?;
    let day = saved[0].created_at_time_utc.date_naive();
    assert_eq!(per_day.get(&day), Some(&3));

    Ok(())
}
