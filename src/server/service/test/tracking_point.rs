use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::factory::{
    helpers::{create_linked_device, create_trip_with_dependencies},
    tracking_device::create_device,
    tracking_point::TrackingPointFactory,
    trip::{create_trip, TripFactory},
};

use super::*;
use crate::server::{model::tracking_point::Coordinate, service::tracking_point::TrackingPointService};

/// Tests single-point ingestion through a linked device.
///
/// Expected: Ok with the point stored against the device's asset and the asset's
/// latest position pointing at it
#[tokio::test]
async fn add_stores_point_for_linked_asset() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (asset, device) = create_linked_device(db).await?;

    let saved = TrackingPointService::new(db)
        .add(reading(&device.id, at(12, 0)))
        .await?;

    assert_eq!(saved.asset_id, asset.id);

    let asset = entity::prelude::Asset::find_by_id(&asset.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(asset.latest_position_id, Some(saved.id));

    Ok(())
}

/// Tests that an unknown device is rejected.
///
/// Expected: Err(BadRequest) and no stored points
#[tokio::test]
async fn add_rejects_unknown_device() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = TrackingPointService::new(db)
        .add(reading("missing-device", at(12, 0)))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(entity::prelude::TrackingPoint::find().count(db).await?, 0);

    Ok(())
}

/// Tests that a device without an asset cannot report a single point.
///
/// Expected: Err(InvalidOperation)
#[tokio::test]
async fn add_rejects_unlinked_device() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let device = create_device(db).await?;

    let result = TrackingPointService::new(db)
        .add(reading(&device.id, at(12, 0)))
        .await;

    assert!(matches!(result, Err(AppError::InvalidOperation(_))));

    Ok(())
}

/// Tests that out of range coordinates are rejected before any lookup.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn add_rejects_invalid_latitude() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, device) = create_linked_device(db).await?;
    let mut point = reading(&device.id, at(12, 0));
    point.latitude = 91.0;

    let result = TrackingPointService::new(db).add(point).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests batch ingestion across two devices.
///
/// Expected: Ok with each device's newest point as its asset's latest position
#[tokio::test]
async fn add_many_updates_each_asset() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (first_asset, first_device) = create_linked_device(db).await?;
    let (second_asset, second_device) = create_linked_device(db).await?;

    let saved = TrackingPointService::new(db)
        .add_many(vec![
            reading(&first_device.id, at(12, 5)),
            reading(&second_device.id, at(12, 1)),
            reading(&first_device.id, at(12, 0)),
        ])
        .await?;

    assert_eq!(saved.len(), 3);
    assert_eq!(saved[0].tracking_device_id, first_device.id);
    assert_eq!(saved[1].device_timestamp_utc, at(12, 5));

    let first = entity::prelude::Asset::find_by_id(&first_asset.id)
        .one(db)
        .await?
        .unwrap();
    let second = entity::prelude::Asset::find_by_id(&second_asset.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(first.latest_position_id, Some(saved[1].id));
    assert_eq!(second.latest_position_id, Some(saved[2].id));

    Ok(())
}

/// Tests that one unknown device fails the whole batch.
///
/// Expected: Err(BadRequest) and nothing stored for the valid device either
#[tokio::test]
async fn add_many_with_unknown_device_writes_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, device) = create_linked_device(db).await?;

    let result = TrackingPointService::new(db)
        .add_many(vec![
            reading(&device.id, at(12, 0)),
            reading("missing-device", at(12, 1)),
        ])
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg == "A Device Id does not exist"));
    assert_eq!(entity::prelude::TrackingPoint::find().count(db).await?, 0);

    Ok(())
}

/// Tests that an unlinked device in a batch is a bad request rather than an invalid
/// operation.
///
/// Expected: Err(BadRequest) and nothing stored
#[tokio::test]
async fn add_many_with_unlinked_device_writes_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, linked) = create_linked_device(db).await?;
    let unlinked = create_device(db).await?;

    let result = TrackingPointService::new(db)
        .add_many(vec![
            reading(&linked.id, at(12, 0)),
            reading(&unlinked.id, at(12, 1)),
        ])
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg == "A Device is not linked to an asset"));
    assert_eq!(entity::prelude::TrackingPoint::find().count(db).await?, 0);

    Ok(())
}

/// Tests that an empty batch is accepted.
///
/// Expected: Ok with no points
#[tokio::test]
async fn add_many_accepts_empty_batch() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let saved = TrackingPointService::new(db).add_many(Vec::new()).await?;

    assert!(saved.is_empty());

    Ok(())
}

/// Tests nearest point lookup on a trip.
///
/// Expected: Ok with the two closest points, nearest first
#[tokio::test]
async fn nearest_points_orders_by_distance() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (asset, device, trip) = create_trip_with_dependencies(db).await?;
    let far = TrackingPointFactory::new(db, &device.id, &asset.id)
        .position(45.5, -122.6)
        .trip_id(Some(trip.id))
        .build()
        .await?;
    let near = TrackingPointFactory::new(db, &device.id, &asset.id)
        .position(47.61, -122.31)
        .trip_id(Some(trip.id))
        .build()
        .await?;
    TrackingPointFactory::new(db, &device.id, &asset.id)
        .position(40.0, -120.0)
        .trip_id(Some(trip.id))
        .build()
        .await?;

    let points = TrackingPointService::new(db)
        .get_nearest_points(
            trip.id,
            Coordinate {
                latitude: 47.6,
                longitude: -122.3,
            },
            2,
        )
        .await?;

    assert_eq!(points.len(), 2);
    assert_eq!(points[0].id, near.id);
    assert_eq!(points[1].id, far.id);

    Ok(())
}

/// Tests nearest point lookup on a missing trip.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn nearest_points_requires_trip() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = TrackingPointService::new(db)
        .get_nearest_points(
            42,
            Coordinate {
                latitude: 0.0,
                longitude: 0.0,
            },
            5,
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that points of another asset cannot be assigned to a trip.
///
/// Expected: Err(BadRequest) and the point stays unlabeled
#[tokio::test]
async fn assign_rejects_points_of_other_asset() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, trip) = create_trip_with_dependencies(db).await?;
    let (other_asset, other_device) = create_linked_device(db).await?;
    let point = TrackingPointFactory::new(db, &other_device.id, &other_asset.id)
        .build()
        .await?;

    let result = TrackingPointService::new(db)
        .assign_points_to_trip(trip.id, vec![point.id])
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    let point = entity::prelude::TrackingPoint::find_by_id(point.id)
        .one(db)
        .await?
        .unwrap();
    assert!(point.trip_id.is_none());

    Ok(())
}

/// Tests labeling points of the trip's own asset.
///
/// Expected: Ok with every point carrying the trip id
#[tokio::test]
async fn assign_labels_points() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (asset, device) = create_linked_device(db).await?;
    let trip = create_trip(db, &asset.id).await?;
    let first = TrackingPointFactory::new(db, &device.id, &asset.id)
        .build()
        .await?;
    let second = TrackingPointFactory::new(db, &device.id, &asset.id)
        .build()
        .await?;

    TrackingPointService::new(db)
        .assign_points_to_trip(trip.id, vec![first.id, second.id])
        .await?;

    let labeled = TrackingPointService::new(db).get_by_id(second.id).await?.unwrap();
    assert_eq!(labeled.trip_id, Some(trip.id));

    Ok(())
}

/// Tests assigning a point id that does not exist.
///
/// Expected: Err(BadRequest) and the known point stays unlabeled
#[tokio::test]
async fn assign_rejects_unknown_point() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (asset, device, trip) = create_trip_with_dependencies(db).await?;
    let point = TrackingPointFactory::new(db, &device.id, &asset.id)
        .build()
        .await?;

    let result = TrackingPointService::new(db)
        .assign_points_to_trip(trip.id, vec![point.id, point.id + 1000])
        .await;

    match result {
        Err(AppError::BadRequest(msg)) => assert_eq!(msg, "A Tracking Point Id does not exist"),
        other => panic!("expected BadRequest, got {:?}", other),
    }
    let point = TrackingPointService::new(db).get_by_id(point.id).await?.unwrap();
    assert!(point.trip_id.is_none());

    Ok(())
}

/// Tests assigning points to a soft-deleted trip.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn assign_rejects_deleted_trip() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (asset, device) = create_linked_device(db).await?;
    let trip = TripFactory::new(db, &asset.id).deleted(true).build().await?;
    let point = TrackingPointFactory::new(db, &device.id, &asset.id)
        .build()
        .await?;

    let result = TrackingPointService::new(db)
        .assign_points_to_trip(trip.id, vec![point.id])
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
