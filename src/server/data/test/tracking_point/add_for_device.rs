use super::*;

/// Tests that ingested points take the asset id and server receive time.
///
/// Expected: Ok with every point stamped with the asset and receive time
#[tokio::test]
async fn assigns_asset_and_receive_time() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (asset, device) = create_linked_device(db).await?;
    let received = at(13, 0);

    let repo = TrackingPointRepository::new(db);
    let saved = repo
        .add_for_device(&device.id, &asset.id, vec![reading(&device.id, at(12, 0))], received)
        .await?;

    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].asset_id, asset.id);
    assert_eq!(saved[0].tracking_device_id, device.id);
    assert_eq!(saved[0].created_at_time_utc, received);
    assert!(saved[0].trip_id.is_none());

    Ok(())
}

/// Tests that a batch is stored in device time order and the newest point becomes
/// the latest position of both the device and the asset.
///
/// Expected: Ok with points sorted and latest positions set to the last one
#[tokio::test]
async fn stores_batch_in_device_time_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (asset, device) = create_linked_device(db).await?;

    let repo = TrackingPointRepository::new(db);
    let saved = repo
        .add_for_device(
            &device.id,
            &asset.id,
            vec![
                reading(&device.id, at(12, 10)),
                reading(&device.id, at(12, 0)),
                reading(&device.id, at(12, 5)),
            ],
            at(13, 0),
        )
        .await?;

    let timestamps: Vec<_> = saved.iter().map(|p| p.device_timestamp_utc).collect();
    assert_eq!(timestamps, vec![at(12, 0), at(12, 5), at(12, 10)]);

    let newest = saved.last().unwrap().id;
    let device = entity::prelude::TrackingDevice::find_by_id(&device.id)
        .one(db)
        .await?
        .unwrap();
    let asset = entity::prelude::Asset::find_by_id(&asset.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(device.latest_position_id, Some(newest));
    assert_eq!(asset.latest_position_id, Some(newest));

    Ok(())
}

/// Tests that a point older than the current latest position is stored but does not
/// move the latest position back in time.
///
/// Expected: Ok with latest positions unchanged
#[tokio::test]
async fn keeps_newer_latest_position() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (asset, device) = create_linked_device(db).await?;

    let repo = TrackingPointRepository::new(db);
    let newer = repo
        .add_for_device(&device.id, &asset.id, vec![reading(&device.id, at(12, 30))], at(13, 0))
        .await?;
    let older = repo
        .add_for_device(&device.id, &asset.id, vec![reading(&device.id, at(12, 0))], at(13, 1))
        .await?;

    assert_ne!(newer[0].id, older[0].id);

    let device = entity::prelude::TrackingDevice::find_by_id(&device.id)
        .one(db)
        .await?
        .unwrap();
    let asset = entity::prelude::Asset::find_by_id(&asset.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(device.latest_position_id, Some(newer[0].id));
    assert_eq!(asset.latest_position_id, Some(newer[0].id));

    Ok(())
}

/// Tests that a point with the same device time as the latest position does not
/// replace it.
///
/// Expected: Ok with the first point still latest
#[tokio::test]
async fn equal_timestamp_does_not_replace_latest() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (asset, device) = create_linked_device(db).await?;

    let repo = TrackingPointRepository::new(db);
    let first = repo
        .add_for_device(&device.id, &asset.id, vec![reading(&device.id, at(12, 0))], at(13, 0))
        .await?;
    repo.add_for_device(&device.id, &asset.id, vec![reading(&device.id, at(12, 0))], at(13, 1))
        .await?;

    let asset = entity::prelude::Asset::find_by_id(&asset.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(asset.latest_position_id, Some(first[0].id));

    Ok(())
}

/// Tests that device and asset latest positions are evaluated independently.
///
/// The asset already has a newer position reported through another device, so only
/// the reporting device's latest position moves.
///
/// Expected: Ok with device latest updated and asset latest unchanged
#[tokio::test]
async fn evaluates_device_and_asset_independently() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (asset, device) = create_linked_device(db).await?;
    let other_device = factory::create_device(db).await?;
    let asset_latest = TrackingPointFactory::new(db, &other_device.id, &asset.id)
        .device_timestamp(at(18, 0))
        .build()
        .await?;
    entity::prelude::Asset::update_many()
        .col_expr(
            entity::asset::Column::LatestPositionId,
            sea_orm::sea_query::Expr::value(asset_latest.id),
        )
        .filter(entity::asset::Column::Id.eq(asset.id.as_str()))
        .exec(db)
        .await?;

    let repo = TrackingPointRepository::new(db);
    let saved = repo
        .add_for_device(&device.id, &asset.id, vec![reading(&device.id, at(12, 0))], at(13, 0))
        .await?;

    let device = entity::prelude::TrackingDevice::find_by_id(&device.id)
        .one(db)
        .await?
        .unwrap();
    let asset = entity::prelude::Asset::find_by_id(&asset.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(device.latest_position_id, Some(saved[0].id));
    assert_eq!(asset.latest_position_id, Some(asset_latest.id));

    Ok(())
}

/// Tests that an empty batch writes nothing.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn empty_batch_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (asset, device) = create_linked_device(db).await?;

    let repo = TrackingPointRepository::new(db);
    let saved = repo
        .add_for_device(&device.id, &asset.id, Vec::new(), at(13, 0))
        .await?;

    assert!(saved.is_empty());
    assert_eq!(repo.count().await?, 0);

    Ok(())
}
