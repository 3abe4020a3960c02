use super::*;

/// Tests creating a device linked to an asset.
///
/// Expected: Ok with the link readable through `get_by_asset_id`
#[tokio::test]
async fn creates_linked_device() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let asset = factory::create_asset(db).await?;

    let repo = TrackingDeviceRepository::new(db);
    let device = repo
        .create(
            "phone-1".to_string(),
            CreateTrackingDeviceParams {
                id: None,
                name: "Driver phone".to_string(),
                model: Some("Pixel 9".to_string()),
                phone_number: Some("+1 555 0100".to_string()),
                os_version: None,
                asset_id: Some(asset.id.clone()),
            },
        )
        .await?;

    assert_eq!(device.id, "phone-1");
    assert!(device.latest_position_id.is_none());

    let linked = repo.get_by_asset_id(&asset.id).await?.unwrap();
    assert_eq!(linked.id, "phone-1");
    assert_eq!(linked.model.as_deref(), Some("Pixel 9"));

    Ok(())
}

/// Tests that the schema refuses a second live device on the same asset.
///
/// Expected: Err(UniqueConstraintViolation) and the first link unchanged
#[tokio::test]
async fn rejects_second_device_on_asset() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (asset, device) = create_linked_device(db).await?;

    let repo = TrackingDeviceRepository::new(db);
    let result = repo
        .create(
            "phone-2".to_string(),
            CreateTrackingDeviceParams {
                id: None,
                name: "Spare phone".to_string(),
                model: None,
                phone_number: None,
                os_version: None,
                asset_id: Some(asset.id.clone()),
            },
        )
        .await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));
    assert_eq!(repo.get_by_asset_id(&asset.id).await?.unwrap().id, device.id);
    assert!(repo.get_by_id("phone-2").await?.is_none());

    Ok(())
}

/// Tests that unlinked devices do not conflict with each other.
///
/// Expected: Ok for several devices without an asset
#[tokio::test]
async fn allows_many_unlinked_devices() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    TrackingDeviceFactory::new(db).build().await?;
    TrackingDeviceFactory::new(db).build().await?;

    assert_eq!(TrackingDeviceRepository::new(db).count().await?, 2);

    Ok(())
}
