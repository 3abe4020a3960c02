use super::*;

/// Tests that deleting a device hides it and releases its asset.
///
/// Expected: Ok(true), then no device for the asset and none by id
#[tokio::test]
async fn releases_asset_link() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (asset, device) = create_linked_device(db).await?;

    let repo = TrackingDeviceRepository::new(db);

    assert!(repo.soft_delete(&device.id).await?);
    assert!(repo.get_by_id(&device.id).await?.is_none());
    assert!(repo.get_by_asset_id(&asset.id).await?.is_none());
    assert_eq!(repo.count().await?, 0);

    Ok(())
}
