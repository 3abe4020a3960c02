use super::*;

/// Tests that clearing `asset_id` unlinks the device.
///
/// Expected: Ok(Some) with no asset and no device found for the asset
#[tokio::test]
async fn clearing_asset_unlinks_device() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (asset, device) = create_linked_device(db).await?;

    let repo = TrackingDeviceRepository::new(db);
    let updated = repo
        .update(UpdateTrackingDeviceParams {
            id: device.id.clone(),
            name: "Spare".to_string(),
            model: None,
            phone_number: None,
            os_version: None,
            asset_id: None,
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "Spare");
    assert!(updated.asset_id.is_none());
    assert!(repo.get_by_asset_id(&asset.id).await?.is_none());

    Ok(())
}
