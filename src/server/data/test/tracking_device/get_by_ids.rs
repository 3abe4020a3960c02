use super::*;

/// Tests that unknown and deleted ids are absent from the result.
///
/// Expected: Ok with only the live device
#[tokio::test]
async fn skips_unknown_and_deleted_devices() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let live = factory::create_device(db).await?;
    let deleted = TrackingDeviceFactory::new(db).deleted(true).build().await?;

    let repo = TrackingDeviceRepository::new(db);
    let devices = repo
        .get_by_ids(&[live.id.clone(), deleted.id.clone(), "unknown".to_string()])
        .await?;

    assert_eq!(devices.len(), 1);
    assert!(devices.contains_key(&live.id));

    Ok(())
}

/// Tests that an empty id list needs no query.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn empty_input_returns_empty_map() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TrackingDeviceRepository::new(db);

    assert!(repo.get_by_ids(&[]).await?.is_empty());

    Ok(())
}
