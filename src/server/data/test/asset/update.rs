use super::*;

/// Tests that update replaces name, type and truck properties.
///
/// Expected: Ok(Some) with the new values
#[tokio::test]
async fn replaces_editable_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::Asset).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let asset = factory::create_asset(db).await?;

    let repo = AssetRepository::new(db);
    let updated = repo
        .update(UpdateAssetParams {
            id: asset.id.clone(),
            name: "Renamed".to_string(),
            asset_type: AssetType::Truck,
            properties: TruckProperties {
                axles: Some(4),
                ..Default::default()
            },
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.asset_type, AssetType::Truck);
    assert_eq!(updated.properties.axles, Some(4));

    Ok(())
}

/// Tests that updating a missing asset returns none.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_asset() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::Asset).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AssetRepository::new(db);
    let result = repo
        .update(UpdateAssetParams {
            id: "missing".to_string(),
            name: "Nobody".to_string(),
            asset_type: AssetType::Car,
            properties: TruckProperties::default(),
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
