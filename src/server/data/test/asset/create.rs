use super::*;

/// Tests creating a truck and reading it back.
///
/// Expected: Ok with all truck properties preserved and no latest position
#[tokio::test]
async fn creates_and_reads_back_truck() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::Asset).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let properties = TruckProperties {
        height: Some(4.1),
        width: Some(2.5),
        length: Some(12.0),
        weight: Some(18_000.0),
        axles: Some(3),
        trailers: Some(0),
        semi: Some(false),
    };

    let repo = AssetRepository::new(db);
    let created = repo
        .create(
            "truck-7".to_string(),
            CreateAssetParams {
                id: None,
                name: "Box Truck".to_string(),
                asset_type: AssetType::Truck,
                properties: properties.clone(),
            },
        )
        .await?;

    let fetched = repo.get_by_id("truck-7").await?.unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.name, "Box Truck");
    assert_eq!(fetched.asset_type, AssetType::Truck);
    assert_eq!(fetched.properties, properties);
    assert!(fetched.latest_position_id.is_none());

    Ok(())
}

/// Tests that ids of soft-deleted assets still count as taken.
///
/// Expected: Ok(true) for the deleted id, Ok(false) for an unused id
#[tokio::test]
async fn deleted_ids_remain_taken() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::Asset).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = AssetFactory::new(db).deleted(true).build().await?;

    let repo = AssetRepository::new(db);
    assert!(repo.id_taken(&deleted.id).await?);
    assert!(!repo.id_taken("never-used").await?);
    assert!(repo.get_by_id(&deleted.id).await?.is_none());

    Ok(())
}
