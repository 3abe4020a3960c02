use super::*;

/// Tests that only live assets with a latest position appear in the map.
///
/// Expected: Ok with a single entry pointing at the stored point
#[tokio::test]
async fn maps_assets_to_latest_point() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (asset, device) = create_linked_device(db).await?;
    let point = TrackingPointFactory::new(db, &device.id, &asset.id)
        .position(45.5, -122.6)
        .build()
        .await?;
    factory::create_asset(db).await?;
    AssetFactory::new(db)
        .latest_position_id(Some(point.id))
        .deleted(true)
        .build()
        .await?;
    entity::prelude::Asset::update_many()
        .col_expr(
            entity::asset::Column::LatestPositionId,
            sea_orm::sea_query::Expr::value(point.id),
        )
        .filter(entity::asset::Column::Id.eq(asset.id.as_str()))
        .exec(db)
        .await?;

    let repo = AssetRepository::new(db);
    let positions = repo.get_latest_positions().await?;

    assert_eq!(positions.len(), 1);
    let latest = positions.get(&asset.id).unwrap();
    assert_eq!(latest.id, point.id);
    assert_eq!(latest.latitude, 45.5);

    Ok(())
}

/// Tests that no assets with positions yields an empty map.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn empty_without_positions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_asset(db).await?;

    let repo = AssetRepository::new(db);

    assert!(repo.get_latest_positions().await?.is_empty());

    Ok(())
}
