use super::*;

/// Tests that a deleted asset disappears from reads and counts.
///
/// Expected: Ok(true) on first delete, Ok(false) on the second
#[tokio::test]
async fn hides_deleted_asset() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::Asset).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let asset = factory::create_asset(db).await?;
    factory::create_asset(db).await?;

    let repo = AssetRepository::new(db);
    assert_eq!(repo.count().await?, 2);

    assert!(repo.soft_delete(&asset.id).await?);
    assert!(!repo.soft_delete(&asset.id).await?);

    assert!(repo.get_by_id(&asset.id).await?.is_none());
    assert_eq!(repo.count().await?, 1);
    assert_eq!(repo.get_all().await?.len(), 1);

    Ok(())
}
