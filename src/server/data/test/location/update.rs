use super::*;

/// Tests that update replaces all editable fields.
///
/// Expected: Ok(Some) with new values
#[tokio::test]
async fn replaces_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::Location).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;

    let repo = LocationRepository::new(db);
    let updated = repo.update(&location.id, params("Moved")).await?.unwrap();

    assert_eq!(updated.name, "Moved");
    assert_eq!(updated.latitude, 47.61);

    Ok(())
}

/// Tests that a deleted location cannot be updated.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_deleted_location() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::Location).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let location = LocationFactory::new(db).deleted(true).build().await?;

    let repo = LocationRepository::new(db);

    assert!(repo.update(&location.id, params("Ghost")).await?.is_none());

    Ok(())
}
