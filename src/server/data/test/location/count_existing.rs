use super::*;

/// Tests that only live, known ids are counted.
///
/// Expected: Ok(1)
#[tokio::test]
async fn counts_live_ids_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::Location).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let live = factory::create_location(db).await?;
    let deleted = LocationFactory::new(db).deleted(true).build().await?;

    let repo = LocationRepository::new(db);
    let count = repo
        .count_existing(&[live.id, deleted.id, "nowhere".to_string()])
        .await?;

    assert_eq!(count, 1);

    Ok(())
}
