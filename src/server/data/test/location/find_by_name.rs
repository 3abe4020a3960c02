use super::*;

/// Tests substring search over live locations.
///
/// Expected: Ok with the single live match
#[tokio::test]
async fn finds_live_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::Location).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    LocationFactory::new(db).name("North Depot").build().await?;
    LocationFactory::new(db).name("South depot").deleted(true).build().await?;
    LocationFactory::new(db).name("Harbor").build().await?;

    let repo = LocationRepository::new(db);
    let found = repo.find_by_name("DEPOT").await?;

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "North Depot");
    assert_eq!(repo.count().await?, 2);

    Ok(())
}
