use super::*;

/// Tests creating a location and reading it back.
///
/// Expected: Ok with equal fields
#[tokio::test]
async fn creates_and_reads_back() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::Location).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LocationRepository::new(db);
    let created = repo.create("warehouse".to_string(), params("Warehouse")).await?;
    let fetched = repo.get_by_id("warehouse").await?.unwrap();

    assert_eq!(fetched, created);
    assert_eq!(fetched.interest_level, InterestLevel::High);
    assert_eq!(fetched.radius, 250.0);

    Ok(())
}
