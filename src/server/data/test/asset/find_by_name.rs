use super::*;

/// Tests substring search ignoring case and soft-deleted rows.
///
/// Expected: Ok with the two live matches ordered by name
#[tokio::test]
async fn matches_fragment_case_insensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::Asset).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    AssetFactory::new(db).name("Red Van").build().await?;
    AssetFactory::new(db).name("blue VAN").build().await?;
    AssetFactory::new(db).name("Green Truck").build().await?;
    AssetFactory::new(db).name("Old Van").deleted(true).build().await?;

    let repo = AssetRepository::new(db);
    let found = repo.find_by_name("van").await?;

    let names: Vec<_> = found.into_iter().map(|a| a.name).collect();
    assert_eq!(names, vec!["Red Van".to_string(), "blue VAN".to_string()]);

    Ok(())
}
