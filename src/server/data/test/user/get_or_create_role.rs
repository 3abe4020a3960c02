use super::*;

/// Tests that creating a role twice returns the existing row.
///
/// Expected: Ok((role, true)) then Ok((same role, false))
#[tokio::test]
async fn is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoleRepository::new(db);
    let (first, created) = repo.get_or_create("Owner").await?;
    let (second, created_again) = repo.get_or_create("Owner").await?;

    assert!(created);
    assert!(!created_again);
    assert_eq!(first, second);
    assert_eq!(repo.get_all().await?.len(), 1);

    Ok(())
}
