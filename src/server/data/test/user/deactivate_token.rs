use super::*;

/// Tests that deactivated tokens drop out of the active list.
///
/// Expected: Ok(true) once, then Ok(false), and one active token left
#[tokio::test]
async fn removes_token_from_active_list() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = TokenRepository::new(db);
    let revoked = repo
        .create("token-1".to_string(), &user.id, "a".repeat(32))
        .await?;
    repo.create("token-2".to_string(), &user.id, "b".repeat(32))
        .await?;

    assert!(repo.deactivate(&revoked.id).await?);
    assert!(!repo.deactivate(&revoked.id).await?);

    let active = repo.get_active_by_user_id(&user.id).await?;
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, "token-2");

    Ok(())
}
