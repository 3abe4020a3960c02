use super::*;

/// Tests creating a user with a role and finding it by email.
///
/// Expected: Ok with the role name resolved
#[tokio::test]
async fn creates_user_with_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let role = factory::create_role(db, "Viewer").await?;

    let repo = UserRepository::new(db);
    repo.create(
        "user-a".to_string(),
        CreateUserParams {
            email: "dispatch@example.com".to_string(),
            name: Some("Dispatch".to_string()),
            role_id: Some(role.id),
        },
    )
    .await?;

    let user = repo.get_by_email("dispatch@example.com").await?.unwrap();
    assert_eq!(user.id, "user-a");
    assert_eq!(user.role.map(|r| r.name), Some("Viewer".to_string()));

    Ok(())
}

/// Tests that deleted users are hidden but keep their email reserved.
///
/// Expected: Ok with the user missing from reads and the email still taken
#[tokio::test]
async fn deleted_user_keeps_email_reserved() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).email("gone@example.com").build().await?;

    let repo = UserRepository::new(db);

    assert!(repo.soft_delete(&user.id).await?);
    assert!(repo.get_by_email("gone@example.com").await?.is_none());
    assert!(repo.get_all().await?.is_empty());
    assert!(repo.email_taken("gone@example.com").await?);

    Ok(())
}
