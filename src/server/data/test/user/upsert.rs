use super::*;

/// Tests upserting a new email creates the user.
///
/// Expected: Ok(User) with the given role
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .upsert(UpsertUserParam {
            email: "user1@email.cz".to_string(),
            password_hash: "salt$hash".to_string(),
            role: UserRole::Admin,
        })
        .await?;

    assert_eq!(user.email, "user1@email.cz");
    assert_eq!(user.role, UserRole::Admin);

    Ok(())
}

/// Tests upserting an existing email resets hash and role without a new row.
///
/// Expected: Ok(User) with the same id
#[tokio::test]
async fn updates_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::user::UserFactory::new(db)
        .email("user1@email.cz")
        .password_hash("old$hash")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo
        .upsert(UpsertUserParam {
            email: "user1@email.cz".to_string(),
            password_hash: "new$hash".to_string(),
            role: UserRole::Admin,
        })
        .await?;

    assert_eq!(user.id, existing.id);
    assert_eq!(user.role, UserRole::Admin);

    let stored = repo.find_by_email("user1@email.cz").await?.unwrap();
    assert_eq!(stored.password_hash, "new$hash");

    Ok(())
}
