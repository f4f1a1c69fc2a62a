use super::*;

/// Tests detecting when an account with a role exists.
///
/// Expected: Ok(true) once an admin account is present
#[tokio::test]
async fn returns_true_when_role_present() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_role(db, Role::Admin).await?;

    let repo = UserRepository::new(db);

    assert!(repo.role_exists(Role::Admin).await?);

    Ok(())
}

/// Tests the empty-database bootstrap scenario.
///
/// Expected: Ok(false) when no account has the role
#[tokio::test]
async fn returns_false_when_role_absent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_role(db, Role::User).await?;

    let repo = UserRepository::new(db);

    assert!(!repo.role_exists(Role::Admin).await?);

    Ok(())
}
