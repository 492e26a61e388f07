use super::*;

/// Tests that the password hash is returned alongside the user.
///
/// Expected: Ok(Some((User, hash))) where the hash verifies the factory password
#[tokio::test]
async fn returns_user_with_password_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("admin@example.com")
        .password("secret")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let (user, hash) = repo.find_by_email("admin@example.com").await?.unwrap();

    assert_eq!(user.email, "admin@example.com");
    assert!(bcrypt::verify("secret", &hash).unwrap());

    Ok(())
}

/// Tests looking up an unknown email.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);

    assert!(repo.find_by_email("nobody@example.com").await?.is_none());

    Ok(())
}
