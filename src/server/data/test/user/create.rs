use super::*;

/// Tests creating a user from a pre-hashed password.
///
/// Expected: Ok(User) with a new id, and the stored hash returned unchanged
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            first_name: "Admin".to_string(),
            last_name: "User".to_string(),
            email: "admin@example.com".to_string(),
            password_hash: "$2b$04$hash".to_string(),
            access_level: 3,
        })
        .await?;

    assert!(user.id > 0);
    assert_eq!(user.first_name, "Admin");

    let (_, hash) = repo.find_by_email("admin@example.com").await?.unwrap();
    assert_eq!(hash, "$2b$04$hash");

    Ok(())
}

/// Tests that emails are unique.
///
/// Expected: Err(DbErr) on the second insert
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("taken@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParam {
            first_name: "Second".to_string(),
            last_name: "User".to_string(),
            email: "taken@example.com".to_string(),
            password_hash: "hash".to_string(),
            access_level: 1,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
