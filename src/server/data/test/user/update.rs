use super::*;

/// Tests updating a user's profile fields.
///
/// Expected: Ok, with the new values visible on the next read
#[tokio::test]
async fn updates_profile_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    repo.update(UpdateUserParam {
        id: created.id,
        first_name: "Grace".to_string(),
        last_name: "Hopper".to_string(),
        email: "grace@example.com".to_string(),
        access_level: 1,
    })
    .await?;

    let user = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(user.first_name, "Grace");
    assert_eq!(user.last_name, "Hopper");
    assert_eq!(user.email, "grace@example.com");
    assert!(!user.is_staff());
    assert!(user.updated_at >= created.updated_at);

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok (no-op)
#[tokio::test]
async fn succeeds_for_nonexistent_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .update(UpdateUserParam {
            id: 42,
            first_name: "No".to_string(),
            last_name: "One".to_string(),
            email: "none@example.com".to_string(),
            access_level: 1,
        })
        .await;

    assert!(result.is_ok());

    Ok(())
}
