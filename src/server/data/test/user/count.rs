use super::*;

/// Tests counting users.
///
/// Expected: 0 on an empty table, then the number of inserted users
#[tokio::test]
async fn counts_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    assert_eq!(repo.count().await?, 0);

    factory::user::create_user(db).await?;
    factory::user::create_user(db).await?;

    assert_eq!(repo.count().await?, 2);

    Ok(())
}
