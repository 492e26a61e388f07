use super::*;

/// Tests finding a room by id.
///
/// Expected: Ok(Some(Room)) with the stored name
#[tokio::test]
async fn finds_existing_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::room::create_room_named(db, "Major's Suite").await?;

    let repo = RoomRepository::new(db);
    let room = repo.find_by_id(created.id).await?.unwrap();

    assert_eq!(room.id, created.id);
    assert_eq!(room.room_name, "Major's Suite");

    Ok(())
}

/// Tests looking up a room that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoomRepository::new(db);

    assert!(repo.find_by_id(3).await?.is_none());

    Ok(())
}
