use super::*;

/// Tests that rooms are listed alphabetically.
///
/// Expected: Ok(Vec<Room>) ordered by name regardless of insert order
#[tokio::test]
async fn lists_rooms_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::room::create_room_named(db, "Major's Suite").await?;
    factory::room::create_room_named(db, "General's Quarters").await?;

    let repo = RoomRepository::new(db);
    let rooms = repo.get_all().await?;

    let names: Vec<&str> = rooms.iter().map(|room| room.room_name.as_str()).collect();
    assert_eq!(names, vec!["General's Quarters", "Major's Suite"]);

    Ok(())
}

/// Tests listing with no rooms.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_without_rooms() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoomRepository::new(db);

    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
