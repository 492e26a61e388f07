use super::*;

/// Tests that booked and blocked rooms are excluded.
///
/// Expected: Ok(Vec<Room>) with only the free room
#[tokio::test]
async fn excludes_restricted_rooms() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (booked, _, _) = factory::helpers::create_reservation_with_dependencies(db).await?;
    let blocked = factory::room::create_room(db).await?;
    factory::room_restriction::create_block(db, blocked.id, future_date(1)).await?;
    let free = factory::room::create_room(db).await?;

    let repo = RoomRestrictionRepository::new(db);
    let rooms = repo.get_available_rooms(future_date(0), future_date(2)).await?;

    let ids: Vec<i32> = rooms.iter().map(|room| room.id).collect();
    assert_eq!(ids, vec![free.id]);
    assert!(!ids.contains(&booked.id));

    Ok(())
}

/// Tests that all rooms are returned when nothing overlaps, ordered by name.
///
/// Expected: Ok(Vec<Room>) with every room
#[tokio::test]
async fn returns_all_rooms_when_free() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::room::create_room_named(db, "Major's Suite").await?;
    factory::room::create_room_named(db, "General's Quarters").await?;

    let repo = RoomRestrictionRepository::new(db);
    let rooms = repo
        .get_available_rooms(future_date(30), future_date(31))
        .await?;

    let names: Vec<&str> = rooms.iter().map(|room| room.room_name.as_str()).collect();
    assert_eq!(names, vec!["General's Quarters", "Major's Suite"]);

    Ok(())
}
