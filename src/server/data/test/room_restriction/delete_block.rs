use super::*;

/// Tests deleting an owner block.
///
/// Expected: Ok(true) and the room is free again
#[tokio::test]
async fn deletes_owner_block() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::create_room(db).await?;
    let block = factory::room_restriction::create_block(db, room.id, future_date(0)).await?;

    let repo = RoomRestrictionRepository::new(db);

    assert!(repo.delete_block(block.id).await?);
    assert!(
        repo.is_room_available(room.id, future_date(0), future_date(1))
            .await?
    );

    Ok(())
}

/// Tests that a reservation's restriction cannot be deleted as a block.
///
/// Expected: Ok(false) and the reservation still occupies the room
#[tokio::test]
async fn never_deletes_reservation_restriction() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (room, _, restriction) =
        factory::helpers::create_reservation_with_dependencies(db).await?;

    let repo = RoomRestrictionRepository::new(db);

    assert!(!repo.delete_block(restriction.id).await?);
    assert!(
        !repo
            .is_room_available(room.id, future_date(0), future_date(2))
            .await?
    );

    Ok(())
}
