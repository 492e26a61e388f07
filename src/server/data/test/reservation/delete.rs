use super::*;

/// Tests that deleting a reservation frees its room.
///
/// Expected: Ok(true), with the reservation and its room restriction gone
#[tokio::test]
async fn deletes_reservation_and_its_restriction() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (room, reservation, _) =
        factory::helpers::create_reservation_with_dependencies(db).await?;
    let block = factory::room_restriction::create_block(db, room.id, future_date(5)).await?;

    let repo = ReservationRepository::new(db);
    let deleted = repo.delete(reservation.id).await?;

    assert!(deleted);
    assert!(repo.find_by_id(reservation.id).await?.is_none());

    let remaining = entity::prelude::RoomRestriction::find().all(db).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, block.id);

    Ok(())
}

/// Tests deleting an unknown reservation.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReservationRepository::new(db);

    assert!(!repo.delete(77).await?);

    Ok(())
}
