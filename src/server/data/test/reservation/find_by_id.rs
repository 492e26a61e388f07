use super::*;

/// Tests that a reservation is loaded with its room.
///
/// Expected: Ok(Some(Reservation)) with the room name filled in
#[tokio::test]
async fn loads_reservation_with_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::create_room_named(db, "General's Quarters").await?;
    let created = factory::reservation::ReservationFactory::new(db, room.id)
        .first_name("Ada")
        .build()
        .await?;

    let repo = ReservationRepository::new(db);
    let reservation = repo.find_by_id(created.id).await?.unwrap();

    assert_eq!(reservation.first_name, "Ada");
    assert_eq!(reservation.room.id, room.id);
    assert_eq!(reservation.room.room_name, "General's Quarters");

    Ok(())
}

/// Tests looking up an unknown reservation.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReservationRepository::new(db);

    assert!(repo.find_by_id(100).await?.is_none());

    Ok(())
}
