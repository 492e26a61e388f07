use super::*;

/// Tests inserting a reservation restriction.
///
/// Expected: Ok(RoomRestriction) linked to the reservation with the reservation kind
#[tokio::test]
async fn creates_reservation_restriction() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::create_room(db).await?;
    let reservation = factory::reservation::create_reservation(db, room.id).await?;

    let repo = RoomRestrictionRepository::new(db);
    let restriction = repo
        .create(NewRoomRestrictionParam {
            start_date: reservation.start_date,
            end_date: reservation.end_date,
            room_id: room.id,
            reservation_id: Some(reservation.id),
            kind: RestrictionKind::Reservation,
        })
        .await?;

    assert!(restriction.id > 0);
    assert_eq!(restriction.reservation_id, Some(reservation.id));
    assert_eq!(restriction.restriction_id, RestrictionKind::Reservation.id());
    assert!(!restriction.is_block());

    Ok(())
}
