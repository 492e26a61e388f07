use super::*;

/// Tests inserting a reservation.
///
/// Expected: Ok(Reservation) with a new id, unprocessed
#[tokio::test]
async fn creates_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::create_room(db).await?;

    let repo = ReservationRepository::new(db);
    let reservation = repo
        .create(NewReservationParam {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: String::new(),
            start_date: future_date(0),
            end_date: future_date(3),
            room_id: room.id,
        })
        .await?;

    assert!(reservation.id > 0);
    assert!(!reservation.processed);
    assert_eq!(reservation.room_id, room.id);

    let stored = entity::prelude::Reservation::find_by_id(reservation.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.end_date, future_date(3));

    Ok(())
}

/// Tests that a reservation must reference an existing room.
///
/// Expected: Err(DbErr) from the foreign key
#[tokio::test]
async fn fails_for_unknown_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReservationRepository::new(db);
    let result = repo
        .create(NewReservationParam {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: String::new(),
            start_date: future_date(0),
            end_date: future_date(1),
            room_id: 999,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
