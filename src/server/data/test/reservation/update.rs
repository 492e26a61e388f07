use super::*;

/// Tests updating a guest's contact details.
///
/// Expected: Ok, with names, email and phone changed and dates untouched
#[tokio::test]
async fn updates_contact_details() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::create_room(db).await?;
    let created = factory::reservation::create_reservation(db, room.id).await?;

    let repo = ReservationRepository::new(db);
    repo.update(UpdateReservationParam {
        id: created.id,
        first_name: "Grace".to_string(),
        last_name: "Hopper".to_string(),
        email: "grace@example.com".to_string(),
        phone: "555-0100".to_string(),
    })
    .await?;

    let reservation = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(reservation.first_name, "Grace");
    assert_eq!(reservation.last_name, "Hopper");
    assert_eq!(reservation.email, "grace@example.com");
    assert_eq!(reservation.phone, "555-0100");
    assert_eq!(reservation.start_date, created.start_date);

    Ok(())
}
