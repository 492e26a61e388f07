use super::*;

/// Tests that all reservations are listed by arrival date.
///
/// Expected: Ok(Vec<Reservation>) earliest first, processed ones included
#[tokio::test]
async fn lists_all_by_start_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::create_room(db).await?;
    let later = factory::reservation::ReservationFactory::new(db, room.id)
        .dates(future_date(10), future_date(12))
        .processed(true)
        .build()
        .await?;
    let earlier = factory::reservation::ReservationFactory::new(db, room.id)
        .dates(future_date(1), future_date(2))
        .build()
        .await?;

    let repo = ReservationRepository::new(db);
    let reservations = repo.get_all().await?;

    let ids: Vec<i32> = reservations.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![earlier.id, later.id]);
    assert_eq!(reservations[0].room.room_name, room.room_name);

    Ok(())
}
