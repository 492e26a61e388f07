use super::*;

/// Tests that only unprocessed reservations are listed.
///
/// Expected: Ok(Vec<Reservation>) without processed reservations
#[tokio::test]
async fn lists_only_unprocessed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::create_room(db).await?;
    factory::reservation::ReservationFactory::new(db, room.id)
        .processed(true)
        .build()
        .await?;
    let pending = factory::reservation::create_reservation(db, room.id).await?;

    let repo = ReservationRepository::new(db);
    let reservations = repo.get_all_new().await?;

    assert_eq!(reservations.len(), 1);
    assert_eq!(reservations[0].id, pending.id);
    assert!(!reservations[0].processed);

    Ok(())
}
