use super::*;

/// Tests marking a reservation processed and back.
///
/// Expected: Ok, with the flag following each call
#[tokio::test]
async fn toggles_processed_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::create_room(db).await?;
    let created = factory::reservation::create_reservation(db, room.id).await?;

    let repo = ReservationRepository::new(db);

    repo.set_processed(created.id, true).await?;
    assert!(repo.find_by_id(created.id).await?.unwrap().processed);

    repo.set_processed(created.id, false).await?;
    assert!(!repo.find_by_id(created.id).await?.unwrap().processed);

    Ok(())
}
