use super::*;

/// Tests that an owner block covers exactly one night.
///
/// Expected: Ok(RoomRestriction) without a reservation, ending the next day
#[tokio::test]
async fn inserts_one_night_block() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::create_room(db).await?;

    let repo = RoomRestrictionRepository::new(db);
    let block = repo.insert_block(room.id, future_date(4)).await?;

    assert!(block.is_block());
    assert_eq!(block.start_date, future_date(4));
    assert_eq!(block.end_date, future_date(5));
    assert_eq!(block.restriction_id, RestrictionKind::OwnerBlock.id());

    assert!(
        !repo
            .is_room_available(room.id, future_date(4), future_date(5))
            .await?
    );
    assert!(
        repo.is_room_available(room.id, future_date(5), future_date(6))
            .await?
    );

    Ok(())
}
