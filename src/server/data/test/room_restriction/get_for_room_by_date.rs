use super::*;

/// Tests selecting a room's restrictions within a month.
///
/// Expected: Ok(Vec<RoomRestriction>) including a stay running into the range
/// and excluding ones entirely outside it or on another room
#[tokio::test]
async fn returns_restrictions_touching_range() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::create_room(db).await?;
    let other = factory::room::create_room(db).await?;

    // 2049-12-30 .. 2050-01-02 runs into January
    let spanning = factory::reservation::ReservationFactory::new(db, room.id)
        .dates(future_date(-2), future_date(1))
        .build()
        .await?;
    let spanning =
        factory::room_restriction::create_reservation_restriction(db, &spanning).await?;
    // last day of January
    let block = factory::room_restriction::create_block(db, room.id, future_date(30)).await?;
    // ends on the first of January, so it does not touch the month
    let before = factory::reservation::ReservationFactory::new(db, room.id)
        .dates(future_date(-3), future_date(0))
        .build()
        .await?;
    factory::room_restriction::create_reservation_restriction(db, &before).await?;
    factory::room_restriction::create_block(db, room.id, future_date(31)).await?;
    factory::room_restriction::create_block(db, other.id, future_date(5)).await?;

    let repo = RoomRestrictionRepository::new(db);
    let restrictions = repo
        .get_for_room_by_date(room.id, future_date(0), future_date(30))
        .await?;

    let ids: Vec<i32> = restrictions.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![spanning.id, block.id]);

    Ok(())
}
