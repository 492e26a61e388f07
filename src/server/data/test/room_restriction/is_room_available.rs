use super::*;

/// Tests a room with no restrictions.
///
/// Expected: Ok(true)
#[tokio::test]
async fn available_without_restrictions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::create_room(db).await?;

    let repo = RoomRestrictionRepository::new(db);

    assert!(
        repo.is_room_available(room.id, future_date(0), future_date(2))
            .await?
    );

    Ok(())
}

/// Tests ranges overlapping a stay of 2050-01-01 to 2050-01-03.
///
/// Expected: Ok(false) for every overlapping range
#[tokio::test]
async fn unavailable_when_ranges_overlap() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (room, _, _) = factory::helpers::create_reservation_with_dependencies(db).await?;

    let repo = RoomRestrictionRepository::new(db);

    for (start, end) in [(0, 2), (-1, 1), (1, 4), (-3, 5), (1, 2)] {
        assert!(
            !repo
                .is_room_available(room.id, future_date(start), future_date(end))
                .await?,
            "range {start}..{end} should overlap"
        );
    }

    Ok(())
}

/// Tests that the checkout day is free for the next arrival and vice versa.
///
/// Expected: Ok(true) for ranges touching the stay at either end
#[tokio::test]
async fn available_for_adjacent_ranges() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (room, _, _) = factory::helpers::create_reservation_with_dependencies(db).await?;

    let repo = RoomRestrictionRepository::new(db);

    assert!(
        repo.is_room_available(room.id, future_date(2), future_date(4))
            .await?
    );
    assert!(
        repo.is_room_available(room.id, future_date(-2), future_date(0))
            .await?
    );

    Ok(())
}

/// Tests that restrictions on other rooms are ignored.
///
/// Expected: Ok(true)
#[tokio::test]
async fn ignores_other_rooms() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_reservation_with_dependencies(db).await?;
    let other = factory::room::create_room(db).await?;

    let repo = RoomRestrictionRepository::new(db);

    assert!(
        repo.is_room_available(other.id, future_date(0), future_date(2))
            .await?
    );

    Ok(())
}
