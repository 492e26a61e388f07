use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

use super::{body_text, form, redirect_target};
use crate::server::{
    controller::admin::{
        delete_reservation, new_reservations, post_reservation, process_reservation,
        show_reservation, MonthQuery,
    },
    error::AppError,
    middleware::session::FlashSession,
    model::reservation::ReservationSource,
    state::AppState,
};

/// Tests the new reservations list leaves out processed ones.
///
/// Expected: 200 listing only the unprocessed guest
#[tokio::test]
async fn new_list_skips_processed() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let room = factory::room::create_room(db).await?;
    factory::reservation::ReservationFactory::new(db, room.id)
        .last_name("Babbage")
        .build()
        .await?;
    factory::reservation::ReservationFactory::new(db, room.id)
        .last_name("Hopper")
        .processed(true)
        .build()
        .await?;
    let (state, _mail) = AppState::for_test(db.clone());

    let response = new_reservations(State(state), session.clone()).await?;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Babbage"));
    assert!(!html.contains("Hopper"));

    Ok(())
}

/// Tests opening a reservation that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn show_unknown_reservation() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let (state, _mail) = AppState::for_test(db.clone());

    let result = show_reservation(
        State(state),
        session.clone(),
        Path((ReservationSource::All, 404)),
        Query(MonthQuery::default()),
    )
    .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests saving the edit form.
///
/// Expected: guest details updated, redirect to the list it was opened from
#[tokio::test]
async fn edit_updates_guest_details() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let (_, reservation, _) = factory::helpers::create_reservation_with_dependencies(db).await?;
    let (state, _mail) = AppState::for_test(db.clone());

    let response = post_reservation(
        State(state),
        session.clone(),
        Path((ReservationSource::New, reservation.id)),
        form(&[
            ("first_name", "Augusta"),
            ("last_name", "King"),
            ("email", "augusta@example.com"),
            ("phone", "555-0199"),
        ]),
    )
    .await?;

    assert_eq!(redirect_target(&response), "/admin/reservations-new");
    assert_eq!(
        FlashSession::new(session).take_flash().await?,
        "Changes saved"
    );

    let stored = entity::prelude::Reservation::find_by_id(reservation.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.first_name, "Augusta");
    assert_eq!(stored.email, "augusta@example.com");
    assert_eq!(stored.start_date, reservation.start_date);

    Ok(())
}

/// Tests saving an edit opened from the calendar.
///
/// Expected: redirect back to the calendar month
#[tokio::test]
async fn edit_from_calendar_returns_to_month() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let (_, reservation, _) = factory::helpers::create_reservation_with_dependencies(db).await?;
    let (state, _mail) = AppState::for_test(db.clone());

    let response = post_reservation(
        State(state),
        session.clone(),
        Path((ReservationSource::Cal, reservation.id)),
        form(&[
            ("first_name", "Ada"),
            ("last_name", "Lovelace"),
            ("email", "ada@example.com"),
            ("year", "2050"),
            ("month", "01"),
        ]),
    )
    .await?;

    assert_eq!(
        redirect_target(&response),
        "/admin/reservations-calendar?y=2050&m=01"
    );

    Ok(())
}

/// Tests marking a reservation as processed.
///
/// Expected: processed flag set, redirect to the all reservations list
#[tokio::test]
async fn process_marks_reservation() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let (_, reservation, _) = factory::helpers::create_reservation_with_dependencies(db).await?;
    let (state, _mail) = AppState::for_test(db.clone());

    let response = process_reservation(
        State(state),
        session.clone(),
        Path((ReservationSource::All, reservation.id)),
        Query(MonthQuery::default()),
    )
    .await?;

    assert_eq!(redirect_target(&response), "/admin/reservations-all");

    let stored = entity::prelude::Reservation::find_by_id(reservation.id)
        .one(db)
        .await?
        .unwrap();
    assert!(stored.processed);

    Ok(())
}

/// Tests deleting a reservation from the calendar.
///
/// Expected: reservation and its restriction gone, redirect back to the month
#[tokio::test]
async fn delete_frees_room() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let (_, reservation, _) = factory::helpers::create_reservation_with_dependencies(db).await?;
    let (state, _mail) = AppState::for_test(db.clone());

    let response = delete_reservation(
        State(state),
        session.clone(),
        Path((ReservationSource::Cal, reservation.id)),
        Query(MonthQuery {
            y: "2050".to_string(),
            m: "01".to_string(),
        }),
    )
    .await?;

    assert_eq!(
        redirect_target(&response),
        "/admin/reservations-calendar?y=2050&m=01"
    );
    assert!(entity::prelude::Reservation::find().all(db).await?.is_empty());
    assert!(entity::prelude::RoomRestriction::find().all(db).await?.is_empty());

    Ok(())
}

/// Tests deleting a reservation that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn delete_unknown_reservation() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let (state, _mail) = AppState::for_test(db.clone());

    let result = delete_reservation(
        State(state),
        session.clone(),
        Path((ReservationSource::New, 404)),
        Query(MonthQuery::default()),
    )
    .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
