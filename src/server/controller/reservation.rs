use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::server::{
    data::room::RoomRepository,
    error::AppError,
    form::Form as PostedForm,
    middleware::session::{FlashSession, ReservationSession},
    model::reservation::{NewReservationParam, Reservation},
    render::{render, Page, TemplateData},
    service::{
        mail::MailService,
        reservation::{booking_mails, BookingOutcome, ReservationService},
    },
    state::AppState,
    util::parse::{parse_date, parse_id},
};

/// Shows the guest details form for the session reservation.
pub async fn make_reservation(
    State(state): State<AppState>,
    session: Session,
) -> Result<Response, AppError> {
    let reservations = ReservationSession::new(&session);
    let flash = FlashSession::new(&session);

    let Some(mut reservation) = reservations.get().await? else {
        flash.set_error("Can't get reservation from session").await?;
        return Ok(Redirect::to("/").into_response());
    };

    let Some(room) = RoomRepository::new(&state.db)
        .find_by_id(reservation.room_id)
        .await?
    else {
        flash.set_error("Can't find room!").await?;
        return Ok(Redirect::to("/").into_response());
    };

    reservation.room = room;
    reservations.set(&reservation).await?;

    Ok(
        render(&session, TemplateData::default(), Page::MakeReservation { reservation })
            .await?
            .into_response(),
    )
}

/// Validates the guest details and books the room.
///
/// An invalid form is rendered again with 422 and the posted values. A room taken
/// in the meantime sends the guest back to the search.
pub async fn post_make_reservation(
    State(state): State<AppState>,
    session: Session,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let mut form = PostedForm::new(pairs);
    let flash = FlashSession::new(&session);

    let (Some(start_date), Some(end_date), Some(room_id)) = (
        parse_date(form.get("start_date")),
        parse_date(form.get("end_date")),
        parse_id(form.get("room_id")),
    ) else {
        flash.set_error("Can't parse form!").await?;
        return Ok(Redirect::to("/").into_response());
    };

    if end_date <= start_date {
        flash.set_error("Can't parse form!").await?;
        return Ok(Redirect::to("/").into_response());
    }

    let Some(room) = RoomRepository::new(&state.db).find_by_id(room_id).await? else {
        flash.set_error("Can't find room!").await?;
        return Ok(Redirect::to("/").into_response());
    };

    let mut reservation = Reservation {
        first_name: form.get("first_name").to_string(),
        last_name: form.get("last_name").to_string(),
        email: form.get("email").to_string(),
        phone: form.get("phone").to_string(),
        start_date,
        end_date,
        room_id,
        room,
        ..Default::default()
    };

    form.required(&["first_name", "last_name", "email"]);
    form.min_length("first_name", 3);
    form.is_email("email");

    if !form.valid() {
        let html = render(
            &session,
            TemplateData::with_form(form),
            Page::MakeReservation { reservation },
        )
        .await?;

        return Ok((StatusCode::UNPROCESSABLE_ENTITY, html).into_response());
    }

    let param = NewReservationParam {
        first_name: reservation.first_name.clone(),
        last_name: reservation.last_name.clone(),
        email: reservation.email.clone(),
        phone: reservation.phone.clone(),
        start_date,
        end_date,
        room_id,
    };

    match ReservationService::new(&state.db).book(param).await {
        Ok(BookingOutcome::Booked(booked)) => {
            reservation.id = booked.id;
        }
        Ok(BookingOutcome::Unavailable) => {
            flash
                .set_error("Room is no longer available for those dates")
                .await?;
            return Ok(Redirect::to("/search-availability").into_response());
        }
        Err(e) => {
            tracing::error!("Failed to book room {}: {}", room_id, e);
            flash
                .set_error("Can't insert reservation into database!")
                .await?;
            return Ok(Redirect::to("/").into_response());
        }
    }

    let mail = MailService::new(&state.mail);
    for message in booking_mails(&reservation, &state.mail_from, &state.owner_email) {
        if let Err(e) = mail.queue(message) {
            tracing::error!("Failed to queue mail for reservation {}: {}", reservation.id, e);
        }
    }

    ReservationSession::new(&session).set(&reservation).await?;

    Ok(Redirect::to("/reservation-summary").into_response())
}

/// Shows the booked reservation once, then drops it from the session.
pub async fn reservation_summary(session: Session) -> Result<Response, AppError> {
    let Some(reservation) = ReservationSession::new(&session).take().await? else {
        tracing::warn!("Reservation summary requested without a reservation in session");
        FlashSession::new(&session)
            .set_error("Can't get reservation from session")
            .await?;
        return Ok(Redirect::to("/").into_response());
    };

    Ok(
        render(&session, TemplateData::default(), Page::ReservationSummary { reservation })
            .await?
            .into_response(),
    )
}
