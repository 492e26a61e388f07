use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
    Form, Json,
};
use dioxus_logger::tracing;
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::api::AvailabilityResponseDto,
    server::{
        data::room::RoomRepository,
        error::AppError,
        form::Form as PostedForm,
        middleware::session::{FlashSession, ReservationSession},
        model::reservation::Reservation,
        render::{helpers::human_date, render, Page, TemplateData},
        service::availability::AvailabilityService,
        state::AppState,
        util::parse::{parse_date, parse_id},
    },
};

/// Query of the room page's "Book now" link.
#[derive(Deserialize)]
pub struct BookRoomQuery {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub s: String,
    #[serde(default)]
    pub e: String,
}

pub async fn search_availability(session: Session) -> Result<Response, AppError> {
    Ok(render(&session, TemplateData::default(), Page::SearchAvailability)
        .await?
        .into_response())
}

/// Lists rooms free for the posted dates and starts the session reservation.
pub async fn post_search_availability(
    State(state): State<AppState>,
    session: Session,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let form = PostedForm::new(pairs);
    let flash = FlashSession::new(&session);

    let (Some(start), Some(end)) = (parse_date(form.get("start")), parse_date(form.get("end")))
    else {
        flash.set_error("Please enter valid dates").await?;
        return Ok(Redirect::to("/search-availability").into_response());
    };

    if end <= start {
        flash
            .set_error("The departure date must be after the arrival date")
            .await?;
        return Ok(Redirect::to("/search-availability").into_response());
    }

    let rooms = AvailabilityService::new(&state.db)
        .search(start, end)
        .await?;

    if rooms.is_empty() {
        flash.set_error("No availability").await?;
        return Ok(Redirect::to("/search-availability").into_response());
    }

    ReservationSession::new(&session)
        .set(&Reservation::for_dates(start, end))
        .await?;

    Ok(
        render(&session, TemplateData::default(), Page::ChooseRoom { rooms })
            .await?
            .into_response(),
    )
}

/// Checks one room for the room pages' availability widget.
///
/// Always answers 200 with a JSON body; failures are reported through `ok` and
/// `message`.
pub async fn availability_json(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Json<AvailabilityResponseDto> {
    let form = PostedForm::new(pairs);

    let (Some(start), Some(end), Some(room_id)) = (
        parse_date(form.get("start")),
        parse_date(form.get("end")),
        parse_id(form.get("room_id")),
    ) else {
        return Json(AvailabilityResponseDto::error("Invalid request"));
    };

    if end <= start {
        return Json(AvailabilityResponseDto::error("Invalid request"));
    }

    match AvailabilityService::new(&state.db)
        .is_room_available(room_id, start, end)
        .await
    {
        Ok(available) => Json(AvailabilityResponseDto {
            ok: available,
            message: String::new(),
            room_id: room_id.to_string(),
            start_date: human_date(start),
            end_date: human_date(end),
        }),
        Err(e) => {
            tracing::error!("Availability check failed: {}", e);
            Json(AvailabilityResponseDto::error("Error connecting to database"))
        }
    }
}

/// Picks a room for the session reservation.
pub async fn choose_room(session: Session, Path(room_id): Path<i32>) -> Result<Response, AppError> {
    let reservations = ReservationSession::new(&session);

    let Some(mut reservation) = reservations.get().await? else {
        FlashSession::new(&session)
            .set_error("Can't get reservation from session")
            .await?;
        return Ok(Redirect::to("/search-availability").into_response());
    };

    reservation.room_id = room_id;
    reservations.set(&reservation).await?;

    Ok(Redirect::to("/make-reservation").into_response())
}

/// Starts a session reservation from a room page's availability result.
pub async fn book_room(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<BookRoomQuery>,
) -> Result<Response, AppError> {
    let flash = FlashSession::new(&session);

    let (Some(room_id), Some(start), Some(end)) = (
        parse_id(&query.id),
        parse_date(&query.s),
        parse_date(&query.e),
    ) else {
        flash.set_error("Invalid booking link").await?;
        return Ok(Redirect::to("/search-availability").into_response());
    };

    let Some(room) = RoomRepository::new(&state.db).find_by_id(room_id).await? else {
        flash.set_error("Can't find room!").await?;
        return Ok(Redirect::to("/search-availability").into_response());
    };

    let reservation = Reservation {
        room_id,
        room,
        ..Reservation::for_dates(start, end)
    };
    ReservationSession::new(&session).set(&reservation).await?;

    Ok(Redirect::to("/make-reservation").into_response())
}
