use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::server::{
    error::AppError,
    form::Form as PostedForm,
    middleware::session::FlashSession,
    model::reservation::{ReservationSource, UpdateReservationParam},
    render::{render, Page, TemplateData},
    service::reservation::ReservationService,
    state::AppState,
};

/// Calendar month a reservation page was opened from.
///
/// Empty unless the page was reached from the calendar.
#[derive(Deserialize, Default)]
pub struct MonthQuery {
    #[serde(default)]
    pub y: String,
    #[serde(default)]
    pub m: String,
}

pub async fn dashboard(session: Session) -> Result<Response, AppError> {
    Ok(render(&session, TemplateData::default(), Page::AdminDashboard)
        .await?
        .into_response())
}

pub async fn new_reservations(
    State(state): State<AppState>,
    session: Session,
) -> Result<Response, AppError> {
    let reservations = ReservationService::new(&state.db).list_new().await?;

    Ok(render(
        &session,
        TemplateData::default(),
        Page::AdminNewReservations { reservations },
    )
    .await?
    .into_response())
}

pub async fn all_reservations(
    State(state): State<AppState>,
    session: Session,
) -> Result<Response, AppError> {
    let reservations = ReservationService::new(&state.db).list_all().await?;

    Ok(render(
        &session,
        TemplateData::default(),
        Page::AdminAllReservations { reservations },
    )
    .await?
    .into_response())
}

pub async fn show_reservation(
    State(state): State<AppState>,
    session: Session,
    Path((src, id)): Path<(ReservationSource, i32)>,
    Query(month): Query<MonthQuery>,
) -> Result<Response, AppError> {
    let Some(reservation) = ReservationService::new(&state.db).find(id).await? else {
        return Err(not_found(id));
    };

    let mut data = TemplateData::default();
    data.string_map.insert("year".to_string(), month.y);
    data.string_map.insert("month".to_string(), month.m);

    Ok(
        render(&session, data, Page::AdminShowReservation { reservation, src })
            .await?
            .into_response(),
    )
}

/// Saves the admin edit form.
pub async fn post_reservation(
    State(state): State<AppState>,
    session: Session,
    Path((src, id)): Path<(ReservationSource, i32)>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let service = ReservationService::new(&state.db);

    let Some(mut reservation) = service.find(id).await? else {
        return Err(not_found(id));
    };

    let mut form = PostedForm::new(pairs);
    form.required(&["first_name", "last_name", "email"]);
    form.is_email("email");

    reservation.first_name = form.get("first_name").to_string();
    reservation.last_name = form.get("last_name").to_string();
    reservation.email = form.get("email").to_string();
    reservation.phone = form.get("phone").to_string();

    if !form.valid() {
        let mut data = TemplateData::with_form(form.clone());
        data.string_map
            .insert("year".to_string(), form.get("year").to_string());
        data.string_map
            .insert("month".to_string(), form.get("month").to_string());

        let html = render(&session, data, Page::AdminShowReservation { reservation, src }).await?;
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, html).into_response());
    }

    service
        .update(UpdateReservationParam {
            id,
            first_name: reservation.first_name,
            last_name: reservation.last_name,
            email: reservation.email,
            phone: reservation.phone,
        })
        .await?;

    FlashSession::new(&session).set_flash("Changes saved").await?;

    Ok(back_to(src, form.get("year"), form.get("month")).into_response())
}

pub async fn process_reservation(
    State(state): State<AppState>,
    session: Session,
    Path((src, id)): Path<(ReservationSource, i32)>,
    Query(month): Query<MonthQuery>,
) -> Result<Response, AppError> {
    let service = ReservationService::new(&state.db);

    if service.find(id).await?.is_none() {
        return Err(not_found(id));
    }

    service.mark_processed(id).await?;
    FlashSession::new(&session)
        .set_flash("Reservation marked as processed")
        .await?;

    Ok(back_to(src, &month.y, &month.m).into_response())
}

pub async fn delete_reservation(
    State(state): State<AppState>,
    session: Session,
    Path((src, id)): Path<(ReservationSource, i32)>,
    Query(month): Query<MonthQuery>,
) -> Result<Response, AppError> {
    if !ReservationService::new(&state.db).delete(id).await? {
        return Err(not_found(id));
    }

    FlashSession::new(&session)
        .set_flash("Reservation deleted")
        .await?;

    Ok(back_to(src, &month.y, &month.m).into_response())
}

/// Where to go after acting on a reservation.
///
/// Back to the calendar month when one was given, otherwise to the list the
/// reservation was opened from.
fn back_to(src: ReservationSource, year: &str, month: &str) -> Redirect {
    if !year.is_empty() {
        return Redirect::to(&format!(
            "/admin/reservations-calendar?y={}&m={}",
            year, month
        ));
    }

    match src {
        ReservationSource::New => Redirect::to("/admin/reservations-new"),
        ReservationSource::All => Redirect::to("/admin/reservations-all"),
        ReservationSource::Cal => Redirect::to("/admin/reservations-calendar"),
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Reservation {} not found", id))
}
