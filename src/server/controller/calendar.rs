use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
    Form,
};
use chrono::Utc;
use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::server::{
    controller::admin::MonthQuery,
    error::AppError,
    form::Form as PostedForm,
    middleware::session::{CalendarSession, FlashSession},
    model::calendar::{BlockChanges, CalendarMonth},
    render::{render, Page, TemplateData},
    service::calendar::CalendarService,
    state::AppState,
};

/// Shows the month given by `y` and `m`, or the current month.
///
/// Each room's block map is stored in the session as the baseline the next save
/// is compared against.
pub async fn calendar(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<MonthQuery>,
) -> Result<Response, AppError> {
    let month = CalendarMonth::from_query(
        query.y.parse().ok(),
        query.m.parse().ok(),
        Utc::now().date_naive(),
    );

    let calendar = CalendarService::new(&state.db).build(month).await?;

    let calendar_session = CalendarSession::new(&session);
    for room in &calendar.rooms {
        calendar_session
            .set_block_map(room.room.id, &room.blocks)
            .await?;
    }

    let next = month.next();
    let last = month.previous();

    let mut data = TemplateData::default();
    for (key, value) in [
        ("this_month", month.padded_month()),
        ("this_month_year", month.year().to_string()),
        ("next_month", next.padded_month()),
        ("next_month_year", next.year().to_string()),
        ("last_month", last.padded_month()),
        ("last_month_year", last.year().to_string()),
    ] {
        data.string_map.insert(key.to_string(), value);
    }
    data.int_map
        .insert("days_in_month".to_string(), month.days_in_month() as i32);

    Ok(render(&session, data, Page::AdminCalendar { calendar })
        .await?
        .into_response())
}

/// Saves owner blocks from the calendar checkboxes.
pub async fn post_calendar(
    State(state): State<AppState>,
    session: Session,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let form = PostedForm::new(pairs);
    let service = CalendarService::new(&state.db);
    let calendar_session = CalendarSession::new(&session);

    let mut baselines = Vec::new();
    for room in service.rooms().await? {
        baselines.push((room.id, calendar_session.get_block_map(room.id).await?));
    }

    let month = match (form.get("y").parse(), form.get("m").parse()) {
        (Ok(year), Ok(month)) => CalendarMonth::new(year, month),
        _ => None,
    };
    let changes = BlockChanges::reconcile(&baselines, &form, month.as_ref());
    let report = service.apply(&changes).await;

    tracing::info!(
        "Calendar saved: {} blocks removed, {} added, {} failed",
        report.removed,
        report.added,
        report.failed
    );

    FlashSession::new(&session).set_flash("Changes saved").await?;

    Ok(Redirect::to(&format!(
        "/admin/reservations-calendar?y={}&m={}",
        form.get("y"),
        form.get("m")
    ))
    .into_response())
}
