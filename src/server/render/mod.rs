//! Server-side page rendering.
//!
//! Pages are Dioxus components compiled into the binary and rendered to HTML with
//! `dioxus-ssr`. `Page` is the registry of every page the server can produce; each
//! variant carries the data its page needs. `TemplateData` carries what every page
//! shares: messages, the CSRF token, the posted form and loose string/int values.

pub mod helpers;

use std::collections::BTreeMap;

use axum::response::Html;
use dioxus::prelude::*;
use tower_sessions::Session;

use crate::{
    page::Document,
    server::{
        error::AppError,
        form::Form,
        middleware::session::{AuthSession, CsrfSession, FlashSession},
        model::{
            calendar::CalendarView,
            reservation::{Reservation, ReservationSource},
            room::Room,
        },
    },
};

/// Data shared by every page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateData {
    pub string_map: BTreeMap<String, String>,
    pub int_map: BTreeMap<String, i32>,
    pub float_map: BTreeMap<String, f32>,
    pub flash: String,
    pub warning: String,
    pub error: String,
    pub csrf_token: String,
    pub is_authenticated: bool,
    /// Posted form and its errors, used to refill inputs after a failed submit.
    pub form: Form,
}

impl TemplateData {
    pub fn with_form(form: Form) -> Self {
        Self {
            form,
            ..Default::default()
        }
    }

    pub fn string(&self, key: &str) -> &str {
        self.string_map.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn int(&self, key: &str) -> i32 {
        self.int_map.get(key).copied().unwrap_or(0)
    }
}

/// Every page the server renders.
#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    Home,
    About,
    GeneralsQuarters,
    MajorsSuite,
    Contact,
    SearchAvailability,
    ChooseRoom {
        rooms: Vec<Room>,
    },
    MakeReservation {
        reservation: Reservation,
    },
    ReservationSummary {
        reservation: Reservation,
    },
    Login,
    AdminDashboard,
    AdminNewReservations {
        reservations: Vec<Reservation>,
    },
    AdminAllReservations {
        reservations: Vec<Reservation>,
    },
    AdminShowReservation {
        reservation: Reservation,
        src: ReservationSource,
    },
    AdminCalendar {
        calendar: CalendarView,
    },
}

impl Page {
    /// Registry name of the page.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Home => "home.page",
            Self::About => "about.page",
            Self::GeneralsQuarters => "generals.page",
            Self::MajorsSuite => "majors.page",
            Self::Contact => "contact.page",
            Self::SearchAvailability => "search-availability.page",
            Self::ChooseRoom { .. } => "choose-room.page",
            Self::MakeReservation { .. } => "make-reservation.page",
            Self::ReservationSummary { .. } => "reservation-summary.page",
            Self::Login => "login.page",
            Self::AdminDashboard => "admin-dashboard.page",
            Self::AdminNewReservations { .. } => "admin-new-reservations.page",
            Self::AdminAllReservations { .. } => "admin-all-reservations.page",
            Self::AdminShowReservation { .. } => "admin-reservations-show.page",
            Self::AdminCalendar { .. } => "admin-reservations-calendar.page",
        }
    }

    /// Whether the page uses the admin layout.
    pub fn is_admin(&self) -> bool {
        self.name().starts_with("admin-")
    }

    /// Browser title of the page.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::GeneralsQuarters => "General's Quarters",
            Self::MajorsSuite => "Major's Suite",
            Self::Contact => "Contact",
            Self::SearchAvailability => "Search for Availability",
            Self::ChooseRoom { .. } => "Choose a Room",
            Self::MakeReservation { .. } => "Make Reservation",
            Self::ReservationSummary { .. } => "Reservation Summary",
            Self::Login => "Login",
            Self::AdminDashboard => "Dashboard",
            Self::AdminNewReservations { .. } => "New Reservations",
            Self::AdminAllReservations { .. } => "All Reservations",
            Self::AdminShowReservation { .. } => "Reservation",
            Self::AdminCalendar { .. } => "Reservation Calendar",
        }
    }
}

/// Fills in the data every page shows.
///
/// Takes the flash, warning and error messages out of the session so each is shown
/// once, attaches the session's CSRF token (creating it when absent) and records
/// whether a user is signed in.
pub async fn add_default_data(
    session: &Session,
    mut data: TemplateData,
) -> Result<TemplateData, AppError> {
    let flash = FlashSession::new(session);

    data.flash = flash.take_flash().await?;
    data.warning = flash.take_warning().await?;
    data.error = flash.take_error().await?;
    data.csrf_token = CsrfSession::new(session).token().await?;
    data.is_authenticated = AuthSession::new(session).is_authenticated().await?;

    Ok(data)
}

/// Renders a page with the session's default data.
pub async fn render(
    session: &Session,
    data: TemplateData,
    page: Page,
) -> Result<Html<String>, AppError> {
    let data = add_default_data(session, data).await?;

    Ok(Html(render_document(data, page)))
}

/// Renders a complete HTML document without touching the session.
pub fn render_document(data: TemplateData, page: Page) -> String {
    let body = dioxus_ssr::render_element(rsx! {
        Document { data, page }
    });

    format!("<!DOCTYPE html><html lang=\"en\">{}</html>", body)
}
