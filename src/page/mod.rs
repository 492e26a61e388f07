//! Server-rendered pages.
//!
//! `Document` is the root component rendered by `server::render`. It renders the
//! `head` and `body` of the page, picking the layout for the page and rendering
//! the page component inside it. The `<html>` element is written by
//! `render_document`.

mod admin;
mod booking;
mod layout;
mod login;
mod public;

use dioxus::prelude::*;

use crate::server::render::{Page, TemplateData};

use admin::{AdminCalendar, AdminDashboard, ReservationList, ShowReservation};
use booking::{ChooseRoom, MakeReservation, ReservationSummary, SearchAvailability};
use layout::{AdminLayout, BaseLayout};
use login::Login;
use public::{About, Contact, GeneralsQuarters, Home, MajorsSuite};

pub const SITE_NAME: &str = "Fort Smythe Bed and Breakfast";

#[component]
pub fn Document(data: TemplateData, page: Page) -> Element {
    let page_title = page.title();
    let is_admin = page.is_admin();
    let csrf_token = data.csrf_token.clone();

    rsx! {
        head {
            meta { charset: "utf-8" }
            meta {
                name: "viewport",
                content: "width=device-width, initial-scale=1",
            }
            meta {
                name: "csrf-token",
                content: "{csrf_token}",
            }
            title { "{page_title} | {SITE_NAME}" }
            link {
                rel: "stylesheet",
                href: "/static/css/styles.css",
            }
        }
        body {
            if is_admin {
                AdminLayout {
                    data: data.clone(),
                    title: page_title,
                    PageBody { data: data.clone(), page: page.clone() }
                }
            } else {
                BaseLayout {
                    data: data.clone(),
                    PageBody { data: data.clone(), page: page.clone() }
                }
            }
            script { src: "/static/js/app.js" }
        }
    }
}

#[component]
fn PageBody(data: TemplateData, page: Page) -> Element {
    match page {
        Page::Home => rsx!(Home {}),
        Page::About => rsx!(About {}),
        Page::GeneralsQuarters => rsx!(GeneralsQuarters { data }),
        Page::MajorsSuite => rsx!(MajorsSuite { data }),
        Page::Contact => rsx!(Contact {}),
        Page::SearchAvailability => rsx!(SearchAvailability { data }),
        Page::ChooseRoom { rooms } => rsx!(ChooseRoom { rooms }),
        Page::MakeReservation { reservation } => rsx!(MakeReservation { data, reservation }),
        Page::ReservationSummary { reservation } => rsx!(ReservationSummary { reservation }),
        Page::Login => rsx!(Login { data }),
        Page::AdminDashboard => rsx!(AdminDashboard {}),
        Page::AdminNewReservations { reservations } => rsx!(ReservationList {
            reservations,
            src: "new",
        }),
        Page::AdminAllReservations { reservations } => rsx!(ReservationList {
            reservations,
            src: "all",
        }),
        Page::AdminShowReservation { reservation, src } => rsx!(ShowReservation {
            data,
            reservation,
            src,
        }),
        Page::AdminCalendar { calendar } => rsx!(AdminCalendar { data, calendar }),
    }
}
