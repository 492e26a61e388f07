use dioxus::prelude::*;

use crate::{
    page::layout::{CsrfField, TextField},
    server::{
        model::reservation::{Reservation, ReservationSource},
        render::{helpers::human_date, TemplateData},
    },
};

#[derive(Clone, PartialEq)]
struct Row {
    id: i32,
    last_name: String,
    room_name: String,
    start: String,
    end: String,
}

/// Table of reservations linking to their detail page.
#[component]
pub fn ReservationList(reservations: Vec<Reservation>, src: &'static str) -> Element {
    let rows: Vec<Row> = reservations
        .into_iter()
        .map(|reservation| Row {
            id: reservation.id,
            start: human_date(reservation.start_date),
            end: human_date(reservation.end_date),
            last_name: reservation.last_name,
            room_name: reservation.room.room_name,
        })
        .collect();

    rsx!(table {
        class: "table",
        thead {
            tr {
                th { "ID" }
                th { "Last Name" }
                th { "Room" }
                th { "Arrival" }
                th { "Departure" }
            }
        }
        tbody {
            for row in rows {
                tr {
                    key: "{row.id}",
                    td { "{row.id}" }
                    td {
                        a { href: "/admin/reservations/{src}/{row.id}/show", "{row.last_name}" }
                    }
                    td { "{row.room_name}" }
                    td { "{row.start}" }
                    td { "{row.end}" }
                }
            }
        }
    })
}

/// Reservation details with the edit form and processing actions.
///
/// Opened from the calendar, the month (`year`/`month` string values) is carried
/// through every action so the admin lands back on it.
#[component]
pub fn ShowReservation(
    data: TemplateData,
    reservation: Reservation,
    src: ReservationSource,
) -> Element {
    let token = data.csrf_token.clone();
    let errors = &data.form.errors;
    let first_name_error = errors.get("first_name").map(str::to_string);
    let last_name_error = errors.get("last_name").map(str::to_string);
    let email_error = errors.get("email").map(str::to_string);
    let phone_error = errors.get("phone").map(str::to_string);

    let src = src.as_str();
    let id = reservation.id;
    let year = data.string("year").to_string();
    let month = data.string("month").to_string();
    let from_calendar = !year.is_empty();
    let month_query = if from_calendar {
        format!("?y={}&m={}", year, month)
    } else {
        String::new()
    };
    let back = if from_calendar {
        format!("/admin/reservations-calendar{}", month_query)
    } else {
        format!("/admin/reservations-{}", src)
    };

    let start = human_date(reservation.start_date);
    let end = human_date(reservation.end_date);
    let processed = reservation.processed;

    rsx!(div {
        p {
            strong { "Arrival:" }
            " {start}"
            br {}
            strong { "Departure:" }
            " {end}"
            br {}
            strong { "Room:" }
            " {reservation.room.room_name}"
        }
        form {
            action: "/admin/reservations/{src}/{id}/show",
            method: "post",
            CsrfField { token }
            if from_calendar {
                input { r#type: "hidden", name: "year", value: "{year}" }
                input { r#type: "hidden", name: "month", value: "{month}" }
            }
            TextField {
                label: "First Name",
                name: "first_name",
                value: reservation.first_name.clone(),
                error: first_name_error,
            }
            TextField {
                label: "Last Name",
                name: "last_name",
                value: reservation.last_name.clone(),
                error: last_name_error,
            }
            TextField {
                label: "Email",
                name: "email",
                value: reservation.email.clone(),
                error: email_error,
                input_type: "email",
            }
            TextField {
                label: "Phone Number",
                name: "phone",
                value: reservation.phone.clone(),
                error: phone_error,
            }
            div {
                class: "actions",
                button { r#type: "submit", class: "btn btn-primary", "Save" }
                a { class: "btn btn-secondary", href: "{back}", "Cancel" }
                if !processed {
                    a {
                        class: "btn btn-info",
                        href: "/admin/process-reservation/{src}/{id}/do{month_query}",
                        "Mark as Processed"
                    }
                }
                a {
                    class: "btn btn-danger",
                    href: "/admin/delete-reservation/{src}/{id}/do{month_query}",
                    "Delete"
                }
            }
        }
    })
}
