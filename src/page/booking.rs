use dioxus::prelude::*;

use crate::server::{
    model::{reservation::Reservation, room::Room},
    render::{helpers::human_date, TemplateData},
};

use super::layout::{CsrfField, TextField};

#[component]
pub fn SearchAvailability(data: TemplateData) -> Element {
    let token = data.csrf_token;

    rsx!(div {
        class: "narrow",
        h1 { "Search for Availability" }
        form {
            action: "/search-availability",
            method: "post",
            CsrfField { token }
            div {
                class: "field",
                label { r#for: "start", "Starting Date" }
                input { r#type: "date", id: "start", name: "start", class: "form-control", required: true }
            }
            div {
                class: "field",
                label { r#for: "end", "Ending Date" }
                input { r#type: "date", id: "end", name: "end", class: "form-control", required: true }
            }
            button { r#type: "submit", class: "btn btn-primary", "Search Availability" }
        }
    })
}

#[component]
pub fn ChooseRoom(rooms: Vec<Room>) -> Element {
    rsx!(div {
        h1 { "Choose a Room" }
        ul {
            class: "room-list",
            for room in rooms {
                li {
                    key: "{room.id}",
                    a { href: "/choose-room/{room.id}", "{room.room_name}" }
                }
            }
        }
    })
}

#[component]
pub fn MakeReservation(data: TemplateData, reservation: Reservation) -> Element {
    let token = data.csrf_token.clone();
    let errors = &data.form.errors;
    let first_name_error = errors.get("first_name").map(str::to_string);
    let last_name_error = errors.get("last_name").map(str::to_string);
    let email_error = errors.get("email").map(str::to_string);
    let phone_error = errors.get("phone").map(str::to_string);

    let start = human_date(reservation.start_date);
    let end = human_date(reservation.end_date);
    let room_id = reservation.room_id;
    let room_name = reservation.room.room_name.clone();

    rsx!(div {
        class: "narrow",
        h1 { "Make Reservation" }
        p {
            strong { "Reservation Details" }
            br {}
            "Room: {room_name}"
            br {}
            "Arrival: {start}"
            br {}
            "Departure: {end}"
        }
        form {
            action: "/make-reservation",
            method: "post",
            CsrfField { token }
            input { r#type: "hidden", name: "start_date", value: "{start}" }
            input { r#type: "hidden", name: "end_date", value: "{end}" }
            input { r#type: "hidden", name: "room_id", value: "{room_id}" }
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
            button { r#type: "submit", class: "btn btn-primary", "Make Reservation" }
        }
    })
}

#[component]
pub fn ReservationSummary(reservation: Reservation) -> Element {
    let start = human_date(reservation.start_date);
    let end = human_date(reservation.end_date);

    rsx!(div {
        h1 { "Reservation Summary" }
        table {
            class: "table",
            tbody {
                tr { td { "Name:" } td { "{reservation.first_name} {reservation.last_name}" } }
                tr { td { "Room:" } td { "{reservation.room.room_name}" } }
                tr { td { "Arrival:" } td { "{start}" } }
                tr { td { "Departure:" } td { "{end}" } }
                tr { td { "Email:" } td { "{reservation.email}" } }
                tr { td { "Phone:" } td { "{reservation.phone}" } }
            }
        }
    })
}
