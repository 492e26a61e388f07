use dioxus::prelude::*;

use crate::server::render::TemplateData;

use super::layout::CsrfField;

#[component]
pub fn Home() -> Element {
    rsx!(div {
        class: "hero",
        h1 { "Welcome to Fort Smythe Bed and Breakfast" }
        p { "Your home away from home, set on the majestic waters of the Atlantic Ocean." }
        p { "This will be a vacation to remember." }
        a {
            class: "btn btn-success",
            href: "/search-availability",
            "Make Reservation Now"
        }
    })
}

#[component]
pub fn About() -> Element {
    rsx!(div {
        h1 { "About" }
        p {
            "Fort Smythe has welcomed guests since the days when it kept watch over the harbour. "
            "Two rooms remain, each restored and furnished for a quiet stay."
        }
        p { "Breakfast is served every morning in the old mess hall." }
    })
}

#[component]
pub fn GeneralsQuarters(data: TemplateData) -> Element {
    rsx!(RoomPage {
        data,
        room_id: 1,
        name: "General's Quarters",
        description: "A spacious corner room with a four-poster bed and a view over the ramparts.",
    })
}

#[component]
pub fn MajorsSuite(data: TemplateData) -> Element {
    rsx!(RoomPage {
        data,
        room_id: 2,
        name: "Major's Suite",
        description: "A bright suite with a private sitting room facing the sea.",
    })
}

/// Room description with the availability check used by `app.js`.
#[component]
fn RoomPage(
    data: TemplateData,
    room_id: i32,
    name: &'static str,
    description: &'static str,
) -> Element {
    let token = data.csrf_token;

    rsx!(div {
        h1 { "{name}" }
        p { "{description}" }
        form {
            id: "check-availability-form",
            class: "inline-form",
            action: "/search-availability-json",
            method: "post",
            "data-room-name": "{name}",
            CsrfField { token }
            input { r#type: "hidden", name: "room_id", value: "{room_id}" }
            label { r#for: "start", "Arrival" }
            input { r#type: "date", id: "start", name: "start", required: true }
            label { r#for: "end", "Departure" }
            input { r#type: "date", id: "end", name: "end", required: true }
            button { r#type: "submit", class: "btn btn-success", "Check Availability" }
        }
        div { id: "availability-result" }
    })
}

#[component]
pub fn Contact() -> Element {
    rsx!(div {
        h1 { "Contact" }
        p { "Questions about your stay? Write to us or call the front desk." }
        ul {
            li { "Phone: 555-555-5555" }
            li { "Email: info@fortsmythe.example" }
        }
    })
}
