use dioxus::prelude::*;

#[component]
pub fn AdminDashboard() -> Element {
    rsx!(div {
        p { "Use the menu to review new reservations, browse all reservations or manage the calendar." }
    })
}
