use dioxus::prelude::*;

use crate::server::render::TemplateData;

use super::SITE_NAME;

/// Public layout: navigation bar, message alerts and footer.
#[component]
pub fn BaseLayout(data: TemplateData, children: Element) -> Element {
    let is_authenticated = data.is_authenticated;

    rsx!(div {
        nav {
            class: "navbar",
            a {
                class: "navbar-brand",
                href: "/",
                {SITE_NAME}
            }
            ul {
                class: "navbar-links",
                li { a { href: "/", "Home" } }
                li { a { href: "/about", "About" } }
                li { a { href: "/generals-quarters", "General's Quarters" } }
                li { a { href: "/majors-suite", "Major's Suite" } }
                li { a { href: "/search-availability", "Book Now" } }
                li { a { href: "/contact", "Contact" } }
                if is_authenticated {
                    li { a { href: "/admin/dashboard", "Admin" } }
                    li { a { href: "/user/logout", "Logout" } }
                } else {
                    li { a { href: "/user/login", "Login" } }
                }
            }
        }
        main {
            class: "container",
            Alerts { data: data.clone() }
            {children}
        }
        footer {
            class: "footer",
            p { "{SITE_NAME}" }
            p { "100 Rocky Road, Northbrook, Ontario" }
        }
    })
}

/// Admin layout: sidebar navigation and a titled content area.
#[component]
pub fn AdminLayout(data: TemplateData, title: &'static str, children: Element) -> Element {
    rsx!(div {
        class: "admin",
        aside {
            class: "sidebar",
            a {
                class: "sidebar-brand",
                href: "/",
                {SITE_NAME}
            }
            ul {
                li { a { href: "/admin/dashboard", "Dashboard" } }
                li { a { href: "/admin/reservations-new", "New Reservations" } }
                li { a { href: "/admin/reservations-all", "All Reservations" } }
                li { a { href: "/admin/reservations-calendar", "Reservation Calendar" } }
                li { a { href: "/user/logout", "Logout" } }
            }
        }
        section {
            class: "admin-content",
            h2 { "{title}" }
            Alerts { data: data.clone() }
            {children}
        }
    })
}

#[component]
fn Alerts(data: TemplateData) -> Element {
    let flash = data.flash;
    let warning = data.warning;
    let error = data.error;

    rsx!(
        if !flash.is_empty() {
            div { class: "alert alert-success", "{flash}" }
        }
        if !warning.is_empty() {
            div { class: "alert alert-warning", "{warning}" }
        }
        if !error.is_empty() {
            div { class: "alert alert-danger", "{error}" }
        }
    )
}

/// Hidden input carrying the session's CSRF token.
#[component]
pub fn CsrfField(token: String) -> Element {
    rsx!(input {
        r#type: "hidden",
        name: "csrf_token",
        value: "{token}",
    })
}

/// Labelled input showing the field's first validation error.
#[component]
pub fn TextField(
    label: &'static str,
    name: &'static str,
    value: String,
    error: Option<String>,
    #[props(default = "text")] input_type: &'static str,
) -> Element {
    let class = if error.is_some() {
        "form-control is-invalid"
    } else {
        "form-control"
    };

    rsx!(div {
        class: "field",
        label { r#for: name, "{label}" }
        {error.map(|message| rsx!(div { class: "field-error", "{message}" }))}
        input {
            r#type: input_type,
            id: name,
            name,
            class,
            value: "{value}",
            autocomplete: "off",
        }
    })
}
