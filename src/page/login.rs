use dioxus::prelude::*;

use crate::server::render::TemplateData;

use super::layout::{CsrfField, TextField};

#[component]
pub fn Login(data: TemplateData) -> Element {
    let token = data.csrf_token.clone();
    let email = data.form.get("email").to_string();
    let email_error = data.form.errors.get("email").map(str::to_string);
    let password_error = data.form.errors.get("password").map(str::to_string);

    rsx!(div {
        class: "narrow",
        h1 { "Login" }
        form {
            action: "/user/login",
            method: "post",
            CsrfField { token }
            TextField {
                label: "Email",
                name: "email",
                value: email,
                error: email_error,
                input_type: "email",
            }
            TextField {
                label: "Password",
                name: "password",
                value: String::new(),
                error: password_error,
                input_type: "password",
            }
            button { r#type: "submit", class: "btn btn-primary", "Submit" }
        }
    })
}
