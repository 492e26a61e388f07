use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, AppError},
    form::Form as PostedForm,
    middleware::session::{AuthSession, FlashSession},
    render::{render, Page, TemplateData},
    service::auth::AuthService,
    state::AppState,
};

pub async fn login(session: Session) -> Result<Response, AppError> {
    Ok(render(&session, TemplateData::default(), Page::Login)
        .await?
        .into_response())
}

/// Signs a user in.
///
/// The session id is renewed on every attempt. Wrong credentials redirect back
/// to the login page with an error message.
pub async fn post_login(
    State(state): State<AppState>,
    session: Session,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let auth_session = AuthSession::new(&session);
    auth_session.renew().await?;

    let mut form = PostedForm::new(pairs);
    form.required(&["email", "password"]);
    form.is_email("email");

    if !form.valid() {
        let html = render(&session, TemplateData::with_form(form), Page::Login).await?;
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, html).into_response());
    }

    let flash = FlashSession::new(&session);

    match AuthService::new(&state.db)
        .authenticate(form.get("email"), form.get("password"))
        .await
    {
        Ok(user_id) => {
            auth_session.set_user_id(user_id).await?;
            flash.set_flash("Logged in successfully").await?;
            tracing::info!("User {} logged in", user_id);

            Ok(Redirect::to("/").into_response())
        }
        Err(AppError::AuthErr(AuthError::InvalidCredentials)) => {
            flash.set_error("Invalid login credentials").await?;
            Ok(Redirect::to("/user/login").into_response())
        }
        Err(e) => Err(e),
    }
}

/// Drops the whole session.
pub async fn logout(session: Session) -> Result<Response, AppError> {
    AuthSession::new(&session).destroy().await?;

    Ok(Redirect::to("/user/login").into_response())
}
