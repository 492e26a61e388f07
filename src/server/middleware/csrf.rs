//! CSRF protection for state-changing requests.
//!
//! Every request with an unsafe method must carry the session's token, either in
//! the `X-CSRF-Token` header or as the `csrf_token` field of a urlencoded body.
//! The body is buffered to read the field and handed on to the handler unchanged.

use axum::{
    body::{to_bytes, Body},
    extract::Request,
    http::Method,
    middleware::Next,
    response::Response,
};
use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::session::CsrfSession,
};

pub const CSRF_HEADER: &str = "x-csrf-token";
pub const CSRF_FIELD: &str = "csrf_token";

/// Largest form body accepted; the calendar form is the biggest one posted.
const MAX_FORM_BYTES: usize = 2 * 1024 * 1024;

/// Rejects unsafe requests whose CSRF token is missing or wrong with 400.
pub async fn verify_csrf(
    session: Session,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if is_safe(request.method()) {
        return Ok(next.run(request).await);
    }

    let csrf = CsrfSession::new(&session);

    let header_token = request
        .headers()
        .get(CSRF_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    if let Some(token) = header_token {
        if csrf.verify(&token).await? {
            return Ok(next.run(request).await);
        }
    }

    let (parts, body) = request.into_parts();
    let bytes = to_bytes(body, MAX_FORM_BYTES)
        .await
        .map_err(|e| AppError::BadRequest(format!("Failed to read request body: {}", e)))?;

    let form_token = form_field(&bytes, CSRF_FIELD).unwrap_or_default();

    if !csrf.verify(&form_token).await? {
        tracing::warn!("Rejected {} {} with invalid CSRF token", parts.method, parts.uri);
        return Err(AuthError::CsrfValidationFailed.into());
    }

    Ok(next.run(Request::from_parts(parts, Body::from(bytes))).await)
}

fn is_safe(method: &Method) -> bool {
    matches!(
        *method,
        Method::GET | Method::HEAD | Method::OPTIONS | Method::TRACE
    )
}

/// Reads the first value of `field` from a urlencoded body.
fn form_field(body: &[u8], field: &str) -> Option<String> {
    url::form_urlencoded::parse(body)
        .find(|(key, _)| key == field)
        .map(|(_, value)| value.into_owned())
}
