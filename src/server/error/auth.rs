use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id is stored in the session.
    #[error("User not found in session")]
    UserNotInSession,

    /// The session's user id does not match any user row.
    #[error("User {0} not found in database")]
    UserNotInDatabase(i32),

    /// The user is signed in but below the staff access level.
    #[error("User {0} does not have access to the admin area")]
    AccessDenied(i32),

    /// Unknown email or wrong password. The two are deliberately not distinguished.
    #[error("Invalid login credentials")]
    InvalidCredentials,

    /// An unsafe request did not carry the session's CSRF token.
    #[error("CSRF token missing or does not match the session")]
    CsrfValidationFailed,
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` / `InvalidCredentials` → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden
/// - `CsrfValidationFailed` → 400 Bad Request
///
/// Errors are logged at debug level; client-facing messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) | Self::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "Log in first!").into_response()
            }
            Self::AccessDenied(_) => {
                (StatusCode::FORBIDDEN, "You do not have access to this page").into_response()
            }
            Self::CsrfValidationFailed => (
                StatusCode::BAD_REQUEST,
                "Your form has expired, please go back and try again.",
            )
                .into_response(),
        }
    }
}
