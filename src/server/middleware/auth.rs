//! Login guard for the admin area.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use sea_orm::ConnectionTrait;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::{AuthSession, FlashSession},
    model::user::User,
    state::AppState,
};

pub enum Permission {
    /// Access level at or above `STAFF_ACCESS_LEVEL`.
    Staff,
}

/// Resolves the signed-in user and checks their permissions.
pub struct AuthGuard<'a, C: ConnectionTrait> {
    db: &'a C,
    session: &'a Session,
}

impl<'a, C: ConnectionTrait> AuthGuard<'a, C> {
    pub fn new(db: &'a C, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Returns the signed-in user if they hold every permission.
    ///
    /// # Returns
    /// - `Ok(User)` - Signed in with the required permissions
    /// - `Err(AuthError::UserNotInSession)` - Nobody is signed in
    /// - `Err(AuthError::UserNotInDatabase)` - The session's user no longer exists
    /// - `Err(AuthError::AccessDenied)` - Signed in but lacking a permission
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Staff => {
                    if !user.is_staff() {
                        return Err(AuthError::AccessDenied(user.id).into());
                    }
                }
            }
        }

        Ok(user)
    }
}

/// Middleware admitting only signed-in staff.
///
/// Visitors who are not signed in are sent to the login page with "Log in first!";
/// signed-in users below the staff level get 403.
pub async fn require_staff(
    State(state): State<AppState>,
    session: Session,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    match AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await
    {
        Ok(_) => Ok(next.run(request).await),
        Err(AppError::AuthErr(AuthError::UserNotInSession))
        | Err(AppError::AuthErr(AuthError::UserNotInDatabase(_))) => {
            FlashSession::new(&session).set_error("Log in first!").await?;
            Ok(Redirect::to("/user/login").into_response())
        }
        Err(err) => Err(err),
    }
}
