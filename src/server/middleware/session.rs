//! Type-safe session management wrappers.
//!
//! Each struct wraps the same underlying `Session` but exposes only the methods
//! relevant to its concern, which keeps session keys and value types in one place.
//!
//! - `AuthSession` - Signed-in user and session lifecycle
//! - `CsrfSession` - The per-session CSRF token
//! - `FlashSession` - One-shot flash, warning and error messages
//! - `ReservationSession` - The reservation being built by the booking flow
//! - `CalendarSession` - Block maps shown on the admin calendar
//! - `VisitorSession` - Details about the visitor recorded on the home page

use rand::{distr::Alphanumeric, Rng};
use subtle::ConstantTimeEq;
use tower_sessions::Session;

use crate::server::{
    error::AppError,
    model::{calendar::DayMap, reservation::Reservation},
};

// Session key constants
const SESSION_USER_ID: &str = "user_id";
const SESSION_CSRF_TOKEN: &str = "csrf_token";
const SESSION_FLASH: &str = "flash";
const SESSION_WARNING: &str = "warning";
const SESSION_ERROR: &str = "error";
const SESSION_RESERVATION: &str = "reservation";
const SESSION_REMOTE_IP: &str = "remote_ip";
const SESSION_BLOCK_MAP_PREFIX: &str = "block_map_";

const CSRF_TOKEN_LENGTH: usize = 32;

/// Authentication session management.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the signed-in user's id.
    ///
    /// # Returns
    /// - `Ok(())` - User id stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_user_id(&self, user_id: i32) -> Result<(), AppError> {
        self.session.insert(SESSION_USER_ID, user_id).await?;
        Ok(())
    }

    /// Retrieves the signed-in user's id.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - A user is signed in
    /// - `Ok(None)` - No user in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        Ok(self.session.get::<i32>(SESSION_USER_ID).await?)
    }

    pub async fn is_authenticated(&self) -> Result<bool, AppError> {
        Ok(self.get_user_id().await?.is_some())
    }

    /// Issues a new session id while keeping the data; done on every login attempt.
    pub async fn renew(&self) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        Ok(())
    }

    /// Drops all session data and issues a new session id.
    pub async fn destroy(&self) -> Result<(), AppError> {
        self.session.flush().await?;
        self.session.cycle_id().await?;
        Ok(())
    }
}

/// CSRF token management.
///
/// One token lives for the whole session. Pages embed it in every form and the
/// CSRF middleware compares posted tokens against it.
pub struct CsrfSession<'a> {
    session: &'a Session,
}

impl<'a> CsrfSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Returns the session's token, creating and storing one when absent.
    pub async fn token(&self) -> Result<String, AppError> {
        if let Some(token) = self.get().await? {
            return Ok(token);
        }

        let token = generate_token();
        self.session.insert(SESSION_CSRF_TOKEN, token.clone()).await?;

        Ok(token)
    }

    /// Returns the session's token without creating one.
    pub async fn get(&self) -> Result<Option<String>, AppError> {
        Ok(self.session.get::<String>(SESSION_CSRF_TOKEN).await?)
    }

    /// Checks a submitted token against the session's token in constant time.
    ///
    /// # Returns
    /// - `Ok(true)` - The session has a token and it matches
    /// - `Ok(false)` - No token in session, or a mismatch
    pub async fn verify(&self, submitted: &str) -> Result<bool, AppError> {
        let Some(token) = self.get().await? else {
            return Ok(false);
        };

        if submitted.is_empty() {
            return Ok(false);
        }

        Ok(token.as_bytes().ct_eq(submitted.as_bytes()).into())
    }
}

fn generate_token() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(CSRF_TOKEN_LENGTH)
        .map(char::from)
        .collect()
}

/// One-shot messages shown on the next rendered page.
pub struct FlashSession<'a> {
    session: &'a Session,
}

impl<'a> FlashSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    pub async fn set_flash(&self, message: impl Into<String>) -> Result<(), AppError> {
        self.session.insert(SESSION_FLASH, message.into()).await?;
        Ok(())
    }

    pub async fn set_warning(&self, message: impl Into<String>) -> Result<(), AppError> {
        self.session.insert(SESSION_WARNING, message.into()).await?;
        Ok(())
    }

    pub async fn set_error(&self, message: impl Into<String>) -> Result<(), AppError> {
        self.session.insert(SESSION_ERROR, message.into()).await?;
        Ok(())
    }

    /// Removes and returns the flash message; `""` when none is set.
    pub async fn take_flash(&self) -> Result<String, AppError> {
        self.take(SESSION_FLASH).await
    }

    pub async fn take_warning(&self) -> Result<String, AppError> {
        self.take(SESSION_WARNING).await
    }

    pub async fn take_error(&self) -> Result<String, AppError> {
        self.take(SESSION_ERROR).await
    }

    async fn take(&self, key: &str) -> Result<String, AppError> {
        Ok(self
            .session
            .remove::<String>(key)
            .await?
            .unwrap_or_default())
    }
}

/// The reservation carried between the steps of the booking flow.
pub struct ReservationSession<'a> {
    session: &'a Session,
}

impl<'a> ReservationSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    pub async fn set(&self, reservation: &Reservation) -> Result<(), AppError> {
        self.session
            .insert(SESSION_RESERVATION, reservation)
            .await?;
        Ok(())
    }

    pub async fn get(&self) -> Result<Option<Reservation>, AppError> {
        Ok(self.session.get::<Reservation>(SESSION_RESERVATION).await?)
    }

    /// Removes and returns the reservation.
    pub async fn take(&self) -> Result<Option<Reservation>, AppError> {
        Ok(self
            .session
            .remove::<Reservation>(SESSION_RESERVATION)
            .await?)
    }
}

/// Block maps shown on the admin calendar, kept as the baseline for the next save.
pub struct CalendarSession<'a> {
    session: &'a Session,
}

impl<'a> CalendarSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    pub async fn set_block_map(&self, room_id: i32, blocks: &DayMap) -> Result<(), AppError> {
        self.session
            .insert(&block_map_key(room_id), blocks)
            .await?;
        Ok(())
    }

    /// Gets a room's block map; a room never shown has an empty map.
    pub async fn get_block_map(&self, room_id: i32) -> Result<DayMap, AppError> {
        Ok(self
            .session
            .get::<DayMap>(&block_map_key(room_id))
            .await?
            .unwrap_or_default())
    }
}

fn block_map_key(room_id: i32) -> String {
    format!("{}{}", SESSION_BLOCK_MAP_PREFIX, room_id)
}

/// Details about the visitor.
pub struct VisitorSession<'a> {
    session: &'a Session,
}

impl<'a> VisitorSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    pub async fn set_remote_ip(&self, remote_ip: String) -> Result<(), AppError> {
        self.session.insert(SESSION_REMOTE_IP, remote_ip).await?;
        Ok(())
    }

    pub async fn get_remote_ip(&self) -> Result<Option<String>, AppError> {
        Ok(self.session.get::<String>(SESSION_REMOTE_IP).await?)
    }
}
