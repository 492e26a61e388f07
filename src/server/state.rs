//! Application state shared across all request handlers.
//!
//! The state is built once during startup and cloned into each handler through
//! Axum's state extraction. Every field is cheap to clone: the connection is a
//! pool handle and the mail sender is a channel handle.

use sea_orm::DatabaseConnection;
use tokio::sync::mpsc;

use crate::server::model::mail::MailData;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// Queue drained by the mail listener; handlers never wait on SMTP.
    pub mail: mpsc::Sender<MailData>,

    /// Sender address of outgoing mail.
    pub mail_from: String,

    /// Address notified of every new reservation.
    pub owner_email: String,
}

impl AppState {
    /// Creates the application state.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `mail` - Sending half of the mail queue
    /// - `mail_from` - Sender address of outgoing mail
    /// - `owner_email` - Recipient of reservation notifications
    pub fn new(
        db: DatabaseConnection,
        mail: mpsc::Sender<MailData>,
        mail_from: String,
        owner_email: String,
    ) -> Self {
        Self {
            db,
            mail,
            mail_from,
            owner_email,
        }
    }

    /// State for handler tests, returning the receiving end of the mail queue.
    #[cfg(test)]
    pub fn for_test(db: DatabaseConnection) -> (Self, mpsc::Receiver<MailData>) {
        let (sender, receiver) = mpsc::channel(16);
        let state = Self::new(
            db,
            sender,
            "reservations@example.com".to_string(),
            "owner@example.com".to_string(),
        );

        (state, receiver)
    }
}
