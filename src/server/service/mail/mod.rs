//! Outgoing mail.
//!
//! Handlers queue `MailData` through `MailService`; the listener task owns the SMTP
//! transport and sends queued messages one at a time.

pub mod listener;
pub mod template;

use tokio::sync::mpsc::{self, error::TrySendError};

use crate::server::{
    error::{internal::InternalError, AppError},
    model::mail::MailData,
};

/// Capacity of the mail queue between handlers and the listener.
pub const MAIL_QUEUE_CAPACITY: usize = 100;

pub struct MailService<'a> {
    sender: &'a mpsc::Sender<MailData>,
}

impl<'a> MailService<'a> {
    pub fn new(sender: &'a mpsc::Sender<MailData>) -> Self {
        Self { sender }
    }

    /// Queues a message for the listener without waiting.
    ///
    /// A full queue drops the message instead of holding up the request.
    ///
    /// # Returns
    /// - `Ok(())` - Message queued
    /// - `Err(AppError::InternalErr(MailQueueFull))` - The listener is behind
    /// - `Err(AppError::InternalErr(MailQueueClosed))` - The listener has stopped
    pub fn queue(&self, mail: MailData) -> Result<(), AppError> {
        self.sender.try_send(mail).map_err(|e| match e {
            TrySendError::Full(_) => InternalError::MailQueueFull,
            TrySendError::Closed(_) => InternalError::MailQueueClosed,
        })?;

        Ok(())
    }
}
