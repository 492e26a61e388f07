use lettre::address::AddressError;
use thiserror::Error;

/// Internal issues indicating unexpected behavior and possible bugs.
#[derive(Error, Debug)]
pub enum InternalError {
    /// The mail listener has shut down and the queue no longer accepts messages.
    #[error("Mail queue is closed")]
    MailQueueClosed,

    /// The mail queue is at capacity and the message was dropped.
    #[error("Mail queue is full")]
    MailQueueFull,

    /// A mail named a template that is not embedded in the binary.
    #[error("Email template '{0}' not found")]
    MailTemplateNotFound(String),

    /// A sender or recipient address could not be parsed.
    #[error("Invalid email address '{address}': {source}")]
    InvalidMailAddress {
        /// The address that failed to parse
        address: String,
        /// The underlying parse error
        #[source]
        source: AddressError,
    },

    /// The message could not be assembled.
    #[error(transparent)]
    MailBuild(#[from] lettre::error::Error),

    /// The SMTP transport rejected the message.
    #[error("Failed to send mail to {to}: {reason}")]
    MailSend {
        /// Recipient of the failed message
        to: String,
        /// Transport error message
        reason: String,
    },
}
