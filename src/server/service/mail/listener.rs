//! Background task delivering queued mail.

use dioxus_logger::tracing;
use lettre::{
    message::{header::ContentType, Mailbox},
    AsyncTransport, Message,
};
use tokio::sync::mpsc;

use crate::server::{
    error::{internal::InternalError, AppError},
    model::mail::MailData,
    service::mail::template,
};

/// Sends every queued message until all senders are dropped.
///
/// A failed message is logged and skipped.
pub async fn listen<T>(mut receiver: mpsc::Receiver<MailData>, transport: T)
where
    T: AsyncTransport + Send + Sync,
    T::Error: std::fmt::Display,
{
    tracing::info!("Mail listener started");

    while let Some(mail) = receiver.recv().await {
        let to = mail.to.clone();
        match send_mail(&transport, mail).await {
            Ok(()) => tracing::debug!("Sent mail to {}", to),
            Err(e) => tracing::error!("{}", e),
        }
    }

    tracing::info!("Mail listener stopped");
}

/// Builds and sends one message as HTML.
pub async fn send_mail<T>(transport: &T, mail: MailData) -> Result<(), AppError>
where
    T: AsyncTransport + Sync,
    T::Error: std::fmt::Display,
{
    let body = template::render(&mail)?;

    let message = Message::builder()
        .from(parse_mailbox(&mail.from)?)
        .to(parse_mailbox(&mail.to)?)
        .subject(mail.subject)
        .header(ContentType::TEXT_HTML)
        .body(body)
        .map_err(InternalError::from)?;

    transport
        .send(message)
        .await
        .map_err(|e| InternalError::MailSend {
            to: mail.to,
            reason: e.to_string(),
        })?;

    Ok(())
}

fn parse_mailbox(address: &str) -> Result<Mailbox, InternalError> {
    address
        .parse::<Mailbox>()
        .map_err(|source| InternalError::InvalidMailAddress {
            address: address.to_string(),
            source,
        })
}
