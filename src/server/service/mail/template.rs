//! Email templates embedded at compile time.

use crate::server::{error::internal::InternalError, model::mail::MailData};

const BASIC: &str = include_str!("../../../../templates/email/basic.html");

/// Marker replaced by the message content.
const BODY_MARKER: &str = "[%body%]";

fn lookup(name: &str) -> Option<&'static str> {
    match name {
        "basic.html" => Some(BASIC),
        _ => None,
    }
}

/// Produces the HTML body of a message.
///
/// # Returns
/// - `Ok(String)` - The content inside its template, or as-is without one
/// - `Err(InternalError::MailTemplateNotFound)` - The named template is not embedded
pub fn render(mail: &MailData) -> Result<String, InternalError> {
    let Some(name) = &mail.template else {
        return Ok(mail.content.clone());
    };

    let template =
        lookup(name).ok_or_else(|| InternalError::MailTemplateNotFound(name.clone()))?;

    Ok(template.replace(BODY_MARKER, &mail.content))
}
