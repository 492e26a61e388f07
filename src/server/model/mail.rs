//! Outgoing mail message.

/// An email queued for the mail listener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailData {
    pub to: String,
    pub from: String,
    pub subject: String,
    /// HTML content; inserted into `template` when one is named.
    pub content: String,
    /// Name of an embedded email template, e.g. `"basic.html"`.
    pub template: Option<String>,
}
