// src/services/notifier.rs

//! Email notifier service.

use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

use crate::error::{AppError, Result};
use crate::models::SmtpConfig;

/// Delivers a finished report.
pub trait Notifier {
    /// Send one plain-text message to all `recipients`. One attempt, no retries.
    fn send(&self, subject: &str, body: &str, recipients: &[String]) -> Result<()>;
}

/// Sends mail through an authenticated STARTTLS SMTP session.
pub struct SmtpNotifier<'a> {
    smtp: &'a SmtpConfig,
}

impl<'a> SmtpNotifier<'a> {
    pub fn new(smtp: &'a SmtpConfig) -> Self {
        Self { smtp }
    }

    /// Build the message without sending it.
    ///
    /// The sender is the SMTP account; all recipients share one `To` header.
    pub fn build_message(&self, subject: &str, body: &str, recipients: &[String]) -> Result<Message> {
        let from = parse_mailbox(&self.smtp.account)?;
        let mut builder = Message::builder()
            .from(from)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN);

        for recipient in recipients {
            builder = builder.to(parse_mailbox(recipient)?);
        }

        builder.body(body.to_string()).map_err(AppError::send)
    }

    fn transport(&self) -> Result<SmtpTransport> {
        let credentials = Credentials::new(self.smtp.account.clone(), self.smtp.secret.clone());
        let transport = SmtpTransport::starttls_relay(&self.smtp.host)
            .map_err(AppError::send)?
            .port(self.smtp.port)
            .credentials(credentials)
            .build();
        Ok(transport)
    }
}

impl Notifier for SmtpNotifier<'_> {
    fn send(&self, subject: &str, body: &str, recipients: &[String]) -> Result<()> {
        let message = self.build_message(subject, body, recipients)?;

        // Fresh session per call; the transport closes it when dropped.
        let transport = self.transport()?;
        log::debug!("Connecting to {}:{}", self.smtp.host, self.smtp.port);
        let response = transport.send(&message).map_err(AppError::send)?;

        log::info!(
            "Sent '{}' to {} recipient(s) ({})",
            subject,
            recipients.len(),
            response.code()
        );
        Ok(())
    }
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn send(&self, subject: &str, body: &str, recipients: &[String]) -> Result<()> {
        (**self).send(subject, body, recipients)
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox> {
    address
        .parse()
        .map_err(|e| AppError::send(format!("invalid address '{address}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn smtp() -> SmtpConfig {
        SmtpConfig {
            host: "smtp.example.com".to_string(),
            port: 587,
            account: "monitor@example.com".to_string(),
            secret: "hunter2".to_string(),
        }
    }

    #[test]
    fn message_addresses_all_recipients() {
        let smtp = smtp();
        let notifier = SmtpNotifier::new(&smtp);
        let recipients = vec!["a@example.com".to_string(), "b@example.com".to_string()];

        let message = notifier
            .build_message("Book Status Report", "all good\n", &recipients)
            .unwrap();
        let raw = String::from_utf8(message.formatted()).unwrap();

        assert!(raw.contains("From: monitor@example.com"));
        assert!(raw.contains("To: a@example.com, b@example.com"));
        assert!(raw.contains("Subject: Book Status Report"));
        assert!(raw.contains("Content-Type: text/plain"));
        assert!(raw.contains("all good"));
    }

    #[test]
    fn invalid_recipient_is_send_error() {
        let smtp = smtp();
        let notifier = SmtpNotifier::new(&smtp);
        let err = notifier
            .build_message("s", "b", &["not an address".to_string()])
            .unwrap_err();
        assert!(matches!(err, AppError::Send(_)));
    }

    #[test]
    fn no_recipients_is_send_error() {
        let smtp = smtp();
        let err = SmtpNotifier::new(&smtp)
            .build_message("s", "b", &[])
            .unwrap_err();
        assert!(matches!(err, AppError::Send(_)));
    }
}
