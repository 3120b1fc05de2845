//! Outbound mail via SMTP
//!
//! Wraps a `lettre` async SMTP transport behind a small injectable handle.
//! The transport is built once from configuration and shared; a disabled
//! mailer logs the message instead of sending, which keeps development
//! setups and unit tests free of an SMTP dependency.

use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::{info, instrument};

use crate::config::SmtpConfig;
use crate::error::{AppError, AppResult};

/// Injectable mail sender
#[derive(Clone)]
pub struct Mailer {
    transport: Option<AsyncSmtpTransport<Tokio1Executor>>,
    from: Mailbox,
}

impl Mailer {
    /// Build a mailer from SMTP configuration
    ///
    /// Credentials are attached only when a username is configured.
    ///
    /// # Errors
    /// Returns an error if the relay host is invalid or the from address
    /// does not parse as a mailbox.
    pub fn from_config(config: &SmtpConfig) -> AppResult<Self> {
        let from = config
            .from_address
            .parse::<Mailbox>()
            .map_err(|e| AppError::Config(format!("Invalid SMTP from address: {e}")))?;

        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|e| AppError::Config(format!("Invalid SMTP relay host: {e}")))?
            .port(config.port);

        if !config.username.is_empty() {
            builder = builder.credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ));
        }

        Ok(Self {
            transport: Some(builder.build()),
            from,
        })
    }

    /// Create a disabled mailer that logs instead of sending
    ///
    /// # Panics
    /// Never panics; the fallback address is a valid mailbox literal.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            transport: None,
            from: "noreply@localhost"
                .parse()
                .unwrap_or_else(|_| unreachable!("static mailbox literal")),
        }
    }

    /// Send an HTML email
    ///
    /// `reply_to` lets a visitor's address ride along so the recipient can
    /// answer directly.
    ///
    /// # Errors
    /// Returns `AppError::Mail` if the message cannot be built or the relay
    /// rejects it.
    #[instrument(skip(self, html_body), fields(to = %to, subject = %subject))]
    pub async fn send(
        &self,
        to: &str,
        subject: &str,
        html_body: String,
        reply_to: Option<&str>,
    ) -> AppResult<()> {
        let to_mailbox = to
            .parse::<Mailbox>()
            .map_err(|e| AppError::Mail(format!("Invalid recipient address: {e}")))?;

        let mut builder = Message::builder()
            .from(self.from.clone())
            .to(to_mailbox)
            .subject(subject)
            .header(ContentType::TEXT_HTML);

        if let Some(reply_to) = reply_to {
            let reply_mailbox = reply_to
                .parse::<Mailbox>()
                .map_err(|e| AppError::Mail(format!("Invalid reply-to address: {e}")))?;
            builder = builder.reply_to(reply_mailbox);
        }

        let message = builder
            .body(html_body)
            .map_err(|e| AppError::Mail(format!("Failed to build message: {e}")))?;

        match &self.transport {
            Some(transport) => {
                transport
                    .send(message)
                    .await
                    .map_err(|e| AppError::Mail(format!("SMTP relay rejected message: {e}")))?;
                info!("Email sent");
                Ok(())
            }
            None => {
                info!("Mailer disabled, skipping send");
                Ok(())
            }
        }
    }
}

impl std::fmt::Debug for Mailer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mailer")
            .field("enabled", &self.transport.is_some())
            .field("from", &self.from.to_string())
            .finish()
    }
}
