//! Email notification service using lettre

use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, MultiPart},
    transport::smtp::authentication::Credentials,
};
use portfolio_contact::{Email, MailSender, Operator};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    pub smtp_host: String,
    pub smtp_port: u16,
    #[serde(default)]
    pub smtp_username: String,
    #[serde(default)]
    pub smtp_password: String,
    #[serde(default = "default_smtp_tls")]
    pub smtp_tls: bool,
    #[serde(default)]
    pub from_address: String,
    /// Inbox receiving contact submissions, `from_address` when empty
    #[serde(default)]
    pub contact_address: String,
    #[serde(default = "default_owner_name")]
    pub owner_name: String,
}

fn default_smtp_tls() -> bool {
    true
}

fn default_owner_name() -> String {
    "Alex Chen".to_string()
}

impl EmailConfig {
    pub fn operator(&self) -> Operator {
        let contact_address = if self.contact_address.is_empty() {
            self.from_address.to_owned()
        } else {
            self.contact_address.to_owned()
        };

        Operator {
            from_address: self.from_address.to_owned(),
            contact_address,
            owner_name: self.owner_name.to_owned(),
        }
    }
}

/// Email service for sending notifications
#[derive(Clone)]
pub struct EmailService {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
}

impl EmailService {
    /// Create a new email service from configuration
    pub fn new(config: &EmailConfig) -> anyhow::Result<Self> {
        let mailer = if config.smtp_username.is_empty() || config.smtp_password.is_empty() {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                "SMTP credentials not configured, using unauthenticated connection (e.g., MailDev)"
            );

            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.smtp_host)
                .port(config.smtp_port)
                .build()
        } else {
            let creds =
                Credentials::new(config.smtp_username.clone(), config.smtp_password.clone());

            if config.smtp_tls {
                tracing::info!(
                    smtp_host = %config.smtp_host,
                    smtp_port = config.smtp_port,
                    from = %config.from_address,
                    "Email service initialized with authentication and STARTTLS"
                );

                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
                    .port(config.smtp_port)
                    .credentials(creds)
                    .build()
            } else {
                tracing::warn!(
                    smtp_host = %config.smtp_host,
                    smtp_port = config.smtp_port,
                    "Email service initialized with authentication over plain text"
                );

                AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.smtp_host)
                    .port(config.smtp_port)
                    .credentials(creds)
                    .build()
            }
        };

        Ok(Self { mailer })
    }
}

/// Convert a composed [`Email`] into a multipart/alternative message.
///
/// An unparseable `reply_to` is dropped rather than failing the send: the
/// submitter's address is still part of both bodies.
pub fn build_message(email: &Email) -> anyhow::Result<Message> {
    let mut builder = Message::builder()
        .from(email.from.parse::<Mailbox>()?)
        .to(email.to.parse::<Mailbox>()?)
        .subject(email.subject.to_owned());

    if let Some(reply_to) = &email.reply_to {
        match reply_to.parse::<Mailbox>() {
            Ok(mailbox) => builder = builder.reply_to(mailbox),
            Err(err) => tracing::warn!(error = %err, "Ignoring invalid reply-to address"),
        }
    }

    Ok(builder.multipart(MultiPart::alternative_plain_html(
        email.plain.to_owned(),
        email.html.to_owned(),
    ))?)
}

#[async_trait]
impl MailSender for EmailService {
    #[tracing::instrument(skip_all, fields(to = %email.to, subject = %email.subject))]
    async fn send(&self, email: &Email) -> anyhow::Result<()> {
        tracing::info!("Sending email");

        let message = build_message(email)?;

        self.mailer.send(message).await?;

        Ok(())
    }
}
