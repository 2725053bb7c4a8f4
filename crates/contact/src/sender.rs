use async_trait::async_trait;

/// Fixed identity of the site owner.
///
/// Every submission is sent from `from_address` to `contact_address`,
/// regardless of what the visitor typed in the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operator {
    pub from_address: String,
    pub contact_address: String,
    pub owner_name: String,
}

/// A composed message ready to hand over to a [`MailSender`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    pub from: String,
    pub to: String,
    pub reply_to: Option<String>,
    pub subject: String,
    pub html: String,
    pub plain: String,
}

/// Capability that transmits an [`Email`].
///
/// Implementations must be safe to call concurrently; each call sends one
/// independent message.
#[async_trait]
pub trait MailSender: Send + Sync {
    async fn send(&self, email: &Email) -> anyhow::Result<()>;
}
