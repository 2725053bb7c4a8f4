use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use portfolio_contact::{Command, Email, MailSender, Operator, SubmissionRequest};

#[derive(Clone, Default)]
pub struct RecordingSender {
    pub sent: Arc<Mutex<Vec<Email>>>,
}

impl RecordingSender {
    pub fn sent(&self) -> Vec<Email> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MailSender for RecordingSender {
    async fn send(&self, email: &Email) -> anyhow::Result<()> {
        // Yield so concurrent submissions actually interleave.
        tokio::task::yield_now().await;
        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct FailingSender {
    pub attempts: Arc<Mutex<u32>>,
}

#[async_trait]
impl MailSender for FailingSender {
    async fn send(&self, _email: &Email) -> anyhow::Result<()> {
        *self.attempts.lock().unwrap() += 1;
        anyhow::bail!("connection refused by smtp.example.com:587")
    }
}

pub fn operator() -> Operator {
    Operator {
        from_address: "owner@portfolio.localhost".to_owned(),
        contact_address: "owner@portfolio.localhost".to_owned(),
        owner_name: "Alex Chen".to_owned(),
    }
}

#[allow(dead_code)]
pub fn recording_command() -> (Command, RecordingSender) {
    let sender = RecordingSender::default();
    (Command::new(sender.clone(), operator()), sender)
}

pub fn valid_request() -> SubmissionRequest {
    SubmissionRequest {
        first_name: Some("John".to_owned()),
        last_name: Some("Doe".to_owned()),
        email: Some("john@x.com".to_owned()),
        project_type: Some("Web Development".to_owned()),
        message: Some("Hi".to_owned()),
    }
}
