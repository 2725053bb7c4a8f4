//! Shared setup for router tests: a config that never touches the network
//! and mail senders that record or fail instead of talking SMTP.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use portfolio::{
    AppState, Config,
    config::{ObservabilityConfig, ServerConfig},
};
use portfolio_contact::{Command, Email, MailSender};
use portfolio_notification::EmailConfig;

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
        tokio::task::yield_now().await;
        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct FailingSender;

#[async_trait]
impl MailSender for FailingSender {
    async fn send(&self, _email: &Email) -> anyhow::Result<()> {
        anyhow::bail!("421 4.7.0 Try again later, closing connection")
    }
}

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        email: EmailConfig {
            smtp_host: "localhost".to_string(),
            smtp_port: 1025,
            smtp_username: String::new(),
            smtp_password: String::new(),
            smtp_tls: false,
            from_address: "owner@portfolio.localhost".to_string(),
            contact_address: String::new(),
            owner_name: "Alex Chen".to_string(),
        },
        observability: ObservabilityConfig::default(),
    }
}

pub fn create_test_app(sender: impl MailSender + 'static) -> Router {
    let config = test_config();
    let command = Command::new(sender, config.email.operator());

    portfolio::router(AppState { command })
}

pub fn valid_payload() -> serde_json::Value {
    serde_json::json!({
        "firstName": "John",
        "lastName": "Doe",
        "email": "john@x.com",
        "projectType": "Web Development",
        "message": "Hi",
    })
}
