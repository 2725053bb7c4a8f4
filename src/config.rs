use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use portfolio_notification::EmailConfig;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub email: EmailConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Structured JSON output instead of the pretty console format
    #[serde(default)]
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy GMAIL_USER / GMAIL_APP_PASSWORD variables
    /// 2. Environment variables (PORTFOLIO__EMAIL__SMTP_HOST, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("email.smtp_host", "smtp.gmail.com")?
            .set_default("email.smtp_port", 587)?
            .set_default("email.smtp_tls", true)?
            .set_default("email.owner_name", "Alex Chen")?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, missing file falls back to defaults and environment
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        // The mail account doubles as sender and recipient of contact messages
        if let Ok(gmail_user) = env::var("GMAIL_USER") {
            builder = builder
                .set_override("email.smtp_username", gmail_user.to_owned())?
                .set_override("email.from_address", gmail_user.to_owned())?
                .set_override("email.contact_address", gmail_user)?;
        }
        if let Ok(gmail_password) = env::var("GMAIL_APP_PASSWORD") {
            builder = builder.set_override("email.smtp_password", gmail_password)?;
        }

        builder = builder.add_source(
            Environment::with_prefix("PORTFOLIO")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.email.from_address.is_empty() {
            return Err(
                "Email from_address must be set (GMAIL_USER or PORTFOLIO__EMAIL__FROM_ADDRESS)"
                    .to_string(),
            );
        }
        if self.email.smtp_host.is_empty() {
            return Err("Email smtp_host must be set".to_string());
        }
        Ok(())
    }
}
