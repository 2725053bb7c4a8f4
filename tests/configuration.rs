//! Tests for configuration system

use portfolio::Config;
use temp_dir::TempDir;

#[test]
fn test_config_loads_from_file() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("portfolio.toml");
    std::fs::write(
        &path,
        r#"
[server]
host = "0.0.0.0"
port = 8080

[email]
smtp_host = "mail.localhost"
smtp_port = 1025
from_address = "owner@portfolio.localhost"
contact_address = "inbox@portfolio.localhost"
owner_name = "Jordan Lee"

[observability]
json = true
"#,
    )?;

    let config = Config::load(Some(path.to_string_lossy().to_string()))?;

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.email.smtp_host, "mail.localhost");
    assert_eq!(config.email.smtp_port, 1025);
    assert!(config.email.smtp_tls);
    assert_eq!(config.observability.log_level, "info");
    assert!(config.observability.json);

    let operator = config.email.operator();
    assert_eq!(operator.contact_address, "inbox@portfolio.localhost");
    assert_eq!(operator.owner_name, "Jordan Lee");
    assert!(config.validate().is_ok());

    Ok(())
}

#[test]
fn test_config_defaults_without_file() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let missing = dir.child("missing.toml");

    let config = Config::load(Some(missing.to_string_lossy().to_string()))?;

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.email.smtp_host, "smtp.gmail.com");
    assert_eq!(config.email.smtp_port, 587);
    assert_eq!(config.email.owner_name, "Alex Chen");

    Ok(())
}
