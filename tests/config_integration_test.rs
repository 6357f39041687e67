use anyhow::Result;
use skillbridge::utils::validation::Validate;
use skillbridge::{AppConfig, SessionState};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_session_built_from_config_file() -> Result<()> {
    let mut config_file = NamedTempFile::new()?;
    write!(
        config_file,
        r#"
[[catalog.services]]
id = "audit"
name = "Security Audit"
base_rate = 120.0

[pricing]
premium_threshold = 3

[notifications]
phone = "+15551234567"
channels = ["whatsapp", "email"]
"#
    )?;

    let config = AppConfig::from_file(config_file.path())?;
    config.validate()?;

    let mut session = config.session()?;
    session.login("dev@example.com", "pw")?;
    session.select_service("audit")?;
    session.set_complexity(4)?;
    session.set_hours(2.0)?;
    let booking = session.book()?.clone();

    assert_eq!(booking.service, "Security Audit");
    assert!((booking.cost - 336.0).abs() < 1e-9);
    assert_eq!(session.state(), SessionState::Dashboard);

    // 通知順序依設定檔列出的頻道
    let notes = session.notifications();
    assert_eq!(notes.len(), 2);
    assert!(notes[0].starts_with("WhatsApp sent to +15551234567"));
    assert!(notes[1].starts_with("Email sent to dev@example.com"));
    Ok(())
}

#[test]
fn test_invalid_config_is_rejected() -> Result<()> {
    let config = AppConfig::from_toml_str("[notifications]\nchannels = [\"pager\"]\n")?;
    let err = config.validate().unwrap_err();
    assert!(!err.is_recoverable());
    assert!(config.dispatcher().is_err());
    Ok(())
}
