//! Config loading from disk.

use std::io::Write;

use anyhow::Result;
use healthid::app::config::{HealthIdConfig, Language};

#[test]
fn test_from_file_round_trip() -> Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(
        file,
        r#"
[app]
language = "spanish"

[login]
default_patient_name = "Carlos Henrique da Silva"
biometric_delay_ms = 50
"#
    )?;

    let config = HealthIdConfig::from_file(file.path())?;
    assert_eq!(config.app.language, Language::Spanish);
    assert_eq!(config.login.default_patient_name, "Carlos Henrique da Silva");
    // Unset fields keep their defaults.
    assert_eq!(config.login.default_doctor_name, "Dr. Maria Santos");
    assert_eq!(config.login.avatar_ref, "/api/placeholder/100/100");
    assert_eq!(config.login.biometric_delay_ms, 50);
    Ok(())
}

#[test]
fn test_from_file_missing_path_errors() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = HealthIdConfig::from_file(&dir.path().join("absent.toml")).unwrap_err();
    assert!(err.to_string().contains("Could not read config file"));
}

#[test]
fn test_invalid_toml_errors() -> Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(file, "[login")?;
    assert!(HealthIdConfig::from_file(file.path()).is_err());
    Ok(())
}
