use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level HealthID configuration, parsed from `healthid.toml`.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct HealthIdConfig {
    #[serde(default)]
    pub app: AppSection,
    #[serde(default)]
    pub login: LoginSection,
}

/// Languages offered by the settings selector. Selection only; there is no
/// translation layer behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    English,
    Portuguese,
    Spanish,
}

impl Language {
    pub fn label(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Portuguese => "Português",
            Language::Spanish => "Español",
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::English
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppSection {
    /// Initial language for the settings selector
    #[serde(default)]
    pub language: Language,
}

impl Default for AppSection {
    fn default() -> Self {
        Self {
            language: Language::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginSection {
    /// Display name substituted when a patient logs in with an empty name
    #[serde(default = "default_patient_name")]
    pub default_patient_name: String,
    /// Display name substituted when a doctor logs in with an empty name
    #[serde(default = "default_doctor_name")]
    pub default_doctor_name: String,
    /// Avatar reference attached to resolved identities
    #[serde(default = "default_avatar_ref")]
    pub avatar_ref: String,
    /// Simulated hardware round trip for biometric login, in milliseconds
    #[serde(default = "default_biometric_delay_ms")]
    pub biometric_delay_ms: u64,
}

impl Default for LoginSection {
    fn default() -> Self {
        Self {
            default_patient_name: default_patient_name(),
            default_doctor_name: default_doctor_name(),
            avatar_ref: default_avatar_ref(),
            biometric_delay_ms: default_biometric_delay_ms(),
        }
    }
}

// ─── Defaults ────────────────────────────────────────────────────

fn default_patient_name() -> String {
    "João Silva".to_string()
}

fn default_doctor_name() -> String {
    "Dr. Maria Santos".to_string()
}

fn default_avatar_ref() -> String {
    "/api/placeholder/100/100".to_string()
}

fn default_biometric_delay_ms() -> u64 {
    2000
}

// ─── Loading ─────────────────────────────────────────────────────

impl HealthIdConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read config file: {}", path.display()))?;
        Self::from_str(&contents)
    }

    /// Parse configuration from a TOML string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(toml_str: &str) -> Result<Self> {
        let config: HealthIdConfig =
            toml::from_str(toml_str).with_context(|| "Failed to parse healthid.toml")?;
        config.validate()?;
        Ok(config)
    }

    /// Validate semantic invariants that serde can't enforce.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            !self.login.default_patient_name.trim().is_empty(),
            "login.default_patient_name must not be empty"
        );
        anyhow::ensure!(
            !self.login.default_doctor_name.trim().is_empty(),
            "login.default_doctor_name must not be empty"
        );
        Ok(())
    }
}

// ─── Tests ───────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[app]
language = "portuguese"

[login]
default_patient_name = "Carlos Henrique da Silva"
default_doctor_name = "Dr. Ana Silva"
avatar_ref = "/avatars/default.png"
biometric_delay_ms = 500
"#;

        let config = HealthIdConfig::from_str(toml).unwrap();
        assert_eq!(config.app.language, Language::Portuguese);
        assert_eq!(config.login.default_patient_name, "Carlos Henrique da Silva");
        assert_eq!(config.login.default_doctor_name, "Dr. Ana Silva");
        assert_eq!(config.login.avatar_ref, "/avatars/default.png");
        assert_eq!(config.login.biometric_delay_ms, 500);
    }

    #[test]
    fn test_parse_empty_config_applies_defaults() {
        let config = HealthIdConfig::from_str("").unwrap();
        assert_eq!(config.app.language, Language::English);
        assert_eq!(config.login.default_patient_name, "João Silva");
        assert_eq!(config.login.default_doctor_name, "Dr. Maria Santos");
        assert_eq!(config.login.biometric_delay_ms, 2000);
    }

    #[test]
    fn test_validate_empty_default_name() {
        let toml = r#"
[login]
default_patient_name = "  "
"#;
        assert!(HealthIdConfig::from_str(toml).is_err());
    }

    #[test]
    fn test_unknown_language_rejected() {
        let toml = r#"
[app]
language = "klingon"
"#;
        assert!(HealthIdConfig::from_str(toml).is_err());
    }
}
