use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Initial values of the database step. Any key missing from the config
/// file keeps its built-in default.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct FormDefaults {
    pub db_type: String,
    pub db_username: String,
    pub db_password: String,
    pub db_host: String,
    pub db_name: String,
    pub db_file: String,
    pub ssl_enabled: bool,
    pub ssl_mode: String,
    pub ssl_root_cert: String,
    pub ssl_cert: String,
    pub ssl_key: String,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            db_type: "mysql".to_string(),
            db_username: "root".to_string(),
            db_password: String::new(),
            db_host: "db:3306".to_string(),
            db_name: "answer".to_string(),
            db_file: "/data/answer.db".to_string(),
            ssl_enabled: false,
            ssl_mode: "require".to_string(),
            ssl_root_cert: String::new(),
            ssl_cert: String::new(),
            ssl_key: String::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct WizardConfig {
    pub form: FormDefaults,
    /// Per-key display string overrides, e.g. `"db_host.label"`.
    pub translations: HashMap<String, String>,
    pub log_level: String,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            form: FormDefaults::default(),
            translations: HashMap::new(),
            log_level: "info".to_string(),
        }
    }
}

impl WizardConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("invalid wizard config")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("in {}", path.display()))
    }

    pub fn log_level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = WizardConfig::from_json(
            r#"{ "form": { "db_type": "postgres", "db_host": "pg:5432" } }"#,
        )
        .unwrap();
        assert_eq!(config.form.db_type, "postgres");
        assert_eq!(config.form.db_host, "pg:5432");
        assert_eq!(config.form.db_name, "answer");
        assert_eq!(config.log_level, "info");
        assert!(config.translations.is_empty());
    }

    #[test]
    fn translations_and_log_level_are_read() {
        let config = WizardConfig::from_json(
            r#"{ "translations": { "next": "Weiter" }, "log_level": "debug" }"#,
        )
        .unwrap();
        assert_eq!(config.translations.get("next").map(String::as_str), Some("Weiter"));
        assert_eq!(config.log_level_filter(), log::LevelFilter::Debug);
    }

    #[test]
    fn bad_log_level_falls_back_to_info() {
        let config = WizardConfig {
            log_level: "loud".to_string(),
            ..WizardConfig::default()
        };
        assert_eq!(config.log_level_filter(), log::LevelFilter::Info);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(WizardConfig::from_json("{ form: ").is_err());
    }
}
