use crate::dialog::FailurePolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

pub const API_URL_ENV: &str = "TEAMDESK_API_URL";
pub const TOKEN_ENV: &str = "TEAMDESK_TOKEN";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Config directory not found")]
    ConfigDirNotFound,
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub bearer_token: Option<String>,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            bearer_token: None,
            timeout_secs: 30,
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Default, Debug)]
#[serde(default)]
pub struct DialogConfig {
    pub on_delete_failure: FailurePolicy,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Default, Debug)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub dialog: DialogConfig,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Non-empty overrides replace the values read from the file.
    pub fn apply_overrides(&mut self, base_url: Option<String>, bearer_token: Option<String>) {
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            self.api.base_url = url;
        }
        if let Some(token) = bearer_token.filter(|t| !t.trim().is_empty()) {
            self.api.bearer_token = Some(token);
        }
    }
}

pub fn get_config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .or_else(dirs::data_local_dir)
        .ok_or(ConfigError::ConfigDirNotFound)?;

    let app_config_dir = config_dir.join("teamdesk");
    Ok(app_config_dir.join("config.jsonc"))
}

/// Loads the config file and applies the environment overrides. A default
/// file is written on first run so there is something to edit.
pub fn load_config() -> Result<AppConfig> {
    let path = get_config_path()?;
    if !path.exists() {
        match save_config_to(&path, &AppConfig::new()) {
            Ok(()) => info!("Wrote default config to {}", path.display()),
            Err(e) => warn!("Failed to write default config: {}", e),
        }
    }

    let mut config = load_config_from(&path)?;
    config.apply_overrides(
        std::env::var(API_URL_ENV).ok(),
        std::env::var(TOKEN_ENV).ok(),
    );
    Ok(config)
}

pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::new());
    }

    let content = fs::read_to_string(path)?;
    let stripped = json_comments::StripComments::new(content.as_bytes());
    let config: AppConfig = serde_json::from_reader(stripped)?;

    Ok(config)
}

/// Writes the configuration as plain JSON.
/// Note: Comments in an existing file will not be preserved.
pub fn save_config_to(path: &Path, config: &AppConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path() {
        let path = get_config_path();
        assert!(path.is_ok());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("teamdesk"));
        assert!(path.to_string_lossy().ends_with("config.jsonc"));
    }

    #[test]
    fn test_load_nonexistent_config() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = load_config_from(&dir.path().join("missing.jsonc")).expect("defaults");
        assert_eq!(config, AppConfig::new());
        assert_eq!(config.dialog.on_delete_failure, FailurePolicy::KeepOpen);
    }

    #[test]
    fn test_load_config_with_comments() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.jsonc");
        fs::write(
            &path,
            r#"{
                // staging server
                "api": { "base_url": "https://scm.example.com", "timeout_secs": 5 },
                /* close the dialog when the server refuses */
                "dialog": { "on_delete_failure": "dismiss" }
            }"#,
        )
        .expect("write config");

        let config = load_config_from(&path).expect("load");
        assert_eq!(config.api.base_url, "https://scm.example.com");
        assert_eq!(config.api.timeout_secs, 5);
        assert_eq!(config.api.bearer_token, None);
        assert_eq!(config.dialog.on_delete_failure, FailurePolicy::Dismiss);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.jsonc");

        let mut config = AppConfig::new();
        config.api.bearer_token = Some("token".to_string());
        config.dialog.on_delete_failure = FailurePolicy::Dismiss;

        save_config_to(&path, &config).expect("save");
        assert_eq!(load_config_from(&path).expect("load"), config);
    }

    #[test]
    fn test_invalid_policy_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.jsonc");
        fs::write(&path, r#"{ "dialog": { "on_delete_failure": "retry" } }"#)
            .expect("write config");

        assert!(matches!(load_config_from(&path), Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_overrides() {
        let mut config = AppConfig::new();
        config.apply_overrides(Some("  ".to_string()), None);
        assert_eq!(config.api.base_url, "http://localhost:8080");

        config.apply_overrides(
            Some("https://scm.example.com".to_string()),
            Some("abc".to_string()),
        );
        assert_eq!(config.api.base_url, "https://scm.example.com");
        assert_eq!(config.api.bearer_token.as_deref(), Some("abc"));
    }
}
