use serde::{Deserialize, Serialize};
#[cfg(not(target_arch = "wasm32"))]
use std::{env, fs, path::PathBuf};
use thiserror::Error;
use url::Url;

use crate::format::CurrencyFormat;
use crate::session::TOKEN_STORAGE_KEY;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse configuration: {0}")]
    Parse(String),
    #[error("unsupported configuration format `{0}`, use yaml or json")]
    UnsupportedFormat(String),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Settings of a RentDesk client.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the backend API, without the `/api` prefix.
    pub api_base_url: String,

    /// Storage key of the bearer token: the `localStorage` key on the web and
    /// the token file name in the CLI.
    pub token_storage_key: String,

    /// Logging level for the CLI.
    pub log_level: String,

    /// How amounts are rendered.
    pub currency: CurrencyFormat,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl ClientConfig {
    pub const DEFAULT_API_URL: &'static str = "http://localhost:8080";

    /// Generates a default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            api_base_url: Self::DEFAULT_API_URL.to_string(),
            token_storage_key: TOKEN_STORAGE_KEY.to_string(),
            log_level: "warn".to_string(),
            currency: CurrencyFormat::default(),
        }
    }

    /// Loads the configuration from a file, environment variables, or defaults.
    ///
    /// Precedence: `api_url_override`, then the file, then `RENTDESK_*`
    /// environment variables, then defaults.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when the file cannot be read or parsed, or when
    /// the resolved configuration does not validate.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_config(
        config_path: Option<PathBuf>,
        api_url_override: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let defaults = Self::with_defaults();
        let mut config = match config_path {
            Some(path) => Self::from_file(&path)?,
            None => defaults.clone(),
        };

        // Use environment variables only if values are not already set
        if config.api_base_url == defaults.api_base_url
            && let Ok(url) = env::var("RENTDESK_API_URL")
        {
            config.api_base_url = url;
        }
        if config.token_storage_key == defaults.token_storage_key
            && let Ok(key) = env::var("RENTDESK_TOKEN_KEY")
        {
            config.token_storage_key = key;
        }
        if config.log_level == defaults.log_level
            && let Ok(level) = env::var("RENTDESK_LOG_LEVEL")
        {
            config.log_level = level;
        }

        if let Some(url) = api_url_override {
            config.api_base_url = url.to_string();
        }

        config.validate().map_err(|errors| ConfigError::Invalid(errors.join("; ")))?;
        Ok(config)
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => {
                serde_yml::from_str(&content).map_err(|err| ConfigError::Parse(err.to_string()))
            }
            Some("json") => {
                serde_json::from_str(&content).map_err(|err| ConfigError::Parse(err.to_string()))
            }
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or_default().to_string(),
            )),
        }
    }

    /// Serialize the configuration as `yaml` or `json`.
    ///
    /// # Errors
    /// Returns [`ConfigError`] for an unknown format or a serializer failure.
    pub fn render(&self, format: &str) -> Result<String, ConfigError> {
        match format {
            "yaml" | "yml" => {
                serde_yml::to_string(self).map_err(|err| ConfigError::Parse(err.to_string()))
            }
            "json" => serde_json::to_string_pretty(self)
                .map_err(|err| ConfigError::Parse(err.to_string())),
            other => Err(ConfigError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Validate the configuration.
    ///
    /// # Errors
    /// Returns every problem found.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        match Url::parse(&self.api_base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => errors.push(format!(
                "API base URL must use http or https, got `{}`",
                url.scheme()
            )),
            Err(err) => errors.push(format!(
                "Invalid API base URL `{}`: {err}",
                self.api_base_url
            )),
        }

        if self.token_storage_key.trim().is_empty() {
            errors.push("Token storage key must not be empty.".to_string());
        } else if self.token_storage_key.contains(['/', '\\']) || self.token_storage_key == ".." {
            errors.push("Token storage key must not contain path separators.".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    fn cleanup_env_vars() {
        unsafe {
            std::env::remove_var("RENTDESK_API_URL");
            std::env::remove_var("RENTDESK_TOKEN_KEY");
            std::env::remove_var("RENTDESK_LOG_LEVEL");
        }
    }

    #[test]
    fn test_config_with_defaults() {
        let config = ClientConfig::with_defaults();

        assert_eq!(config.api_base_url, "http://localhost:8080");
        assert_eq!(config.token_storage_key, "token");
        assert_eq!(config.currency, CurrencyFormat::euro());
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_load_config_with_defaults() {
        cleanup_env_vars();
        let config = ClientConfig::load_config(None, None).unwrap();
        assert_eq!(config, ClientConfig::with_defaults());
    }

    #[test]
    #[serial]
    fn test_load_config_with_environment_variables() {
        cleanup_env_vars();
        unsafe {
            std::env::set_var("RENTDESK_API_URL", "https://api.rentdesk.test");
            std::env::set_var("RENTDESK_LOG_LEVEL", "debug");
        }

        let config = ClientConfig::load_config(None, None).unwrap();

        assert_eq!(config.api_base_url, "https://api.rentdesk.test");
        assert_eq!(config.log_level, "debug");
        cleanup_env_vars();
    }

    #[test]
    #[serial]
    fn test_override_beats_file_and_environment() {
        cleanup_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("rentdesk.yaml");
        fs::write(&config_file, "api_base_url: \"https://file.example\"\n").unwrap();
        unsafe {
            std::env::set_var("RENTDESK_API_URL", "https://env.example");
        }

        let from_file = ClientConfig::load_config(Some(config_file.clone()), None).unwrap();
        assert_eq!(from_file.api_base_url, "https://file.example");
        assert_eq!(from_file.token_storage_key, "token");

        let overridden =
            ClientConfig::load_config(Some(config_file), Some("http://127.0.0.1:9000")).unwrap();
        assert_eq!(overridden.api_base_url, "http://127.0.0.1:9000");
        cleanup_env_vars();
    }

    #[test]
    #[serial]
    fn test_token_key_from_environment() {
        cleanup_env_vars();
        unsafe {
            std::env::set_var("RENTDESK_TOKEN_KEY", "staging-token");
        }
        let config = ClientConfig::load_config(None, None).unwrap();
        assert_eq!(config.token_storage_key, "staging-token");

        unsafe {
            std::env::set_var("RENTDESK_TOKEN_KEY", "../escape");
        }
        assert!(matches!(
            ClientConfig::load_config(None, None),
            Err(ConfigError::Invalid(msg)) if msg.contains("path separators")
        ));
        cleanup_env_vars();
    }

    #[test]
    #[serial]
    fn test_load_json_config_with_currency() {
        cleanup_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("rentdesk.json");
        let json = serde_json::to_string(&ClientConfig {
            currency: CurrencyFormat::dollar(),
            ..ClientConfig::with_defaults()
        })
        .unwrap();
        fs::write(&config_file, json).unwrap();

        let config = ClientConfig::load_config(Some(config_file), None).unwrap();
        assert_eq!(config.currency, CurrencyFormat::dollar());
    }

    #[test]
    #[serial]
    fn test_rejects_unsupported_format_and_bad_url() {
        cleanup_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("rentdesk.toml");
        fs::write(&config_file, "api_base_url = 'x'").unwrap();

        assert!(matches!(
            ClientConfig::load_config(Some(config_file), None),
            Err(ConfigError::UnsupportedFormat(ext)) if ext == "toml"
        ));
        assert!(matches!(
            ClientConfig::load_config(None, Some("ftp://files.example")),
            Err(ConfigError::Invalid(msg)) if msg.contains("http or https")
        ));
        assert!(matches!(
            ClientConfig::load_config(None, Some("not a url")),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_render_round_trips_through_yaml() {
        let config = ClientConfig::with_defaults();
        let yaml = config.render("yaml").unwrap();
        let parsed: ClientConfig = serde_yml::from_str(&yaml).unwrap();
        assert_eq!(parsed, config);
        assert!(config.render("ini").is_err());
    }
}
