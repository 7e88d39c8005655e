//! Frontend configuration module
//!
//! Build-time settings of the web client.

use shared::ClientConfig;
use shared::format::CurrencyFormat;

/// Frontend configuration for the backend location and display settings.
#[derive(Debug, Clone, PartialEq)]
pub struct FrontendConfig {
    /// Backend base URL, baked in from `RENTDESK_API_URL` at build time.
    pub api_base_url: String,
    /// Key of the bearer token in local storage, from `RENTDESK_TOKEN_KEY` at
    /// build time.
    pub token_storage_key: String,
    pub currency: CurrencyFormat,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        let defaults = ClientConfig::with_defaults();
        Self {
            api_base_url: option_env!("RENTDESK_API_URL")
                .unwrap_or(ClientConfig::DEFAULT_API_URL)
                .to_string(),
            token_storage_key: option_env!("RENTDESK_TOKEN_KEY")
                .map_or(defaults.token_storage_key, str::to_string),
            currency: defaults.currency,
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_frontend_config_default() {
        let config = FrontendConfig::default();
        assert!(config.api_base_url().starts_with("http"));
        assert_eq!(
            config.token_storage_key,
            option_env!("RENTDESK_TOKEN_KEY").unwrap_or("token")
        );
    }

    #[wasm_bindgen_test]
    fn test_frontend_config_uses_euro_amounts() {
        let config = FrontendConfig::new();
        assert_eq!(config.currency, CurrencyFormat::euro());
    }
}
