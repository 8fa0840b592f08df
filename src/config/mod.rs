//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment
//! variables using the `config` and `dotenvy` crates. Configuration is loaded
//! with the `BFHL_` prefix and nested values use double underscores as
//! separators. The bare `GEMINI_API_KEY` and `PORT` variables are honored as
//! fallbacks for deployment environments that only set those.
//!
//! # Example
//!
//! ```no_run
//! use bfhl_api::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr());
//! ```

mod ai;
mod contact;
mod error;
mod server;

pub use ai::AiConfig;
pub use contact::ContactConfig;
pub use error::{ConfigError, ValidationError};
pub use server::ServerConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, timeouts)
    #[serde(default)]
    pub server: ServerConfig,

    /// AI provider configuration (Gemini)
    #[serde(default)]
    pub ai: AiConfig,

    /// Contact identity (official email)
    #[serde(default)]
    pub contact: ContactConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `BFHL` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Falls back to bare `GEMINI_API_KEY` / `PORT` variables
    ///
    /// # Environment Variable Format
    ///
    /// - `BFHL__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `BFHL__AI__GEMINI_API_KEY=...` -> `ai.gemini_api_key = ...`
    /// - `BFHL__CONTACT__OFFICIAL_EMAIL=...` -> `contact.official_email = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let mut config: AppConfig = config::Config::builder()
            .add_source(config::Environment::default().prefix("BFHL").separator("__"))
            .build()?
            .try_deserialize()?;

        if config.ai.gemini_api_key.is_none() {
            config.ai.gemini_api_key = std::env::var("GEMINI_API_KEY").ok();
        }
        if let Ok(port) = std::env::var("PORT") {
            if let Ok(port) = port.parse() {
                config.server.port = port;
            }
        }

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.ai.validate()?;
        self.contact.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("BFHL__SERVER__PORT");
        env::remove_var("BFHL__AI__GEMINI_API_KEY");
        env::remove_var("BFHL__CONTACT__OFFICIAL_EMAIL");
        env::remove_var("GEMINI_API_KEY");
        env::remove_var("PORT");
    }

    #[test]
    fn test_load_with_no_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.port, 5000);
        assert!(!config.ai.has_key());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_reads_prefixed_values() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("BFHL__SERVER__PORT", "8080");
        env::set_var("BFHL__AI__GEMINI_API_KEY", "test-key");
        env::set_var("BFHL__CONTACT__OFFICIAL_EMAIL", "dev@example.com");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.ai.gemini_api_key.as_deref(), Some("test-key"));
        assert_eq!(config.contact.official_email, "dev@example.com");
    }

    #[test]
    fn test_bare_variables_act_as_fallbacks() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("GEMINI_API_KEY", "bare-key");
        env::set_var("PORT", "9000");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.ai.gemini_api_key.as_deref(), Some("bare-key"));
        assert_eq!(config.server.port, 9000);
    }

    #[test]
    fn test_prefixed_key_wins_over_bare_fallback() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("BFHL__AI__GEMINI_API_KEY", "prefixed-key");
        env::set_var("GEMINI_API_KEY", "bare-key");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.ai.gemini_api_key.as_deref(), Some("prefixed-key"));
    }
}
