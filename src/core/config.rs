//! Configuration management for the MCP server.
//!
//! Configuration is populated from environment variables (optionally loaded
//! from a `.env` file) on top of built-in defaults.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Default AnythingLLM instance address.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

/// Default per-request timeout, chat completions can be slow.
pub const DEFAULT_TIMEOUT_SECS: u64 = 180;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Connection settings for the AnythingLLM API.
    pub anythingllm: AnythingLlmConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Connection settings for the AnythingLLM API.
#[derive(Clone, Serialize, Deserialize)]
pub struct AnythingLlmConfig {
    /// Base URL of the AnythingLLM instance, without trailing slash.
    pub base_url: String,

    /// Developer API key sent as a bearer token. Empty when unset.
    pub api_key: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

/// Custom Debug implementation to redact the API key from logs.
impl std::fmt::Debug for AnythingLlmConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnythingLlmConfig")
            .field("base_url", &self.base_url)
            .field(
                "api_key",
                &if self.has_api_key() { "[REDACTED]" } else { "<unset>" },
            )
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl AnythingLlmConfig {
    /// Whether a non-blank API key is configured.
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

impl Default for AnythingLlmConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: String::new(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "anythingllm_mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            anythingllm: AnythingLlmConfig::default(),
        }
    }
}

/// Strip trailing slashes so endpoint paths can be appended verbatim.
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// AnythingLLM settings use the `ANYTHINGLLM_` prefix, server settings
    /// use `MCP_` (for example `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.transport = TransportConfig::from_env();

        if let Ok(base_url) = std::env::var("ANYTHINGLLM_BASE_URL") {
            config.anythingllm.base_url = normalize_base_url(&base_url);
        }

        if let Ok(api_key) = std::env::var("ANYTHINGLLM_API_KEY") {
            config.anythingllm.api_key = api_key;
        }

        if let Ok(timeout) = std::env::var("ANYTHINGLLM_TIMEOUT_SECS") {
            match timeout.parse() {
                Ok(secs) => {
                    config.anythingllm.timeout_secs = secs;
                    info!("AnythingLLM request timeout set to {}s", secs);
                }
                Err(_) => warn!(
                    "Ignoring invalid ANYTHINGLLM_TIMEOUT_SECS '{}', using {}s",
                    timeout, DEFAULT_TIMEOUT_SECS
                ),
            }
        }

        config
    }

    /// Check that the configuration can be used to build the server.
    ///
    /// A missing API key is not an error here: tools report it per call.
    pub fn validate(&self) -> Result<()> {
        let base_url = &self.anythingllm.base_url;
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(Error::config(format!(
                "ANYTHINGLLM_BASE_URL must start with http:// or https://, got '{}'",
                base_url
            )));
        }
        if self.anythingllm.timeout_secs == 0 {
            return Err(Error::config("ANYTHINGLLM_TIMEOUT_SECS must be greater than 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Env var tests must not interleave
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_anythingllm_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("ANYTHINGLLM_BASE_URL", "http://llm.internal:3001/");
            std::env::set_var("ANYTHINGLLM_API_KEY", "test-token");
            std::env::set_var("ANYTHINGLLM_TIMEOUT_SECS", "30");
        }
        let config = Config::from_env();
        assert_eq!(config.anythingllm.base_url, "http://llm.internal:3001");
        assert_eq!(config.anythingllm.api_key, "test-token");
        assert_eq!(config.anythingllm.timeout_secs, 30);
        unsafe {
            std::env::remove_var("ANYTHINGLLM_BASE_URL");
            std::env::remove_var("ANYTHINGLLM_API_KEY");
            std::env::remove_var("ANYTHINGLLM_TIMEOUT_SECS");
        }
    }

    #[test]
    fn test_invalid_timeout_falls_back_to_default() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("ANYTHINGLLM_TIMEOUT_SECS", "soon");
        }
        let config = Config::from_env();
        assert_eq!(config.anythingllm.timeout_secs, DEFAULT_TIMEOUT_SECS);
        unsafe {
            std::env::remove_var("ANYTHINGLLM_TIMEOUT_SECS");
        }
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.anythingllm.base_url, "http://localhost:3001");
        assert!(!config.anythingllm.has_api_key());
        assert_eq!(config.server.name, "anythingllm_mcp");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_blank_api_key_is_not_configured() {
        let settings = AnythingLlmConfig {
            api_key: "   ".to_string(),
            ..Default::default()
        };
        assert!(!settings.has_api_key());
    }

    #[test]
    fn test_api_key_redacted_in_debug() {
        let settings = AnythingLlmConfig {
            api_key: "super_secret_key".to_string(),
            ..Default::default()
        };
        let debug_str = format!("{:?}", settings);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_key"));
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        let mut config = Config::default();
        config.anythingllm.base_url = "localhost:3001".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("ANYTHINGLLM_BASE_URL"));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.anythingllm.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(normalize_base_url("http://a:1///"), "http://a:1");
        assert_eq!(normalize_base_url(" https://a "), "https://a");
    }
}
