use crate::error::{Result, SuggestionError};
use std::env;

pub const DEFAULT_GEMINI_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro-latest:generateContent";
pub const DEFAULT_PEXELS_ENDPOINT: &str = "https://api.pexels.com/v1/search";
pub const DEFAULT_PER_PAGE: u32 = 3;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8081;
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3001";

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub endpoint: String,
}

#[derive(Debug, Clone)]
pub struct PexelsConfig {
    pub api_key: Option<String>,
    pub endpoint: String,
    pub per_page: u32,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub allowed_origin: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub gemini: GeminiConfig,
    pub pexels: PexelsConfig,
    pub server: ServerConfig,
}

/// Reads a variable, treating an empty value the same as an unset one.
fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}

impl Default for GeminiConfig {
    fn default() -> Self {
        GeminiConfig {
            api_key: None,
            endpoint: DEFAULT_GEMINI_ENDPOINT.to_string(),
        }
    }
}

impl GeminiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let api_key = non_empty_var("GEMINI_API_KEY");
        let endpoint =
            non_empty_var("GEMINI_ENDPOINT").unwrap_or_else(|| DEFAULT_GEMINI_ENDPOINT.to_string());

        GeminiConfig { api_key, endpoint }
    }

    pub fn with_credentials(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

impl Default for PexelsConfig {
    fn default() -> Self {
        PexelsConfig {
            api_key: None,
            endpoint: DEFAULT_PEXELS_ENDPOINT.to_string(),
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl PexelsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let api_key = non_empty_var("PEXELS_API_KEY");
        let endpoint =
            non_empty_var("PEXELS_ENDPOINT").unwrap_or_else(|| DEFAULT_PEXELS_ENDPOINT.to_string());
        let per_page = non_empty_var("PEXELS_PER_PAGE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_PER_PAGE);

        PexelsConfig {
            api_key,
            endpoint,
            per_page,
        }
    }

    pub fn with_credentials(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            allowed_origin: DEFAULT_ALLOWED_ORIGIN.to_string(),
        }
    }
}

impl ServerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let host = non_empty_var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = non_empty_var("PORT")
            .and_then(|port| port.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let allowed_origin =
            non_empty_var("ALLOWED_ORIGIN").unwrap_or_else(|| DEFAULT_ALLOWED_ORIGIN.to_string());

        ServerConfig {
            host,
            port,
            allowed_origin,
        }
    }

    pub fn with_address(mut self, host: impl Into<String>, port: u16) -> Self {
        self.host = host.into();
        self.port = port;
        self
    }

    pub fn with_allowed_origin(mut self, origin: impl Into<String>) -> Self {
        self.allowed_origin = origin.into();
        self
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            gemini: GeminiConfig::default(),
            pexels: PexelsConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        Config {
            gemini: GeminiConfig::from_env(),
            pexels: PexelsConfig::from_env(),
            server: ServerConfig::from_env(),
        }
    }

    pub fn with_gemini(mut self, config: GeminiConfig) -> Self {
        self.gemini = config;
        self
    }

    pub fn with_pexels(mut self, config: PexelsConfig) -> Self {
        self.pexels = config;
        self
    }

    pub fn with_server(mut self, config: ServerConfig) -> Self {
        self.server = config;
        self
    }

    /// Both API keys must be present before the server may start.
    pub fn validate(&self) -> Result<()> {
        let mut missing = Vec::new();
        if self.gemini.api_key.as_deref().map_or(true, str::is_empty) {
            missing.push("GEMINI_API_KEY");
        }
        if self.pexels.api_key.as_deref().map_or(true, str::is_empty) {
            missing.push("PEXELS_API_KEY");
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(SuggestionError::ConfigError(format!(
                "API keys not configured: {}",
                missing.join(", ")
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_public_endpoints() {
        let config = Config::new();
        assert_eq!(config.gemini.endpoint, DEFAULT_GEMINI_ENDPOINT);
        assert_eq!(config.pexels.endpoint, DEFAULT_PEXELS_ENDPOINT);
        assert_eq!(config.pexels.per_page, 3);
        assert_eq!(config.server.port, 8081);
        assert_eq!(config.server.allowed_origin, "http://localhost:3001");
    }

    #[test]
    fn test_validate_requires_both_keys() {
        let err = Config::new()
            .with_gemini(GeminiConfig::new().with_credentials("g-key"))
            .validate()
            .unwrap_err();
        assert!(matches!(err, SuggestionError::ConfigError(_)));
        assert!(err.to_string().contains("PEXELS_API_KEY"));
        assert!(!err.to_string().contains("GEMINI_API_KEY"));

        let err = Config::new().validate().unwrap_err();
        assert!(err.to_string().contains("GEMINI_API_KEY"));
        assert!(err.to_string().contains("PEXELS_API_KEY"));
    }

    #[test]
    fn test_whitespace_value_counts_as_set() {
        env::set_var("IMAGE_SUGGESTION_TEST_BLANK_KEY", "   ");
        env::set_var("IMAGE_SUGGESTION_TEST_EMPTY_KEY", "");
        assert_eq!(
            non_empty_var("IMAGE_SUGGESTION_TEST_BLANK_KEY").as_deref(),
            Some("   ")
        );
        assert_eq!(non_empty_var("IMAGE_SUGGESTION_TEST_EMPTY_KEY"), None);

        let config = Config::new()
            .with_gemini(GeminiConfig::new().with_credentials("   "))
            .with_pexels(PexelsConfig::new().with_credentials("p-key"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_key() {
        let config = Config::new()
            .with_gemini(GeminiConfig::new().with_credentials(""))
            .with_pexels(PexelsConfig::new().with_credentials("p-key"));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_substitute_credentials() {
        let config = Config::new()
            .with_gemini(GeminiConfig::new().with_credentials("test-gemini"))
            .with_pexels(
                PexelsConfig::new()
                    .with_credentials("test-pexels")
                    .with_per_page(5),
            )
            .with_server(ServerConfig::new().with_address("127.0.0.1", 9000));
        assert!(config.validate().is_ok());
        assert_eq!(config.pexels.per_page, 5);
        assert_eq!(config.server.bind_address(), ("127.0.0.1".to_string(), 9000));
    }
}
