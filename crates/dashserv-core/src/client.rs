//! HTTP client settings shared by all dashserv clients.

use std::borrow::Cow;
use validator::{Validate, ValidationError};

/// Production API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.dashserv.io/v1/product";

/// Default user agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("dashserv-rust/", env!("CARGO_PKG_VERSION"));

/// Default maximum idle connections per host
pub const DEFAULT_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// HTTP client configuration.
///
/// Only connection-level knobs live here. Requests are never retried and carry
/// no client-side deadline.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct ClientConfig {
    /// User agent header value
    #[validate(custom(function = "non_blank"))]
    pub user_agent: String,

    /// Maximum idle connections per host
    pub pool_max_idle_per_host: usize,

    /// Enable response compression
    pub enable_compression: bool,
}

impl ClientConfig {
    /// Create a new client configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            pool_max_idle_per_host: DEFAULT_POOL_MAX_IDLE_PER_HOST,
            enable_compression: true,
        }
    }

    /// Set the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set maximum idle connections per host.
    #[must_use]
    pub const fn with_pool_max_idle(mut self, max: usize) -> Self {
        self.pool_max_idle_per_host = max;
        self
    }

    /// Enable or disable compression.
    #[must_use]
    pub const fn with_compression(mut self, enabled: bool) -> Self {
        self.enable_compression = enabled;
        self
    }
}

fn non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank")
            .with_message(Cow::Borrowed("User agent must not be empty")));
    }
    Ok(())
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_new() {
        let config = ClientConfig::new();
        assert!(config.user_agent.starts_with("dashserv-rust/"));
        assert_eq!(config.pool_max_idle_per_host, DEFAULT_POOL_MAX_IDLE_PER_HOST);
        assert!(config.enable_compression);
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_client_config_builder() {
        let config = ClientConfig::new()
            .with_user_agent("my-panel/2.1")
            .with_pool_max_idle(2)
            .with_compression(false);

        assert_eq!(config.user_agent, "my-panel/2.1");
        assert_eq!(config.pool_max_idle_per_host, 2);
        assert!(!config.enable_compression);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_blank_user_agent_fails_validation() {
        for agent in ["", "  "] {
            let errors = ClientConfig::new().with_user_agent(agent).validate().unwrap_err();
            assert!(errors.field_errors().contains_key("user_agent"));
            assert!(errors.to_string().contains("User agent must not be empty"));
        }
    }
}
