//! Configuration structures for dashserv clients.
//!
//! A [`DashservConfig`] holds the bearer token and the API base URL. The token is
//! kept in a [`SecretString`] and is only exposed once, when the fixed header map
//! is derived for the lifetime of the client.

use crate::client::DEFAULT_BASE_URL;
use crate::Error;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use url::Url;
use validator::Validate;

/// Configuration for a dashserv client instance.
#[derive(Debug, Deserialize, Validate)]
pub struct DashservConfig {
    /// Bearer token issued by the dashserv panel
    token: SecretString,

    /// API base URL; every request path is appended to it
    #[validate(url)]
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl DashservConfig {
    /// Create a configuration for the production API.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the token is empty or blank.
    pub fn new(token: impl Into<String>) -> Result<Self, Error> {
        let config = Self {
            token: SecretString::from(token.into()),
            base_url: default_base_url(),
        };
        config.check()?;
        Ok(config)
    }

    /// Point the client at a different API base URL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the URL does not validate.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Result<Self, Error> {
        self.base_url = base_url.into();
        self.check()?;
        Ok(self)
    }

    /// Validate the token and the base URL.
    ///
    /// Deserialized configurations should be checked before use.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] describing the first problem found.
    pub fn check(&self) -> Result<(), Error> {
        if self.token.expose_secret().trim().is_empty() {
            return Err(Error::Config(
                "Missing bearer token; create the client with Dashserv::new(\"TOKEN\")".to_string(),
            ));
        }

        self.validate()?;
        Ok(())
    }

    /// Parse the base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn parse_base_url(&self) -> Result<Url, Error> {
        Ok(Url::parse(&self.base_url)?)
    }

    /// Derive the header map attached to every request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the token is not a valid header value.
    pub fn default_headers(&self) -> Result<HeaderMap, Error> {
        let mut authorization =
            HeaderValue::from_str(&format!("Bearer {}", self.token.expose_secret().trim()))
                .map_err(|_| {
                    Error::Config("Bearer token contains invalid header characters".to_string())
                })?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, authorization);
        Ok(headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_production_url() {
        let config = DashservConfig::new("token-123").unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(
            config.parse_base_url().unwrap().as_str(),
            "https://api.dashserv.io/v1/product"
        );
    }

    #[test]
    fn test_blank_token_rejected() {
        for token in ["", "   "] {
            let err = DashservConfig::new(token).unwrap_err();
            assert!(matches!(err, Error::Config(_)));
            assert!(err.to_string().contains("Missing bearer token"));
        }
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let err = DashservConfig::new("token")
            .unwrap()
            .with_base_url("not a url")
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("Invalid configuration"));
        assert!(err.to_string().contains("base_url"));
    }

    #[test]
    fn test_unchecked_base_url_fails_to_parse() {
        let config: DashservConfig =
            serde_json::from_str(r#"{"token": "abc", "base_url": "::nope::"}"#).unwrap();
        let err = config.parse_base_url().unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("Invalid base URL"));
    }

    #[test]
    fn test_default_headers() {
        let headers = DashservConfig::new("abc").unwrap().default_headers().unwrap();
        assert_eq!(headers[AUTHORIZATION], "Bearer abc");
        assert!(headers[AUTHORIZATION].is_sensitive());
        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert_eq!(headers[ACCEPT], "application/json");
    }

    #[test]
    fn test_token_with_newline_rejected() {
        let err = DashservConfig::new("abc\ndef")
            .unwrap()
            .default_headers()
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_token_not_in_debug_output() {
        let config = DashservConfig::new("super-secret").unwrap();
        assert!(!format!("{config:?}").contains("super-secret"));
    }

    #[test]
    fn test_deserialize_defaults_base_url() {
        let config: DashservConfig = serde_json::from_str(r#"{"token": "abc"}"#).unwrap();
        config.check().unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }
}
