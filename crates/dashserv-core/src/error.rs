//! Error types for dashserv operations.
//!
//! Every failure surfaces as one [`Error`] value carrying a kind discriminant
//! ([`ErrorKind`]), a message and, for provider failures, the original payload.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Main error type for dashserv operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Missing or invalid client configuration (token, base URL, HTTP settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// A caller-supplied argument was missing, mistyped or outside its closed set
    #[error("Validation error: {0}")]
    Validation(String),

    /// The provider answered with `success: false`
    #[error("Provider error: {message}")]
    Provider {
        /// Human-readable message extracted from the payload
        message: String,
        /// The provider's original `data` payload
        data: Value,
    },

    /// No response, or a response that is not a JSON envelope
    #[error("Transport error: {0}")]
    Transport(String),
}

/// Specialized result type for dashserv operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Discriminant for the four failure families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// See [`Error::Config`]
    Configuration,
    /// See [`Error::Validation`]
    Validation,
    /// See [`Error::Provider`]
    Provider,
    /// See [`Error::Transport`]
    Transport,
}

/// Structured error response for serialization.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ErrorResponse {
    /// Error details
    pub error: ErrorDetail,
}

/// Error detail structure.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ErrorDetail {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Provider payload, when there is one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl Error {
    /// Wrap a provider `data` payload from a failed envelope.
    ///
    /// The message is taken from `data.message` when present, from `data` itself
    /// when it is a string, and from its JSON text otherwise.
    #[must_use]
    pub fn provider(data: Value) -> Self {
        let message = match &data {
            Value::String(text) => text.clone(),
            Value::Object(map) => match map.get("message") {
                Some(Value::String(text)) => text.clone(),
                _ => data.to_string(),
            },
            Value::Null => "Provider reported failure without details".to_string(),
            other => other.to_string(),
        };

        Self::Provider { message, data }
    }

    /// Returns the failure family of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Config(_) => ErrorKind::Configuration,
            Self::Validation(_) => ErrorKind::Validation,
            Self::Provider { .. } => ErrorKind::Provider,
            Self::Transport(_) => ErrorKind::Transport,
        }
    }

    /// Returns the error code for this error type.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Provider { .. } => "PROVIDER_ERROR",
            Self::Transport(_) => "TRANSPORT_ERROR",
        }
    }

    /// Returns the provider payload that caused this error, if any.
    #[must_use]
    pub const fn cause(&self) -> Option<&Value> {
        match self {
            Self::Provider { data, .. } => Some(data),
            _ => None,
        }
    }

    /// Converts the error into an [`ErrorResponse`].
    #[must_use]
    pub fn into_error_response(self) -> ErrorResponse {
        let code = self.error_code().to_string();
        let message = self.to_string();
        let details = match self {
            Self::Provider { data, .. } => Some(data),
            _ => None,
        };

        ErrorResponse {
            error: ErrorDetail {
                code,
                message,
                details,
            },
        }
    }
}

// Conversions from external error types
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() {
            Self::Transport(format!("No response received: {err}"))
        } else {
            Self::Transport(err.to_string())
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::Config(format!("Invalid base URL: {err}"))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Transport(format!("Invalid JSON: {err}"))
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::Config(format!("Invalid configuration: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_codes() {
        assert_eq!(Error::Config("x".into()).error_code(), "CONFIG_ERROR");
        assert_eq!(Error::Validation("x".into()).error_code(), "VALIDATION_ERROR");
        assert_eq!(Error::provider(json!("x")).error_code(), "PROVIDER_ERROR");
        assert_eq!(Error::Transport("x".into()).error_code(), "TRANSPORT_ERROR");
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(Error::Config("x".into()).kind(), ErrorKind::Configuration);
        assert_eq!(Error::Validation("x".into()).kind(), ErrorKind::Validation);
        assert_eq!(Error::provider(json!(null)).kind(), ErrorKind::Provider);
        assert_eq!(Error::Transport("x".into()).kind(), ErrorKind::Transport);
    }

    #[test]
    fn test_provider_message_from_string() {
        let err = Error::provider(json!("vserver is locked"));
        assert_eq!(err.to_string(), "Provider error: vserver is locked");
        assert_eq!(err.cause(), Some(&json!("vserver is locked")));
    }

    #[test]
    fn test_provider_message_from_object() {
        let err = Error::provider(json!({"message": "Invalid image", "code": 12}));
        assert_eq!(err.to_string(), "Provider error: Invalid image");

        let err = Error::provider(json!({"code": 12}));
        assert_eq!(err.to_string(), r#"Provider error: {"code":12}"#);
    }

    #[test]
    fn test_cause_only_for_provider() {
        assert!(Error::Validation("x".into()).cause().is_none());
        assert!(Error::Transport("x".into()).cause().is_none());
    }

    #[test]
    fn test_into_error_response() {
        let response = Error::provider(json!("reason")).into_error_response();
        assert_eq!(response.error.code, "PROVIDER_ERROR");
        assert_eq!(response.error.message, "Provider error: reason");
        assert_eq!(response.error.details, Some(json!("reason")));

        let json = serde_json::to_string(&Error::Config("bad".into()).into_error_response())
            .unwrap();
        assert!(json.contains("CONFIG_ERROR"));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_from_url_parse_error() {
        let err = url::Url::parse("not a url").unwrap_err();
        let err: Error = err.into();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_from_serde_json_error() {
        let err = serde_json::from_str::<Value>("<html>").unwrap_err();
        let err: Error = err.into();
        assert!(matches!(err, Error::Transport(_)));
    }

    #[test]
    fn test_error_partial_eq() {
        assert_eq!(Error::Validation("a".into()), Error::Validation("a".into()));
        assert_ne!(Error::Validation("a".into()), Error::Validation("b".into()));
    }
}
