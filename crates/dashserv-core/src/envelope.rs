//! The provider's `{success, data}` response envelope.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result};

/// Wrapper returned by every dashserv endpoint.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ResponseEnvelope {
    /// Success flag as sent by the provider; see [`ResponseEnvelope::is_success`]
    #[serde(default)]
    pub success: Value,
    /// Payload on success, error detail on failure
    #[serde(default)]
    pub data: Value,
}

impl ResponseEnvelope {
    /// Interpret a parsed response body as an envelope.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] when the body is not a JSON object.
    pub fn from_value(body: Value) -> Result<Self> {
        if !body.is_object() {
            return Err(Error::Transport(format!(
                "Expected a response envelope, got {body}"
            )));
        }

        serde_json::from_value(body)
            .map_err(|err| Error::Transport(format!("Malformed response envelope: {err}")))
    }

    /// Whether the provider reported success.
    ///
    /// A missing flag, `null`, `false`, `0` and `""` all count as failure.
    #[must_use]
    pub fn is_success(&self) -> bool {
        match &self.success {
            Value::Null => false,
            Value::Bool(flag) => *flag,
            Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
            Value::String(text) => !text.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }

    /// Resolve to `data` on success, or a provider error wrapping `data`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Provider`] when the envelope does not report success.
    pub fn into_result(self) -> Result<Value> {
        if self.is_success() {
            Ok(self.data)
        } else {
            Err(Error::provider(self.data))
        }
    }
}
