//! HTTP transport for the dashserv API.
//!
//! A [`Transport`] performs exactly one request/response round trip and returns
//! the parsed JSON body. [`HttpTransport`] is the `reqwest` implementation; the
//! trait is the seam resource clients are written against.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;
use validator::Validate;

use crate::client::ClientConfig;
use crate::config::DashservConfig;
use crate::envelope::ResponseEnvelope;
use crate::error::{Error, Result};
use crate::request::{ApiRequest, RequestBody};

/// One HTTP round trip per call.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send the request and return the parsed JSON response body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] when no response arrives or the body is not
    /// JSON.
    async fn execute(&self, request: ApiRequest) -> Result<Value>;
}

/// Execute a request and unwrap the provider envelope.
///
/// # Errors
///
/// Propagates transport errors; returns [`Error::Provider`] when the envelope
/// does not report success.
pub async fn execute_enveloped(transport: &dyn Transport, request: ApiRequest) -> Result<Value> {
    let method = request.method();
    let path = request.path();

    let body = transport.execute(request).await?;
    let result = ResponseEnvelope::from_value(body).and_then(ResponseEnvelope::into_result);

    if let Err(err) = &result {
        warn!(%method, path = %path, code = err.error_code(), "dashserv call failed: {err}");
    }

    result
}

/// `reqwest`-backed [`Transport`] with a fixed header map.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: Client,
    base_url: Url,
}

impl HttpTransport {
    /// Build the transport from credentials and HTTP settings.
    ///
    /// The authorization, content-type and accept headers are derived once here
    /// and attached to every request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the base URL, token or HTTP settings are
    /// unusable.
    pub fn new(config: &DashservConfig, http_config: &ClientConfig) -> Result<Self> {
        http_config.validate()?;
        let base_url = config.parse_base_url()?;
        if base_url.cannot_be_a_base() {
            return Err(Error::Config(format!(
                "Base URL `{base_url}` cannot carry a path"
            )));
        }

        let http = Client::builder()
            .default_headers(config.default_headers()?)
            .user_agent(http_config.user_agent.as_str())
            .pool_max_idle_per_host(http_config.pool_max_idle_per_host)
            .gzip(http_config.enable_compression)
            .build()
            .map_err(|err| Error::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self { http, base_url })
    }

    /// Return the base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Assemble the full URL for a request, percent-encoding each path segment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the base URL cannot carry a path.
    pub fn build_url(&self, request: &ApiRequest) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                Error::Config(format!("Base URL `{}` cannot carry a path", self.base_url))
            })?
            .pop_if_empty()
            .extend(request.segments());
        Ok(url)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: ApiRequest) -> Result<Value> {
        let url = self.build_url(&request)?;
        let path = request.path();

        debug!(method = %request.method(), path = %path, "Sending dashserv request");

        let mut builder = self.http.request(request.method().into(), url);
        if !request.query().is_empty() {
            builder = builder.query(request.query());
        }
        match request.body() {
            Some(RequestBody::Json(body)) => builder = builder.json(body),
            Some(RequestBody::Form(pairs)) => builder = builder.form(pairs),
            None => {}
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|err| Error::Transport(format!("Failed to read response for `{path}`: {err}")))?;

        debug!(path = %path, %status, bytes = text.len(), "Received dashserv response");

        if text.trim().is_empty() {
            return Err(Error::Transport(format!(
                "No JSON data received for `{path}` (HTTP {status})"
            )));
        }

        serde_json::from_str(&text).map_err(|err| {
            Error::Transport(format!(
                "Response for `{path}` (HTTP {status}) is not valid JSON: {err}"
            ))
        })
    }
}
