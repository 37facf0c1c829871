//! # dashserv
//!
//! Asynchronous client for the [dashserv.io](https://dashserv.io) hosting API.
//!
//! ```no_run
//! # async fn run() -> dashserv::Result<()> {
//! let api = dashserv::Dashserv::new("TOKEN")?;
//! let servers = api.vserver().list_servers().await?;
//! println!("{servers}");
//! # Ok(())
//! # }
//! ```
//!
//! Every call validates its arguments before touching the network and resolves
//! with the `data` part of the provider's `{success, data}` envelope. Failures
//! are reported through [`Error`], whose [`kind`](Error::kind) tells
//! configuration, validation, provider and transport problems apart.

#![deny(missing_docs)]

use std::sync::Arc;
use tracing::debug;

pub use dashserv_core::client::ClientConfig;
pub use dashserv_core::{
    ApiRequest, ClosedSet, Command, DashservConfig, Error, ErrorKind, HttpMethod, HttpTransport,
    Interval, RequestBody, Result, TimeFrame, Transport,
};
pub use dashserv_vserver::VServerClient;

/// Builder for [`Dashserv`].
#[derive(Debug, Clone)]
pub struct DashservBuilder {
    token: String,
    base_url: Option<String>,
    http_config: ClientConfig,
}

impl DashservBuilder {
    /// Create a builder with the bearer token.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: None,
            http_config: ClientConfig::default(),
        }
    }

    /// Override the API base URL (defaults to the production endpoint).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Override the HTTP client configuration.
    #[must_use]
    pub fn with_http_config(mut self, config: ClientConfig) -> Self {
        self.http_config = config;
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for a blank token, an invalid base URL, a blank
    /// user agent or HTTP settings `reqwest` refuses.
    pub fn build(self) -> Result<Dashserv> {
        let mut config = DashservConfig::new(self.token)?;
        if let Some(base_url) = self.base_url {
            config = config.with_base_url(base_url)?;
        }

        let transport = HttpTransport::new(&config, &self.http_config)?;
        debug!(base_url = %transport.base_url(), "dashserv client ready");
        Ok(Dashserv::with_transport(Arc::new(transport)))
    }
}

/// Entry point of the API: holds the credentials and exposes resource groups.
#[derive(Clone)]
pub struct Dashserv {
    vserver: VServerClient,
}

impl Dashserv {
    /// Create a client for the production API.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the token is missing or blank.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        DashservBuilder::new(token).build()
    }

    /// Start a builder with the bearer token.
    #[must_use]
    pub fn builder(token: impl Into<String>) -> DashservBuilder {
        DashservBuilder::new(token)
    }

    /// Create a client on top of a custom [`Transport`].
    #[must_use]
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            vserver: VServerClient::new(transport),
        }
    }

    /// Virtual-server operations.
    #[must_use]
    pub const fn vserver(&self) -> &VServerClient {
        &self.vserver
    }
}
