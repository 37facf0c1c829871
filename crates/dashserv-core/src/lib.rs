//! # dashserv-core
//!
//! Core types and utilities for working with the dashserv.io hosting API.
//!
//! This crate provides error handling, configuration, argument validation and the
//! HTTP transport shared by the resource-group clients.
//!
//! ## Modules
//!
//! - [`error`] - Error taxonomy and provider payload mapping
//! - [`config`] - Credentials and endpoint configuration
//! - [`client`] - HTTP client settings and defaults
//! - [`request`] - Per-call request description
//! - [`transport`] - The [`Transport`] seam and its `reqwest` implementation
//! - [`envelope`] - The provider's `{success, data}` response envelope
//! - [`validate`] - Argument validation for loosely-typed inputs
//! - [`types`] - Closed-set enumerations (intervals, commands, time frames)
//! - [`query`] - Query and form pair builder

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod query;
pub mod request;
pub mod transport;
pub mod types;
pub mod validate;

// Re-export commonly used types
pub use config::DashservConfig;
pub use envelope::ResponseEnvelope;
pub use error::{Error, ErrorKind, Result};
pub use request::{ApiRequest, HttpMethod, RequestBody};
pub use transport::{execute_enveloped, HttpTransport, Transport};
pub use types::{ClosedSet, Command, Interval, TimeFrame};
