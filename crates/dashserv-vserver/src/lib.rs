//! Virtual-server operations for the dashserv.io API.
//!
//! Provides the [`VServerClient`] resource group: listing and inspecting
//! vservers, power actions, resource upgrades, reinstallation, backups,
//! scheduled tasks and usage graphs.

#![deny(missing_docs)]

pub mod client;
pub mod models;

pub use client::VServerClient;
pub use models::{
    CreateBackupRequest, ReinstallRequest, ScheduledTaskParams, UpgradeRequest, UsageGraphParams,
};

/// Convenient result alias that reuses the shared dashserv error type.
pub type Result<T> = dashserv_core::Result<T>;
