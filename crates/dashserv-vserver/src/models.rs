//! Request models for the vserver endpoints.
//!
//! These are built from already-validated arguments; responses are passed
//! through as raw JSON because their shape is provider-defined.

use dashserv_core::query::QueryParams;
use dashserv_core::types::{ClosedSet, Command, Interval, TimeFrame};
use serde::Serialize;
use serde_json::Number;

/// Body of `PUT /vserver/{id}/upgrade`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct UpgradeRequest {
    /// vserver UUID (repeated from the path).
    pub uuid: String,
    /// New vCPU count.
    pub cpu: Number,
    /// New RAM in GB.
    pub ram: Number,
    /// New disk size in GB.
    pub disk: Number,
}

/// Body of `POST /vserver/{id}/reinstall`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ReinstallRequest {
    /// Image identifier, as listed by the image endpoint.
    pub image: String,
}

/// Body of `POST /vserver/{id}/backup`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CreateBackupRequest {
    /// Backup label.
    pub name: String,
}

/// Form parameters for `POST /vserver/{id}/tasks/scheduled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTaskParams {
    /// Recurrence.
    pub interval: Interval,
    /// Action to run.
    pub command: Command,
    /// First execution as a Unix timestamp (seconds); omitted when `None`.
    pub next_execution: Option<i64>,
}

impl ScheduledTaskParams {
    /// Convert the parameters into form pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut params = QueryParams::new();
        params.push("interval", self.interval.as_str());
        params.push("command", self.command.as_str());
        params.push_opt("nextexecution", self.next_execution);

        params.into_pairs()
    }
}

/// Query parameters for `GET /vserver/{id}/stats`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsageGraphParams {
    /// Window of the graphs.
    pub timeframe: TimeFrame,
}

impl UsageGraphParams {
    /// Convert the parameters into URL query pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut params = QueryParams::new();
        params.push("timeframe", self.timeframe.as_str());

        params.into_pairs()
    }
}
