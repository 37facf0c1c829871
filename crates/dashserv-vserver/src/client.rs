//! Asynchronous vserver client implementation.
//!
//! Every operation validates its arguments first, then issues exactly one
//! request and unwraps the provider envelope. Arguments are taken as
//! `impl Into<Value>` so that absent or mistyped input is rejected with a
//! validation error instead of reaching the network.

use crate::models::{
    CreateBackupRequest, ReinstallRequest, ScheduledTaskParams, UpgradeRequest, UsageGraphParams,
};
use crate::Result;
use dashserv_core::transport::{execute_enveloped, Transport};
use dashserv_core::validate::{
    optional_past_timestamp, require_choice, require_positive_number, require_segment,
    require_str,
};
use dashserv_core::{ApiRequest, Command, Interval, TimeFrame};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

const VSERVER: &str = "vserver";

/// Asynchronous client for the vserver resource group.
#[derive(Clone)]
pub struct VServerClient {
    transport: Arc<dyn Transport>,
}

impl VServerClient {
    /// Create a client on top of an existing transport.
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// List all vservers in the account.
    pub async fn list_servers(&self) -> Result<Value> {
        self.call(ApiRequest::get([VSERVER])).await
    }

    /// Fetch a single vserver.
    pub async fn get_server(&self, server_id: impl Into<Value>) -> Result<Value> {
        let id = server_id_arg(server_id)?;
        self.call(ApiRequest::get([VSERVER, id.as_str()])).await
    }

    /// List the images available for reinstallation.
    pub async fn list_images(&self) -> Result<Value> {
        self.call(ApiRequest::get([VSERVER, "image"])).await
    }

    /// Fetch status and live stats.
    ///
    /// When `data.locked` is not `false` it holds the reason why actions are
    /// currently refused; the lock clears on its own.
    pub async fn get_status(&self, server_id: impl Into<Value>) -> Result<Value> {
        let id = server_id_arg(server_id)?;
        self.call(ApiRequest::get([VSERVER, id.as_str(), "status"]))
            .await
    }

    /// Change CPU, RAM (GB) and disk (GB) of a configurable vserver.
    ///
    /// The vserver restarts on its own when the upgrade succeeds.
    pub async fn change_resources(
        &self,
        server_id: impl Into<Value>,
        cpu: impl Into<Value>,
        ram: impl Into<Value>,
        disk: impl Into<Value>,
    ) -> Result<Value> {
        let id = server_id_arg(server_id)?;
        let request = UpgradeRequest {
            cpu: require_positive_number("cpu", &cpu.into())?,
            ram: require_positive_number("ram", &ram.into())?,
            disk: require_positive_number("disk", &disk.into())?,
            uuid: id,
        };

        info!(server_id = %request.uuid, cpu = %request.cpu, ram = %request.ram, disk = %request.disk, "Requesting vserver upgrade");
        let body = to_body(&request)?;
        self.call(ApiRequest::put([VSERVER, request.uuid.as_str(), "upgrade"]).with_json(body))
            .await
    }

    /// Boot the vserver. Resolves with a task id to monitor.
    pub async fn start(&self, server_id: impl Into<Value>) -> Result<Value> {
        self.power_action(server_id, "start").await
    }

    /// Shut the vserver down with an ACPI signal.
    pub async fn shutdown(&self, server_id: impl Into<Value>) -> Result<Value> {
        self.power_action(server_id, "shutdown").await
    }

    /// Forcefully stop the vserver (pulls the plug; may lose data).
    pub async fn stop(&self, server_id: impl Into<Value>) -> Result<Value> {
        self.power_action(server_id, "stop").await
    }

    /// Gracefully restart: ACPI shutdown, then boot.
    pub async fn restart(&self, server_id: impl Into<Value>) -> Result<Value> {
        self.power_action(server_id, "restart").await
    }

    /// Forcefully reset the vserver (may lose data).
    pub async fn reset(&self, server_id: impl Into<Value>) -> Result<Value> {
        self.power_action(server_id, "reset").await
    }

    /// Reinstall the vserver from an image.
    pub async fn reinstall(
        &self,
        server_id: impl Into<Value>,
        image: impl Into<Value>,
    ) -> Result<Value> {
        let id = server_id_arg(server_id)?;
        let request = ReinstallRequest {
            image: require_str("image", &image.into())?,
        };

        info!(server_id = %id, image = %request.image, "Requesting vserver reinstall");
        let body = to_body(&request)?;
        self.call(ApiRequest::post([VSERVER, id.as_str(), "reinstall"]).with_json(body))
            .await
    }

    /// Reset the root password.
    pub async fn reset_password(&self, server_id: impl Into<Value>) -> Result<Value> {
        let id = server_id_arg(server_id)?;
        self.call(ApiRequest::post([VSERVER, id.as_str(), "password"]))
            .await
    }

    /// List backups.
    pub async fn list_backups(&self, server_id: impl Into<Value>) -> Result<Value> {
        let id = server_id_arg(server_id)?;
        self.call(ApiRequest::get([VSERVER, id.as_str(), "backup"]))
            .await
    }

    /// Create a named backup.
    pub async fn create_backup(
        &self,
        server_id: impl Into<Value>,
        name: impl Into<Value>,
    ) -> Result<Value> {
        let id = server_id_arg(server_id)?;
        let request = CreateBackupRequest {
            name: require_str("name", &name.into())?,
        };

        let body = to_body(&request)?;
        self.call(ApiRequest::post([VSERVER, id.as_str(), "backup"]).with_json(body))
            .await
    }

    /// Delete a backup.
    pub async fn delete_backup(
        &self,
        server_id: impl Into<Value>,
        backup_id: impl Into<Value>,
    ) -> Result<Value> {
        let id = server_id_arg(server_id)?;
        let backup = require_segment("backup_id", &backup_id.into())?;
        self.call(ApiRequest::delete([
            VSERVER,
            id.as_str(),
            "backup",
            backup.as_str(),
        ]))
        .await
    }

    /// Restore a backup onto the vserver.
    pub async fn restore_backup(
        &self,
        server_id: impl Into<Value>,
        backup_id: impl Into<Value>,
    ) -> Result<Value> {
        let id = server_id_arg(server_id)?;
        let backup = require_segment("backup_id", &backup_id.into())?;

        info!(server_id = %id, backup_id = %backup, "Requesting backup restore");
        self.call(ApiRequest::put([
            VSERVER,
            id.as_str(),
            "backup",
            backup.as_str(),
        ]))
        .await
    }

    /// List recent tasks.
    pub async fn list_tasks(&self, server_id: impl Into<Value>) -> Result<Value> {
        let id = server_id_arg(server_id)?;
        self.call(ApiRequest::get([VSERVER, id.as_str(), "tasks"]))
            .await
    }

    /// List scheduled tasks.
    pub async fn list_scheduled_tasks(&self, server_id: impl Into<Value>) -> Result<Value> {
        let id = server_id_arg(server_id)?;
        self.call(ApiRequest::get([VSERVER, id.as_str(), "tasks", "scheduled"]))
            .await
    }

    /// Schedule a recurring task.
    ///
    /// `interval` must be an [`Interval`] wire name and `command` a [`Command`]
    /// wire name. `next_execution` is an optional Unix timestamp in seconds
    /// (pass `None::<i64>` to omit it) and may not lie in the future.
    pub async fn create_scheduled_task(
        &self,
        server_id: impl Into<Value>,
        interval: impl Into<Value>,
        command: impl Into<Value>,
        next_execution: impl Into<Value>,
    ) -> Result<Value> {
        let id = server_id_arg(server_id)?;
        let params = ScheduledTaskParams {
            interval: require_choice::<Interval>("interval", &interval.into())?,
            command: require_choice::<Command>("command", &command.into())?,
            next_execution: optional_past_timestamp("next_execution", &next_execution.into())?,
        };

        self.call(
            ApiRequest::post([VSERVER, id.as_str(), "tasks", "scheduled"])
                .with_form(params.to_pairs()),
        )
        .await
    }

    /// Delete a scheduled task.
    pub async fn delete_scheduled_task(
        &self,
        server_id: impl Into<Value>,
        task_id: impl Into<Value>,
    ) -> Result<Value> {
        let id = server_id_arg(server_id)?;
        let task = require_str("task_id", &task_id.into())?;
        self.call(
            ApiRequest::delete([VSERVER, id.as_str(), "tasks", "scheduled"])
                .with_form(vec![("taskid", task)]),
        )
        .await
    }

    /// Fetch usage graphs for a [`TimeFrame`] wire name (`hour`, `day`, ...).
    pub async fn get_usage_graphs(
        &self,
        server_id: impl Into<Value>,
        timeframe: impl Into<Value>,
    ) -> Result<Value> {
        let id = server_id_arg(server_id)?;
        let params = UsageGraphParams {
            timeframe: require_choice::<TimeFrame>("timeframe", &timeframe.into())?,
        };

        self.call(ApiRequest::get([VSERVER, id.as_str(), "stats"]).with_query(params.to_pairs()))
            .await
    }

    async fn power_action(
        &self,
        server_id: impl Into<Value>,
        action: &'static str,
    ) -> Result<Value> {
        let id = server_id_arg(server_id)?;

        info!(server_id = %id, action, "Requesting vserver power action");
        self.call(ApiRequest::post([VSERVER, id.as_str(), "actions", action]))
            .await
    }

    async fn call(&self, request: ApiRequest) -> Result<Value> {
        execute_enveloped(self.transport.as_ref(), request).await
    }
}

fn server_id_arg(server_id: impl Into<Value>) -> Result<String> {
    require_segment("server_id", &server_id.into())
}

fn to_body<T: Serialize>(request: &T) -> Result<Value> {
    Ok(serde_json::to_value(request)?)
}
