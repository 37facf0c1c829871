//! Find a vserver by name and boot it.
//!
//! ```text
//! DASHSERV_TOKEN=... cargo run -p dashserv --example start_server -- milrato
//! ```

use anyhow::{bail, Context, Result};
use dashserv::Dashserv;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let token = std::env::var("DASHSERV_TOKEN").context("DASHSERV_TOKEN is not set")?;
    let name = std::env::args().nth(1).unwrap_or_else(|| "milrato".to_string());

    let api = Dashserv::new(token)?;
    let servers = api.vserver().list_servers().await?;

    let Some(server) = servers
        .as_array()
        .and_then(|list| list.iter().find(|s| s["name"] == name.as_str()))
    else {
        bail!("no vserver named `{name}`");
    };

    let task = api.vserver().start(server["uuid"].clone()).await?;
    println!("start requested, task: {task}");
    Ok(())
}
