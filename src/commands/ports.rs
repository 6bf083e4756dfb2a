// ABOUTME: `--ports` command: published port bindings of every container.
// ABOUTME: No prompt; one table row per container.

use super::runtime_connection::connect_to_runtime;
use dockip::config::Settings;
use dockip::error::Result;
use dockip::output;
use dockip::ports::list_ports;
use dockip::runtime::{ContainerFilters, ContainerOps};
use dockip::select::ContainerDirectory;

pub async fn ports(settings: &Settings) -> Result<()> {
    let runtime = connect_to_runtime(settings).await?;

    let directory =
        ContainerDirectory::from_summaries(runtime.list_containers(&ContainerFilters::all()).await?);
    if directory.is_empty() {
        println!("No containers found.");
        return Ok(());
    }

    let rows = list_ports(&runtime, directory.containers(), settings.concurrency).await;
    println!("{}", output::ports_table(&rows));
    Ok(())
}
