// ABOUTME: Default command: pick containers and show their public IP and location.
// ABOUTME: Prompts for "All" or one container, then prints the status table.

use super::runtime_connection::connect_to_runtime;
use dockip::config::Settings;
use dockip::error::Result;
use dockip::output;
use dockip::runtime::{ContainerFilters, ContainerOps};
use dockip::select::{ContainerDirectory, prompt_selection};
use dockip::status::{HttpGeoLocator, StatusResolver};

pub async fn status(settings: &Settings) -> Result<()> {
    let runtime = connect_to_runtime(settings).await?;

    let directory =
        ContainerDirectory::from_summaries(runtime.list_containers(&ContainerFilters::all()).await?);
    if directory.is_empty() {
        println!("No containers found.");
        return Ok(());
    }

    let selection = prompt_selection(&directory)?;
    let targets = directory.targets(selection);

    let geo = HttpGeoLocator::new(settings.geo_url.as_str(), settings.geo_timeout)?;
    let rows = StatusResolver::new(&runtime, &geo)
        .with_exec_timeout(settings.exec_timeout)
        .resolve_all(&targets, settings.concurrency)
        .await;

    println!("{}", output::status_table(&rows));
    Ok(())
}
