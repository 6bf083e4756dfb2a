// ABOUTME: Port-mapping listing for every container.
// ABOUTME: One row per container; inspect errors are shown inline in the row.

use crate::runtime::{ContainerOps, PortBinding};
use crate::select::ContainerRef;
use futures::StreamExt;
use futures::stream;

/// Cell text for a container without host bindings.
pub const NO_PORTS: &str = "No ports exposed";

/// One line of the ports table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortRow {
    pub name: String,
    pub ports: String,
}

/// Render bindings one per line, `host_ip:host_port->container_port`.
pub fn format_bindings(bindings: &[PortBinding]) -> String {
    if bindings.is_empty() {
        return NO_PORTS.to_string();
    }
    bindings
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Inspect each container for its port bindings, at most `concurrency` at a time.
pub async fn list_ports<R: ContainerOps>(
    runtime: &R,
    containers: &[ContainerRef],
    concurrency: usize,
) -> Vec<PortRow> {
    stream::iter(containers)
        .map(|container| async move {
            match runtime.inspect_container(&container.id).await {
                Ok(info) => PortRow {
                    name: info.name,
                    ports: format_bindings(&info.ports),
                },
                Err(e) => {
                    tracing::debug!(container = %container.name, error = %e, "port lookup failed");
                    PortRow {
                        name: container.name.clone(),
                        ports: format!("Error: {e}"),
                    }
                }
            }
        })
        .buffered(concurrency.max(1))
        .collect::<Vec<_>>()
        .await
}
