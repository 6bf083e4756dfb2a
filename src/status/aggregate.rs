// ABOUTME: Composes inspect, public IP discovery and geolocation into status rows.
// ABOUTME: Resolves many containers concurrently while keeping listing order.

use super::geolocation::GeoLocator;
use super::public_ip::{OsKind, PublicIpResolver};
use super::StatusRow;
use crate::runtime::{ContainerOps, ContainerState, ExecOps};
use crate::select::ContainerRef;
use futures::StreamExt;
use futures::stream;
use std::time::Duration;

/// Builds one `StatusRow` per container.
pub struct StatusResolver<'a, R, G> {
    runtime: &'a R,
    geo: &'a G,
    exec_timeout: Option<Duration>,
}

impl<'a, R, G> StatusResolver<'a, R, G>
where
    R: ContainerOps + ExecOps,
    G: GeoLocator,
{
    pub fn new(runtime: &'a R, geo: &'a G) -> Self {
        Self {
            runtime,
            geo,
            exec_timeout: None,
        }
    }

    pub fn with_exec_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.exec_timeout = timeout;
        self
    }

    /// Resolve one container.
    ///
    /// Only a running container is exec'd into, and only a valid-looking IP
    /// is geolocated.
    pub async fn resolve(&self, container: &ContainerRef) -> StatusRow {
        let info = match self.runtime.inspect_container(&container.id).await {
            Ok(info) => info,
            Err(e) => {
                tracing::debug!(container = %container.name, error = %e, "inspect failed");
                return StatusRow::retrieval_failed(&container.name);
            }
        };

        if info.state != ContainerState::Running {
            return StatusRow::not_running(info.name, info.state);
        }

        let os = OsKind::from_hint(info.os_hint.as_deref());
        let ip = PublicIpResolver::new(self.runtime)
            .with_exec_timeout(self.exec_timeout)
            .resolve_with_os(&info.id, os)
            .await;

        match ip {
            Some(ip) => {
                let location = self.geo.locate(&ip).await;
                StatusRow::located(info.name, ip, location)
            }
            None => StatusRow::retrieval_failed(info.name),
        }
    }

    /// Resolve every container, at most `concurrency` at a time.
    ///
    /// Rows come back in the order of `containers`, one per entry.
    pub async fn resolve_all(
        &self,
        containers: &[ContainerRef],
        concurrency: usize,
    ) -> Vec<StatusRow> {
        stream::iter(containers)
            .map(|container| self.resolve(container))
            .buffered(concurrency.max(1))
            .collect::<Vec<_>>()
            .await
    }
}
