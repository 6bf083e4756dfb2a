// ABOUTME: Container operations trait for container runtimes.
// ABOUTME: Read-only listing and inspection of containers.

use super::sealed::Sealed;
use super::shared_types::ContainerInfo;
use crate::types::ContainerId;
use async_trait::async_trait;

/// Read-only container queries.
#[async_trait]
pub trait ContainerOps: Sealed + Send + Sync {
    /// Get detailed information about a container.
    async fn inspect_container(&self, id: &ContainerId) -> Result<ContainerInfo, ContainerError>;

    /// List containers matching the given filters, in engine order.
    async fn list_containers(
        &self,
        filters: &ContainerFilters,
    ) -> Result<Vec<ContainerSummary>, ContainerError>;
}

/// Filters for listing containers.
#[derive(Debug, Clone, Default)]
pub struct ContainerFilters {
    /// Include stopped containers.
    pub all: bool,
}

impl ContainerFilters {
    /// Every container, running or not.
    pub fn all() -> Self {
        Self { all: true }
    }
}

/// Summary information about a container.
#[derive(Debug, Clone)]
pub struct ContainerSummary {
    /// Container ID.
    pub id: ContainerId,
    /// Container name, without the engine's leading `/`.
    pub name: String,
}

/// Errors from container operations.
#[derive(Debug, thiserror::Error)]
pub enum ContainerError {
    #[error("container not found: {0}")]
    NotFound(String),

    #[error("runtime error: {0}")]
    Runtime(String),
}
