// ABOUTME: Container runtime access for Docker and Podman.
// ABOUTME: Detects the local engine socket and exposes capability traits over bollard.

mod bollard;
mod detection;
mod error;
#[cfg(test)]
pub(crate) mod fake;
pub mod traits;
mod types;

pub use self::bollard::BollardRuntime;
pub use detection::{DetectionError, detect_local};
pub use error::{RuntimeError, RuntimeErrorKind};
pub use traits::{
    ContainerError, ContainerFilters, ContainerInfo, ContainerOps, ContainerState,
    ContainerSummary, ExecConfig, ExecError, ExecOps, ExecResult, PortBinding, RuntimeMetadata,
    printable_ascii,
};
pub use traits::{RuntimeInfo as RuntimeInfoTrait, RuntimeInfoError};
pub use types::{RuntimeConfig, RuntimeEndpoint, RuntimeType};

/// Detect the local engine and build a client for it.
pub fn connect_local(config: &RuntimeConfig) -> Result<BollardRuntime, RuntimeError> {
    let endpoint = detect_local(config)?;
    tracing::debug!(
        runtime = %endpoint.runtime_type,
        socket = %endpoint.socket_path,
        "detected container runtime"
    );
    Ok(BollardRuntime::connect(&endpoint)?)
}
