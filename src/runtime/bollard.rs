// ABOUTME: Bollard-based container runtime implementation.
// ABOUTME: Supports both Docker and Podman via Docker-compatible API.

use crate::runtime::traits::sealed::Sealed;
use crate::runtime::traits::{
    ContainerError, ContainerFilters, ContainerInfo, ContainerOps, ContainerState,
    ContainerSummary, ExecConfig, ExecError, ExecOps, ExecResult, PortBinding,
    RuntimeInfo, RuntimeInfoError, RuntimeMetadata,
};
use crate::runtime::types::{RuntimeEndpoint, RuntimeType};
use crate::types::{ContainerId, ExecId};
use async_trait::async_trait;
use bollard::Docker;
use bollard::container::LogOutput;
use bollard::exec::{StartExecOptions, StartExecResults};
use bollard::models::{ContainerStateStatusEnum, ExecInspectResponse, PortMap};
use bollard::query_parameters::{InspectContainerOptions, ListContainersOptions};
use futures::StreamExt;

/// Seconds bollard waits on a single engine request.
const REQUEST_TIMEOUT_SECS: u64 = 120;

// =============================================================================
// Error Mapping Helpers
// =============================================================================

fn map_container_not_found_error(e: bollard::errors::Error) -> ContainerError {
    match &e {
        bollard::errors::Error::DockerResponseServerError {
            status_code,
            message,
        } if *status_code == 404 => ContainerError::NotFound(message.clone()),
        _ => ContainerError::Runtime(e.to_string()),
    }
}

fn map_exec_create_error(e: bollard::errors::Error) -> ExecError {
    match &e {
        bollard::errors::Error::DockerResponseServerError {
            status_code,
            message,
        } if *status_code == 404 => ExecError::ContainerNotFound(message.clone()),
        bollard::errors::Error::DockerResponseServerError {
            status_code,
            message,
        } if *status_code == 409 => ExecError::ContainerNotRunning(message.clone()),
        _ => ExecError::Runtime(e.to_string()),
    }
}

fn map_exec_not_found_error(e: bollard::errors::Error) -> ExecError {
    match &e {
        bollard::errors::Error::DockerResponseServerError {
            status_code,
            message,
        } if *status_code == 404 => ExecError::ExecNotFound(message.clone()),
        _ => ExecError::Runtime(e.to_string()),
    }
}

// =============================================================================
// Response Conversion Helpers
// =============================================================================

fn container_state(status: Option<ContainerStateStatusEnum>) -> ContainerState {
    status
        .map(|s| match s {
            ContainerStateStatusEnum::CREATED => ContainerState::Created,
            ContainerStateStatusEnum::RUNNING => ContainerState::Running,
            ContainerStateStatusEnum::PAUSED => ContainerState::Paused,
            ContainerStateStatusEnum::RESTARTING => ContainerState::Restarting,
            ContainerStateStatusEnum::REMOVING => ContainerState::Removing,
            ContainerStateStatusEnum::EXITED => ContainerState::Exited,
            ContainerStateStatusEnum::DEAD => ContainerState::Dead,
            _ => ContainerState::Exited,
        })
        .unwrap_or(ContainerState::Exited)
}

/// Flatten the engine's port map into sorted host bindings.
///
/// Exposed ports without any host binding contribute nothing.
fn port_bindings(ports: Option<PortMap>) -> Vec<PortBinding> {
    let mut bindings: Vec<PortBinding> = ports
        .unwrap_or_default()
        .into_iter()
        .flat_map(|(container_port, hosts)| {
            hosts
                .unwrap_or_default()
                .into_iter()
                .map(move |host| PortBinding {
                    container_port: container_port.clone(),
                    host_ip: host.host_ip.unwrap_or_default(),
                    host_port: host.host_port.unwrap_or_default(),
                })
        })
        .collect();
    bindings.sort();
    bindings
}

/// Exit code of a finished exec; -1 if the engine reports it still running
/// or gives no code, so only a confirmed zero counts as success.
fn exit_code(running: bool, code: Option<i64>) -> i64 {
    match code {
        Some(code) if !running => code,
        _ => -1,
    }
}

// =============================================================================
// BollardRuntime
// =============================================================================

/// Container runtime implementation using bollard.
///
/// Supports both Docker and Podman via Docker-compatible API.
pub struct BollardRuntime {
    client: Docker,
    runtime_type: RuntimeType,
}

impl BollardRuntime {
    /// Create a new BollardRuntime from a Docker client.
    pub fn new(client: Docker, runtime_type: RuntimeType) -> Self {
        Self {
            client,
            runtime_type,
        }
    }

    /// Connect to a container runtime at a detected endpoint.
    ///
    /// This only builds the client; use `ping()` to check the engine answers.
    pub fn connect(endpoint: &RuntimeEndpoint) -> Result<Self, RuntimeInfoError> {
        let client = Docker::connect_with_unix(
            &endpoint.socket_path,
            REQUEST_TIMEOUT_SECS,
            bollard::API_DEFAULT_VERSION,
        )
        .map_err(|e| RuntimeInfoError::ConnectionFailed(e.to_string()))?;
        Ok(Self::new(client, endpoint.runtime_type))
    }

    /// Get the runtime type (Docker or Podman).
    pub fn runtime_type(&self) -> RuntimeType {
        self.runtime_type
    }

    async fn exec_inspect_internal(
        &self,
        exec_id: &ExecId,
    ) -> Result<ExecInspectResponse, ExecError> {
        self.client
            .inspect_exec(exec_id.as_str())
            .await
            .map_err(map_exec_not_found_error)
    }

    /// Log an exec that was given up on while its process may still run.
    ///
    /// The engine API has no call to stop an exec'd process, so it is left
    /// to finish on its own.
    async fn report_abandoned_exec(&self, exec_id: &ExecId) {
        match self.exec_inspect_internal(exec_id).await {
            Ok(details) if details.running.unwrap_or(false) => tracing::warn!(
                exec = %exec_id,
                pid = ?details.pid,
                "exec timed out; process is still running in the container"
            ),
            Ok(_) => {}
            Err(e) => tracing::debug!(exec = %exec_id, error = %e, "could not inspect timed-out exec"),
        }
    }
}

// Implement Sealed trait to allow runtime trait implementations
impl Sealed for BollardRuntime {}

#[async_trait]
impl RuntimeInfo for BollardRuntime {
    async fn info(&self) -> Result<RuntimeMetadata, RuntimeInfoError> {
        let info = self
            .client
            .info()
            .await
            .map_err(|e| RuntimeInfoError::ConnectionFailed(e.to_string()))?;

        let name = match self.runtime_type {
            RuntimeType::Docker => "Docker".to_string(),
            RuntimeType::Podman => "Podman".to_string(),
        };

        Ok(RuntimeMetadata {
            name,
            version: info.server_version.unwrap_or_default(),
            os: info.operating_system.unwrap_or_default(),
            arch: info.architecture.unwrap_or_default(),
        })
    }

    async fn ping(&self) -> Result<(), RuntimeInfoError> {
        self.client
            .ping()
            .await
            .map_err(|e| RuntimeInfoError::ConnectionFailed(e.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl ContainerOps for BollardRuntime {
    async fn inspect_container(&self, id: &ContainerId) -> Result<ContainerInfo, ContainerError> {
        let details = self
            .client
            .inspect_container(id.as_str(), None::<InspectContainerOptions>)
            .await
            .map_err(map_container_not_found_error)?;

        let state = container_state(details.state.as_ref().and_then(|s| s.status));
        let ports = port_bindings(details.network_settings.and_then(|n| n.ports));

        Ok(ContainerInfo {
            id: id.clone(),
            name: details
                .name
                .unwrap_or_default()
                .trim_start_matches('/')
                .to_string(),
            state,
            os_hint: details.platform.filter(|p| !p.is_empty()),
            ports,
        })
    }

    async fn list_containers(
        &self,
        filters: &ContainerFilters,
    ) -> Result<Vec<ContainerSummary>, ContainerError> {
        let opts = ListContainersOptions {
            all: filters.all,
            ..Default::default()
        };

        let containers = self
            .client
            .list_containers(Some(opts))
            .await
            .map_err(|e| ContainerError::Runtime(e.to_string()))?;

        Ok(containers
            .into_iter()
            .map(|c| {
                let name = c
                    .names
                    .unwrap_or_default()
                    .first()
                    .map(|n| n.trim_start_matches('/').to_string())
                    .unwrap_or_default();

                ContainerSummary {
                    id: ContainerId::new(c.id.unwrap_or_default()),
                    name,
                }
            })
            .collect())
    }
}

#[async_trait]
impl ExecOps for BollardRuntime {
    async fn exec(
        &self,
        container: &ContainerId,
        config: &ExecConfig,
    ) -> Result<ExecResult, ExecError> {
        let exec_id = self.exec_create(container, config).await?;

        let Some(limit) = config.timeout else {
            return self.exec_start(&exec_id).await;
        };

        match tokio::time::timeout(limit, self.exec_start(&exec_id)).await {
            Ok(result) => result,
            Err(_) => {
                self.report_abandoned_exec(&exec_id).await;
                Err(ExecError::TimedOut(limit))
            }
        }
    }

    async fn exec_create(
        &self,
        container: &ContainerId,
        config: &ExecConfig,
    ) -> Result<ExecId, ExecError> {
        let opts = bollard::models::ExecConfig {
            cmd: Some(config.cmd.clone()),
            attach_stdin: Some(false),
            attach_stdout: Some(true),
            attach_stderr: Some(true),
            tty: Some(false),
            ..Default::default()
        };

        let response = self
            .client
            .create_exec(container.as_str(), opts)
            .await
            .map_err(map_exec_create_error)?;

        Ok(ExecId::new(response.id))
    }

    async fn exec_start(&self, exec_id: &ExecId) -> Result<ExecResult, ExecError> {
        // Attached mode: the call returns once the output stream closes,
        // which is when the process has exited.
        let opts = StartExecOptions {
            detach: false,
            ..Default::default()
        };

        let started = self
            .client
            .start_exec(exec_id.as_str(), Some(opts))
            .await
            .map_err(map_exec_not_found_error)?;

        let mut result = ExecResult::default();

        if let StartExecResults::Attached { mut output, .. } = started {
            while let Some(item) = output.next().await {
                match item {
                    Ok(LogOutput::StdOut { message }) => {
                        result.combined.extend_from_slice(&message);
                    }
                    Ok(LogOutput::StdErr { message }) => {
                        result.stderr.extend_from_slice(&message);
                        result.combined.extend_from_slice(&message);
                    }
                    // Some engines send one undifferentiated stream.
                    Ok(LogOutput::Console { message }) => {
                        result.combined.extend_from_slice(&message);
                    }
                    Ok(_) => {}
                    Err(e) => {
                        return Err(ExecError::Failed(e.to_string()));
                    }
                }
            }
        }

        // Get exit code from inspect
        let details = self.exec_inspect_internal(exec_id).await?;
        let running = details.running.unwrap_or(false);
        if running {
            tracing::warn!(exec = %exec_id, "exec output closed while process still running");
        }
        result.exit_code = exit_code(running, details.exit_code);

        Ok(result)
    }
}
