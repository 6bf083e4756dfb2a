// ABOUTME: Shared types used across runtime trait definitions.
// ABOUTME: ContainerInfo, ContainerState, PortBinding, ExecConfig, ExecResult, etc.

use crate::types::ContainerId;
use std::fmt;
use std::time::Duration;

/// Information about a container, as returned by inspect.
#[derive(Debug, Clone)]
pub struct ContainerInfo {
    /// Container ID.
    pub id: ContainerId,
    /// Container name, without the engine's leading `/`.
    pub name: String,
    /// Current state.
    pub state: ContainerState,
    /// Platform reported by the engine (e.g. "linux", "windows").
    pub os_hint: Option<String>,
    /// Published port bindings, sorted by container port.
    pub ports: Vec<PortBinding>,
}

/// Container state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerState {
    Created,
    Running,
    Paused,
    Restarting,
    Removing,
    Exited,
    Dead,
}

impl ContainerState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContainerState::Created => "created",
            ContainerState::Running => "running",
            ContainerState::Paused => "paused",
            ContainerState::Restarting => "restarting",
            ContainerState::Removing => "removing",
            ContainerState::Exited => "exited",
            ContainerState::Dead => "dead",
        }
    }
}

impl fmt::Display for ContainerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A host binding for an exposed container port.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct PortBinding {
    /// Container port and protocol (e.g. "80/tcp").
    pub container_port: String,
    /// Host address the port is bound to.
    pub host_ip: String,
    /// Host port.
    pub host_port: String,
}

impl fmt::Display for PortBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}->{}",
            self.host_ip, self.host_port, self.container_port
        )
    }
}

/// Runtime metadata.
#[derive(Debug, Clone)]
pub struct RuntimeMetadata {
    /// Runtime name (e.g., "Docker", "Podman").
    pub name: String,
    /// Runtime version.
    pub version: String,
    /// Operating system.
    pub os: String,
    /// Architecture.
    pub arch: String,
}

/// Exec configuration for running commands in containers.
///
/// Stdout and stderr are always attached and no TTY is allocated, so the
/// two streams stay separable.
#[derive(Debug, Clone, Default)]
pub struct ExecConfig {
    /// Command and arguments to run.
    pub cmd: Vec<String>,
    /// Stop waiting for the process after this long.
    pub timeout: Option<Duration>,
}

impl ExecConfig {
    /// Capture stdout and stderr of `cmd`, with no timeout.
    pub fn command<I, S>(cmd: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cmd: cmd.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Result of an exec operation.
#[derive(Debug, Clone, Default)]
pub struct ExecResult {
    /// Exit code; -1 when the engine did not report one.
    pub exit_code: i64,
    /// Standard error on its own.
    pub stderr: Vec<u8>,
    /// Standard output and error interleaved in arrival order.
    pub combined: Vec<u8>,
}

impl ExecResult {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Combined output with everything outside printable ASCII removed.
    pub fn output(&self) -> String {
        printable_ascii(&self.combined)
    }
}

/// Keep only bytes in the printable ASCII range (space through tilde).
///
/// Drops newlines, color escape sequences' control bytes and any non-ASCII
/// noise, so the result is safe to parse as a single token.
pub fn printable_ascii(bytes: &[u8]) -> String {
    bytes
        .iter()
        .filter(|b| (0x20..=0x7e).contains(*b))
        .map(|&b| b as char)
        .collect()
}
