// ABOUTME: Discovers a container's outbound public IP by running curl inside it.
// ABOUTME: Picks shell or bare invocation by OS and accepts only IPv4-shaped output.

use crate::runtime::{ContainerOps, ExecConfig, ExecOps, printable_ascii};
use crate::types::{ContainerId, PublicIp};
use std::time::Duration;

/// Command that prints the caller's public address.
pub const IP_ECHO_COMMAND: &str = "curl -s https://api.ipify.org";

/// Operating system family, as far as choosing an exec invocation goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OsKind {
    Windows,
    #[default]
    Other,
}

impl OsKind {
    /// Classify the engine's platform hint. Anything not mentioning Windows is `Other`.
    pub fn from_hint(hint: Option<&str>) -> Self {
        match hint {
            Some(h) if h.to_ascii_lowercase().contains("windows") => OsKind::Windows,
            _ => OsKind::Other,
        }
    }

    /// Command vector for `command` on this OS.
    ///
    /// Windows images have no POSIX shell, so the command is split on
    /// whitespace and run directly.
    pub fn command_vector(&self, command: &str) -> Vec<String> {
        match self {
            OsKind::Windows => command.split_whitespace().map(str::to_string).collect(),
            OsKind::Other => vec!["sh".to_string(), "-c".to_string(), command.to_string()],
        }
    }
}

/// Resolves the public IP a container egresses from.
pub struct PublicIpResolver<'a, R> {
    runtime: &'a R,
    exec_timeout: Option<Duration>,
}

impl<'a, R> PublicIpResolver<'a, R>
where
    R: ContainerOps + ExecOps,
{
    pub fn new(runtime: &'a R) -> Self {
        Self {
            runtime,
            exec_timeout: None,
        }
    }

    pub fn with_exec_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.exec_timeout = timeout;
        self
    }

    /// Inspect the container for its OS, then resolve.
    pub async fn resolve(&self, id: &ContainerId) -> Option<PublicIp> {
        let os = match self.runtime.inspect_container(id).await {
            Ok(info) => OsKind::from_hint(info.os_hint.as_deref()),
            Err(e) => {
                tracing::debug!(container = %id.short(), error = %e, "inspect failed, assuming POSIX shell");
                OsKind::Other
            }
        };
        self.resolve_with_os(id, os).await
    }

    /// Run the IP echo command for a container whose OS is already known.
    ///
    /// Every failure (exec error, non-zero exit, output that isn't an
    /// address) is `None`.
    pub async fn resolve_with_os(&self, id: &ContainerId, os: OsKind) -> Option<PublicIp> {
        let config =
            ExecConfig::command(os.command_vector(IP_ECHO_COMMAND)).with_timeout(self.exec_timeout);

        let result = match self.runtime.exec(id, &config).await {
            Ok(result) => result,
            Err(e) => {
                tracing::debug!(container = %id.short(), error = %e, "public IP exec failed");
                return None;
            }
        };

        if !result.success() {
            tracing::debug!(
                container = %id.short(),
                exit_code = result.exit_code,
                stderr = %printable_ascii(&result.stderr),
                "public IP command exited non-zero"
            );
            return None;
        }

        let output = result.output();
        match PublicIp::parse(&output) {
            Ok(ip) => Some(ip),
            Err(e) => {
                tracing::debug!(container = %id.short(), error = %e, "unexpected public IP output");
                None
            }
        }
    }
}
