// ABOUTME: Engine metadata and liveness trait for container runtimes.
// ABOUTME: The ping here is the pre-flight probe before any container query.

use super::sealed::Sealed;
use super::shared_types::RuntimeMetadata;
use async_trait::async_trait;

/// Engine-level queries.
#[async_trait]
pub trait RuntimeInfo: Sealed + Send + Sync {
    /// Get engine version and metadata.
    async fn info(&self) -> Result<RuntimeMetadata, RuntimeInfoError>;

    /// Check that the engine answers on its socket.
    async fn ping(&self) -> Result<(), RuntimeInfoError>;
}

/// Errors from engine-level queries.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeInfoError {
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    #[error("runtime error: {0}")]
    Runtime(String),
}
