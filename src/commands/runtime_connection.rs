// ABOUTME: Shared helper for connecting to the local container engine.
// ABOUTME: Detects the socket, builds the client and runs the liveness probe.

use dockip::config::Settings;
use dockip::error::Result;
use dockip::runtime::{BollardRuntime, RuntimeError, RuntimeInfoTrait, connect_local};

/// Connect to the container engine and make sure it answers.
///
/// Any failure here is fatal: nothing can be listed without an engine.
pub async fn connect_to_runtime(settings: &Settings) -> Result<BollardRuntime> {
    let runtime = connect_local(&settings.runtime).inspect_err(|e| {
        tracing::debug!(error = ?e, kind = ?e.kind(), "runtime detection failed");
    })?;

    if let Err(e) = runtime.ping().await {
        tracing::debug!(error = %e, runtime = %runtime.runtime_type(), "engine liveness probe failed");
        return Err(RuntimeError::from(e).into());
    }

    match runtime.info().await {
        Ok(meta) => tracing::debug!(
            name = %meta.name,
            version = %meta.version,
            os = %meta.os,
            arch = %meta.arch,
            "connected to container engine"
        ),
        Err(e) => tracing::warn!(error = %e, "engine answered ping but not info"),
    }

    Ok(runtime)
}
