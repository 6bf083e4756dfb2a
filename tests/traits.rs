// ABOUTME: Tests for runtime trait definitions and shared types.
// ABOUTME: Verifies trait bounds compose and the plain data types behave.

use dockip::runtime::traits::*;
use dockip::types::ContainerId;
use std::time::Duration;

/// Verify that function signatures work with trait bounds.
mod trait_bounds {
    use super::*;

    /// Function requiring only ContainerOps.
    #[allow(dead_code)]
    async fn is_running(runtime: &impl ContainerOps, id: &ContainerId) -> Result<bool, ContainerError> {
        let info = runtime.inspect_container(id).await?;
        Ok(info.state == ContainerState::Running)
    }

    /// Function requiring exec and inspect together, as the IP lookup does.
    #[allow(dead_code)]
    async fn run_if_running<R>(runtime: &R, id: &ContainerId) -> Option<ExecResult>
    where
        R: ContainerOps + ExecOps,
    {
        let info = runtime.inspect_container(id).await.ok()?;
        if info.state != ContainerState::Running {
            return None;
        }
        runtime.exec(id, &ExecConfig::command(["true"])).await.ok()
    }

    #[test]
    fn trait_functions_compile() {
        // The functions above only need to type-check.
    }
}

mod trait_types {
    use super::*;

    #[test]
    fn container_state_display_is_engine_word() {
        assert_eq!(ContainerState::Running.to_string(), "running");
        assert_eq!(ContainerState::Exited.to_string(), "exited");
        assert_eq!(ContainerState::Restarting.to_string(), "restarting");
    }

    #[test]
    fn exec_config_command_has_no_timeout() {
        let config = ExecConfig::command(["curl", "-s", "https://api.ipify.org"]);
        assert_eq!(config.cmd.len(), 3);
        assert!(config.timeout.is_none());
    }

    #[test]
    fn exec_config_command_and_timeout() {
        let config = ExecConfig::command(["sh", "-c", "echo hi"])
            .with_timeout(Some(Duration::from_secs(5)));
        assert_eq!(config.cmd, vec!["sh", "-c", "echo hi"]);
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn port_binding_display() {
        let binding = PortBinding {
            container_port: "80/tcp".to_string(),
            host_ip: "0.0.0.0".to_string(),
            host_port: "8080".to_string(),
        };
        assert_eq!(binding.to_string(), "0.0.0.0:8080->80/tcp");
    }

    #[test]
    fn default_listing_excludes_stopped() {
        assert!(ContainerFilters::all().all);
        assert!(!ContainerFilters::default().all);
    }

    #[test]
    fn exec_result_success_requires_zero() {
        let ok = ExecResult::default();
        assert!(ok.success());

        let unknown = ExecResult {
            exit_code: -1,
            ..Default::default()
        };
        assert!(!unknown.success());
    }

    #[test]
    fn error_types_display() {
        let err = ContainerError::NotFound("web".to_string());
        assert!(err.to_string().contains("web"));

        let err = ExecError::ContainerNotRunning("container1".to_string());
        assert!(err.to_string().contains("container1"));

        let err = ExecError::TimedOut(Duration::from_secs(3));
        assert!(err.to_string().contains("3s"));

        let err = RuntimeInfoError::ConnectionFailed("timeout".to_string());
        assert!(err.to_string().contains("timeout"));
    }
}
