// ABOUTME: Integration tests against the local Docker/Podman engine.
// ABOUTME: Each test skips itself when no engine is reachable.

use dockip::runtime::{
    BollardRuntime, ContainerError, ContainerFilters, ContainerOps, ExecConfig, ExecError,
    ExecOps, RuntimeConfig, RuntimeInfoTrait, connect_local,
};
use dockip::select::ContainerDirectory;
use dockip::types::ContainerId;

/// Get a local runtime that answers ping, or None.
async fn local_runtime() -> Option<BollardRuntime> {
    let runtime = connect_local(&RuntimeConfig::default()).ok()?;
    runtime.ping().await.ok()?;
    Some(runtime)
}

/// Skip test if no local runtime available.
macro_rules! require_runtime {
    () => {
        match local_runtime().await {
            Some(rt) => rt,
            None => {
                eprintln!("Skipping test: no local container runtime found");
                return;
            }
        }
    };
}

const MISSING_ID: &str = "dockip-test-no-such-container-0000";

#[tokio::test]
async fn runtime_info() {
    let runtime = require_runtime!();

    let info = runtime.info().await.expect("should get runtime info");

    assert!(
        !info.name.is_empty(),
        "runtime name should not be empty, got: {}",
        info.name
    );
    assert!(
        !info.version.is_empty(),
        "runtime version should not be empty"
    );
}

#[tokio::test]
async fn listing_is_stable() {
    let runtime = require_runtime!();
    let filters = ContainerFilters::all();

    let first = runtime
        .list_containers(&filters)
        .await
        .expect("list_containers should succeed");
    let second = runtime
        .list_containers(&filters)
        .await
        .expect("list_containers should succeed");

    for c in &first {
        assert!(!c.name.starts_with('/'), "name should be stripped: {}", c.name);
    }

    // Containers may come and go on a shared engine; compare only when unchanged.
    let ids = |list: &[dockip::runtime::ContainerSummary]| {
        list.iter().map(|c| c.id.clone()).collect::<Vec<_>>()
    };
    if ids(&first) == ids(&second) {
        assert_eq!(
            ContainerDirectory::from_summaries(first).choices(),
            ContainerDirectory::from_summaries(second).choices()
        );
    }
}

#[tokio::test]
async fn inspect_missing_container_is_not_found() {
    let runtime = require_runtime!();

    let result = runtime
        .inspect_container(&ContainerId::new(MISSING_ID))
        .await;

    assert!(
        matches!(result, Err(ContainerError::NotFound(_))),
        "expected NotFound, got {:?}",
        result
    );
}

#[tokio::test]
async fn exec_in_missing_container_fails() {
    let runtime = require_runtime!();

    let result = runtime
        .exec(
            &ContainerId::new(MISSING_ID),
            &ExecConfig::command(["true"]),
        )
        .await;

    assert!(
        matches!(result, Err(ExecError::ContainerNotFound(_))),
        "expected ContainerNotFound, got {:?}",
        result
    );
}
