// ABOUTME: In-memory runtime used by unit tests of the status pipeline.
// ABOUTME: Scripted inspect and exec responses, with a log of every exec issued.

use super::traits::sealed::Sealed;
use super::traits::{
    ContainerError, ContainerFilters, ContainerInfo, ContainerOps, ContainerState,
    ContainerSummary, ExecConfig, ExecError, ExecOps, ExecResult, PortBinding,
};
use crate::types::{ContainerId, ExecId};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// What exec returns for one container.
pub enum ExecScript {
    Output { exit_code: i64, output: String },
    Fail(String),
    /// Never finishes; gives up only when the exec has a timeout.
    Hang,
}

#[derive(Default)]
pub struct FakeRuntime {
    containers: Vec<ContainerInfo>,
    exec_scripts: HashMap<String, ExecScript>,
    exec_calls: Mutex<Vec<(String, Vec<String>)>>,
}

impl FakeRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_container(mut self, id: &str, name: &str, state: ContainerState) -> Self {
        self.containers.push(ContainerInfo {
            id: ContainerId::new(id),
            name: name.to_string(),
            state,
            os_hint: Some("linux".to_string()),
            ports: Vec::new(),
        });
        self
    }

    pub fn with_os_hint(mut self, id: &str, hint: Option<&str>) -> Self {
        if let Some(c) = self.containers.iter_mut().find(|c| c.id.as_str() == id) {
            c.os_hint = hint.map(str::to_string);
        }
        self
    }

    pub fn with_ports(mut self, id: &str, ports: Vec<PortBinding>) -> Self {
        if let Some(c) = self.containers.iter_mut().find(|c| c.id.as_str() == id) {
            c.ports = ports;
        }
        self
    }

    pub fn with_exec_output(mut self, id: &str, exit_code: i64, output: &str) -> Self {
        self.exec_scripts.insert(
            id.to_string(),
            ExecScript::Output {
                exit_code,
                output: output.to_string(),
            },
        );
        self
    }

    pub fn with_exec_failure(mut self, id: &str, message: &str) -> Self {
        self.exec_scripts
            .insert(id.to_string(), ExecScript::Fail(message.to_string()));
        self
    }

    pub fn with_hanging_exec(mut self, id: &str) -> Self {
        self.exec_scripts.insert(id.to_string(), ExecScript::Hang);
        self
    }

    /// Every exec issued so far, as (container id, command).
    pub fn exec_calls(&self) -> Vec<(String, Vec<String>)> {
        self.exec_calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

impl Sealed for FakeRuntime {}

#[async_trait]
impl ContainerOps for FakeRuntime {
    async fn inspect_container(&self, id: &ContainerId) -> Result<ContainerInfo, ContainerError> {
        self.containers
            .iter()
            .find(|c| &c.id == id)
            .cloned()
            .ok_or_else(|| ContainerError::NotFound(id.to_string()))
    }

    async fn list_containers(
        &self,
        filters: &ContainerFilters,
    ) -> Result<Vec<ContainerSummary>, ContainerError> {
        Ok(self
            .containers
            .iter()
            .filter(|c| filters.all || c.state == ContainerState::Running)
            .map(|c| ContainerSummary {
                id: c.id.clone(),
                name: c.name.clone(),
            })
            .collect())
    }
}

#[async_trait]
impl ExecOps for FakeRuntime {
    async fn exec(
        &self,
        container: &ContainerId,
        config: &ExecConfig,
    ) -> Result<ExecResult, ExecError> {
        if let Ok(mut calls) = self.exec_calls.lock() {
            calls.push((container.to_string(), config.cmd.clone()));
        }

        match self.exec_scripts.get(container.as_str()) {
            Some(ExecScript::Output { exit_code, output }) => Ok(ExecResult {
                exit_code: *exit_code,
                stderr: Vec::new(),
                combined: output.as_bytes().to_vec(),
            }),
            Some(ExecScript::Fail(message)) => Err(ExecError::Failed(message.clone())),
            Some(ExecScript::Hang) => match config.timeout {
                Some(limit) => Err(ExecError::TimedOut(limit)),
                None => std::future::pending().await,
            },
            None => Err(ExecError::ContainerNotFound(container.to_string())),
        }
    }

    async fn exec_create(
        &self,
        container: &ContainerId,
        _config: &ExecConfig,
    ) -> Result<ExecId, ExecError> {
        Ok(ExecId::new(format!("exec-{container}")))
    }

    async fn exec_start(&self, exec_id: &ExecId) -> Result<ExecResult, ExecError> {
        Err(ExecError::ExecNotFound(exec_id.to_string()))
    }
}
