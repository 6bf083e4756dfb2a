// ABOUTME: Application-wide error types for dockip.
// ABOUTME: Only these errors end a run; per-container failures become table text.

use crate::runtime::{ContainerError, RuntimeError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("container engine unavailable: {0}")]
    EngineUnavailable(String),

    #[error("container selection failed: {0}")]
    Prompt(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

impl From<RuntimeError> for Error {
    fn from(err: RuntimeError) -> Self {
        Error::EngineUnavailable(err.to_string())
    }
}

impl From<ContainerError> for Error {
    fn from(err: ContainerError) -> Self {
        Error::EngineUnavailable(format!("failed to list containers: {err}"))
    }
}

impl From<inquire::InquireError> for Error {
    fn from(err: inquire::InquireError) -> Self {
        Error::Prompt(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
