// ABOUTME: Library root for dockip - exposes the pipeline for the binary and tests.
// ABOUTME: The main binary is in main.rs.

pub mod config;
pub mod error;
pub mod output;
pub mod ports;
pub mod runtime;
pub mod select;
pub mod status;
pub mod types;
pub mod version;
