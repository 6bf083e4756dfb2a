// ABOUTME: Per-container status pipeline: public IP, geolocation and display rows.
// ABOUTME: Failures stay inside the row they belong to and never end the run.

mod aggregate;
mod geolocation;
mod public_ip;

pub use aggregate::StatusResolver;
pub use geolocation::{GeoLocator, GeoResponse, HttpGeoLocator};
pub use public_ip::{IP_ECHO_COMMAND, OsKind, PublicIpResolver};

use crate::runtime::ContainerState;
use crate::types::PublicIp;
use std::fmt;

/// One line of the status table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusRow {
    pub name: String,
    pub status: RowStatus,
    pub location: Location,
}

impl StatusRow {
    pub fn retrieval_failed(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: RowStatus::RetrievalFailed,
            location: Location::Unknown,
        }
    }

    pub fn not_running(name: impl Into<String>, state: ContainerState) -> Self {
        Self {
            name: name.into(),
            status: RowStatus::NotRunning(state),
            location: Location::Unknown,
        }
    }

    pub fn located(name: impl Into<String>, ip: PublicIp, location: Location) -> Self {
        Self {
            name: name.into(),
            status: RowStatus::Ip(ip),
            location,
        }
    }
}

/// What the "Public IP Address" column shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowStatus {
    Ip(PublicIp),
    NotRunning(ContainerState),
    RetrievalFailed,
}

impl fmt::Display for RowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowStatus::Ip(ip) => write!(f, "{ip}"),
            RowStatus::NotRunning(state) => write!(f, "Container {state}"),
            RowStatus::RetrievalFailed => f.write_str("Retrieval failed"),
        }
    }
}

/// What the "Location" column shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Place { country: String, city: String },
    /// Not looked up, or the service had no match for the address.
    Unknown,
    /// The lookup itself failed (network, status code or body).
    LookupFailed,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Place { country, city } => write!(f, "{country}, {city}"),
            Location::Unknown => f.write_str("Unknown"),
            Location::LookupFailed => f.write_str("Lookup Failed"),
        }
    }
}
