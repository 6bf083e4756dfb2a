// ABOUTME: Structurally validated public IP address reported by a container.
// ABOUTME: Accepts dot-separated digit groups without checking octet ranges.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

// Anchored at the start only: trailing groups or text after the fourth group
// are tolerated, and octets above 255 pass.
static IPV4_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+\.\d+\.\d+\.\d+").expect("IPv4 shape pattern is valid")
});

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PublicIpError {
    #[error("public IP cannot be empty")]
    Empty,

    #[error("not an IPv4 address: {0:?}")]
    NotIpv4(String),
}

/// Public IP address text as echoed by the lookup service.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PublicIp(String);

impl PublicIp {
    /// Trim `value` and accept it if it has the shape of an IPv4 address.
    pub fn parse(value: &str) -> Result<Self, PublicIpError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(PublicIpError::Empty);
        }

        if !IPV4_SHAPE.is_match(trimmed) {
            return Err(PublicIpError::NotIpv4(trimmed.to_string()));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PublicIp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
