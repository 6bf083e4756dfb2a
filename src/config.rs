// ABOUTME: Startup settings read from the environment.
// ABOUTME: Logging verbosity, engine override, lookup endpoints, timeouts and fan-out width.

use crate::error::{Error, Result};
use crate::runtime::{RuntimeConfig, RuntimeType};
use std::time::Duration;

pub const ENV_DEBUG: &str = "DEBUG";
pub const ENV_RUNTIME: &str = "DOCKIP_RUNTIME";
pub const ENV_SOCKET: &str = "DOCKIP_SOCKET";
pub const ENV_GEO_URL: &str = "DOCKIP_GEO_URL";
pub const ENV_GEO_TIMEOUT: &str = "DOCKIP_GEO_TIMEOUT";
pub const ENV_EXEC_TIMEOUT: &str = "DOCKIP_EXEC_TIMEOUT";
pub const ENV_CONCURRENCY: &str = "DOCKIP_CONCURRENCY";

pub const DEFAULT_GEO_URL: &str = "http://ip-api.com/json/";
pub const DEFAULT_GEO_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_CONCURRENCY: usize = 8;

/// Logging configuration handed to the tracing subscriber at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogConfig {
    /// Emit debug-level diagnostics on stderr.
    pub verbose: bool,
}

impl LogConfig {
    /// Directive for `EnvFilter`: our own debug output when verbose, warnings otherwise.
    pub fn filter_directive(&self) -> &'static str {
        if self.verbose { "dockip=debug,warn" } else { "warn" }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub log: LogConfig,
    pub runtime: RuntimeConfig,
    /// Geolocation endpoint; the IP is appended to it.
    pub geo_url: String,
    pub geo_timeout: Duration,
    /// Upper bound on one in-container lookup. `None` waits indefinitely.
    pub exec_timeout: Option<Duration>,
    /// Containers resolved at the same time.
    pub concurrency: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log: LogConfig::default(),
            runtime: RuntimeConfig::default(),
            geo_url: DEFAULT_GEO_URL.to_string(),
            geo_timeout: DEFAULT_GEO_TIMEOUT,
            exec_timeout: None,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`, which returns a variable's value if set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Settings::default();

        let runtime = RuntimeConfig {
            runtime: non_empty(lookup(ENV_RUNTIME))
                .map(|v| {
                    v.parse::<RuntimeType>()
                        .map_err(|e| Error::InvalidConfig(format!("{ENV_RUNTIME}: {e}")))
                })
                .transpose()?,
            socket: non_empty(lookup(ENV_SOCKET)),
        };

        let geo_timeout = non_empty(lookup(ENV_GEO_TIMEOUT))
            .map(|v| parse_duration(ENV_GEO_TIMEOUT, &v))
            .transpose()?
            .unwrap_or(defaults.geo_timeout);

        let exec_timeout = non_empty(lookup(ENV_EXEC_TIMEOUT))
            .map(|v| parse_duration(ENV_EXEC_TIMEOUT, &v))
            .transpose()?;

        let concurrency = match non_empty(lookup(ENV_CONCURRENCY)) {
            Some(v) => match v.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(Error::InvalidConfig(format!(
                        "{ENV_CONCURRENCY}: expected a positive integer, got '{v}'"
                    )));
                }
            },
            None => defaults.concurrency,
        };

        Ok(Self {
            // Presence alone turns on debug output, whatever the value.
            log: LogConfig {
                verbose: lookup(ENV_DEBUG).is_some(),
            },
            runtime,
            geo_url: non_empty(lookup(ENV_GEO_URL)).unwrap_or(defaults.geo_url),
            geo_timeout,
            exec_timeout,
            concurrency,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_duration(key: &str, value: &str) -> Result<Duration> {
    humantime::parse_duration(value.trim())
        .map_err(|e| Error::InvalidConfig(format!("{key}: {e}")))
}
