// ABOUTME: Version string printed by `--version`.
// ABOUTME: Taken from the package metadata at build time.

const PLACEHOLDER: &str = "unknown";

/// The crate version, or a placeholder when built outside cargo.
pub fn version() -> &'static str {
    option_env!("CARGO_PKG_VERSION")
        .filter(|v| !v.is_empty())
        .unwrap_or(PLACEHOLDER)
}

/// The line `--version` prints.
pub fn version_line() -> String {
    format!("dockip {}", version())
}
