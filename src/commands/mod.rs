// ABOUTME: Command module aggregator for the dockip CLI.
// ABOUTME: Re-exports the status and ports command handlers.

mod ports;
mod runtime_connection;
mod status;

pub use ports::ports;
pub use status::status;
