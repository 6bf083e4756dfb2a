// ABOUTME: Type-safe identifiers and validated domain types.
// ABOUTME: Uses phantom types to prevent ID confusion at compile time.

mod id;
mod public_ip;

pub use id::{ContainerId, ExecId};
pub use public_ip::{PublicIp, PublicIpError};
