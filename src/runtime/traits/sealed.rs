// ABOUTME: Sealed trait pattern for runtime traits.
// ABOUTME: Prevents external implementations, allowing non-breaking evolution.

/// Sealed trait to prevent external implementations.
///
/// Only types inside this crate (the bollard runtime and the test fake) can
/// implement the runtime traits.
pub trait Sealed {}
