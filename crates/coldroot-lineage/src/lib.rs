//! Lineage events for Coldroot epoch keys
//!
//! A lineage event is a signed, publicly postable record proving that an
//! epoch public key was derived from a root key. Timestamps come from the
//! epoch label, never from the wall clock, so independently produced events
//! agree byte for byte.

/// Lineage error types
pub mod error;
/// Lineage event construction
pub mod event;
/// Canonical epoch label to timestamp mapping
pub mod timestamp;
/// Versioned conformance vector model and checks
pub mod vectors;
/// Lineage event verification
pub mod verify;

pub use error::*;
pub use event::*;
pub use timestamp::*;
pub use vectors::*;
pub use verify::*;
