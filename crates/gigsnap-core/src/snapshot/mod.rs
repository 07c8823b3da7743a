//! Snapshot: the frozen result of a run, ready for rendering.
//!
//! ## Responsibilities
//!
//! - Assemble joined artists and the cross-artist `availableYears` aggregate
//! - Compute a deterministic digest of the snapshot
//!
//! ## Non-Responsibilities
//!
//! - Fetching and joining (handled by `join`)
//! - Text output (handled by `render`)

pub mod builder;
pub mod digest;

pub use builder::Snapshot;
pub use digest::compute_snapshot_digest;
