//! Command orchestration layer.
//!
//! Provides high-level command functions that coordinate the catalog source
//! with the core aggregation logic.

pub mod generate;
