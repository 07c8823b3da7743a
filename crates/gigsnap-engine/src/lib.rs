//! gigsnap Engine - Orchestration layer
//!
//! Runs one generation end to end (fetch, join, build, render) and owns the
//! lifecycle logging for it.

pub mod commands;

pub use commands::generate::{generate, GenerateConfig, GenerateOutcome};
