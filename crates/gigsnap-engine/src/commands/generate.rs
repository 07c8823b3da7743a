//! Generate command: catalog -> snapshot -> rendered Go source.
//!
//! ## Logging Ownership
//!
//! The engine layer owns lifecycle logging for a run:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success, with artist count, degraded count and digest
//! - `log_op_error!` on failure
//! - `log_op_degraded!` once per absorbed per-artist failure
//!
//! Lower layers (client, core) use only `tracing::debug!()` for internal details.

use gigsnap_core::document::{fetch_artists, fetch_dates};
use gigsnap_core::join::DEFAULT_IMAGE_BASE;
use gigsnap_core::{
    join, log_op_degraded, log_op_end, log_op_error, log_op_start, render, CatalogSource,
    GigsnapError, JoinOptions, OutputVariant, Result, Snapshot,
};
use std::time::Instant;

const OP: &str = "generate";

/// Settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateConfig {
    pub variant: OutputVariant,
    pub image_base: String,
    /// Relation lookup threads; 1 keeps the lookups sequential
    pub workers: usize,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            variant: OutputVariant::default(),
            image_base: DEFAULT_IMAGE_BASE.to_string(),
            workers: 1,
        }
    }
}

impl GenerateConfig {
    /// Join settings implied by the output variant
    pub fn join_options(&self) -> JoinOptions {
        JoinOptions {
            fetch_locations: self.variant.needs_locations(),
            image_base: self.image_base.clone(),
            workers: self.workers.max(1),
        }
    }
}

/// Everything a run produced
#[derive(Debug, Clone)]
pub struct GenerateOutcome {
    pub snapshot: Snapshot,
    /// Rendered Go source, ready for stdout
    pub rendered: String,
    /// SHA256 of the canonical snapshot JSON
    pub digest: String,
    /// Per-artist failures absorbed during the join
    pub degradations: Vec<GigsnapError>,
}

/// Run one generation against `source`
///
/// ## Errors
///
/// - `FatalFetch`: the artists or dates collection could not be fetched or
///   decoded
/// - `Serialization`: the snapshot digest could not be computed
///
/// Relation lookup failures and malformed dates never fail the run; they are
/// returned in `GenerateOutcome::degradations`.
pub fn generate<S: CatalogSource + ?Sized>(
    source: &S,
    config: &GenerateConfig,
) -> Result<GenerateOutcome> {
    log_op_start!(OP, variant = config.variant.name(), workers = config.workers);
    let start = Instant::now();

    let outcome = generate_impl(source, config).map_err(|e| {
        log_op_error!(
            OP,
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        OP,
        duration_ms = start.elapsed().as_millis() as u64,
        artist_count = outcome.snapshot.artists().len(),
        degraded_count = outcome.degradations.len(),
        digest = %outcome.digest
    );

    Ok(outcome)
}

fn generate_impl<S: CatalogSource + ?Sized>(
    source: &S,
    config: &GenerateConfig,
) -> Result<GenerateOutcome> {
    let artists = fetch_artists(source).map_err(|source| GigsnapError::FatalFetch { source })?;
    tracing::debug!(artist_count = artists.len(), "artists fetched");

    let dates = fetch_dates(source).map_err(|source| GigsnapError::FatalFetch { source })?;
    tracing::debug!(indexed = dates.len(), "dates fetched");

    let report = join(&artists, &dates, source, &config.join_options());
    for degradation in &report.degradations {
        log_op_degraded!(
            OP,
            degradation,
            artist_id = degradation.artist_id().unwrap_or_default()
        );
    }

    let snapshot = Snapshot::build(report.artists);
    let digest = snapshot.digest()?;
    let rendered = render(&snapshot, config.variant);

    Ok(GenerateOutcome {
        snapshot,
        rendered,
        digest,
        degradations: report.degradations,
    })
}
