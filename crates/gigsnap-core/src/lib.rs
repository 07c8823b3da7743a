//! gigsnap Core - aggregation kernel
//!
//! This crate provides:
//! - Raw catalog records and the aggregated artist model
//! - Typed decoding of fetched documents (the Fetcher seam)
//! - Concert date parsing
//! - The joiner, with per-artist failure isolation
//! - Snapshot building and digests
//! - Rendering to Go source for the downstream server
//! - Error and logging facilities shared by the workspace

pub mod dates;
pub mod document;
pub mod errors;
pub mod join;
pub mod logging_facility;
pub mod model;
pub mod render;
pub mod snapshot;
pub mod source;

#[doc(hidden)]
pub use gigsnap_core_types as core_types;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, FetchError, GigsnapError, Result};
pub use join::{join, JoinOptions, JoinReport};
pub use model::{AggregatedArtist, ArtistId, DatesIndex, RawArtist, Year};
pub use render::{render, OutputVariant};
pub use snapshot::Snapshot;
pub use source::{CatalogSource, InMemoryCatalog, Resource};
