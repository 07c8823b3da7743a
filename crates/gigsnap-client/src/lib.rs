//! gigsnap Client - catalog sources
//!
//! Provides the `CatalogSource` implementations used by the CLI:
//! - `HttpCatalog`: the remote catalog API over HTTP(S)
//! - `DirCatalog`: replay of previously saved catalog documents from disk

pub mod dir;
pub mod errors;
pub mod http;

pub use dir::DirCatalog;
pub use http::{HttpCatalog, HttpCatalogConfig, DEFAULT_API_BASE, DEFAULT_TIMEOUT};
