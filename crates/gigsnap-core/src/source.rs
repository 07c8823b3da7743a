//! The Fetcher seam: logical catalog resources and the capability that
//! returns them as generic JSON documents.
//!
//! Transport lives behind `CatalogSource`; this crate only knows resource
//! names. Concrete sources (HTTP, directory replay) live in `gigsnap-client`.

use crate::errors::FetchError;
use crate::model::ArtistId;
use serde_json::Value;
use std::collections::HashMap;

/// A logical resource of the remote catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Resource {
    /// Bulk artist list
    Artists,
    /// Bulk concert-dates index
    Dates,
    /// Per-artist date -> locations relation
    Relation(ArtistId),
}

impl Resource {
    /// Path relative to the catalog base (`artists`, `dates`, `relation/7`)
    pub fn path(&self) -> String {
        match self {
            Resource::Artists => "artists".to_string(),
            Resource::Dates => "dates".to_string(),
            Resource::Relation(id) => format!("relation/{}", id),
        }
    }

    /// Whether a failure of this resource must abort the run
    pub fn is_bulk(&self) -> bool {
        !matches!(self, Resource::Relation(_))
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path())
    }
}

/// Fetch capability for catalog resources
///
/// Implementations must turn every transport, status or parse failure into a
/// `FetchError` rather than panicking.
pub trait CatalogSource: Sync {
    fn fetch(&self, resource: Resource) -> std::result::Result<Value, FetchError>;
}

impl<T: CatalogSource + ?Sized> CatalogSource for &T {
    fn fetch(&self, resource: Resource) -> std::result::Result<Value, FetchError> {
        (**self).fetch(resource)
    }
}

/// Catalog held in memory, with optional injected failures
///
/// Resources that were never inserted fail with a `Status` 404.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    documents: HashMap<Resource, Value>,
    failures: HashMap<Resource, FetchError>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `document` for `resource`
    pub fn with_document(mut self, resource: Resource, document: Value) -> Self {
        self.failures.remove(&resource);
        self.documents.insert(resource, document);
        self
    }

    /// Fail every fetch of `resource` with `error`
    pub fn with_failure(mut self, resource: Resource, error: FetchError) -> Self {
        self.documents.remove(&resource);
        self.failures.insert(resource, error);
        self
    }
}

impl CatalogSource for InMemoryCatalog {
    fn fetch(&self, resource: Resource) -> std::result::Result<Value, FetchError> {
        if let Some(err) = self.failures.get(&resource) {
            return Err(err.clone());
        }
        self.documents
            .get(&resource)
            .cloned()
            .ok_or(FetchError::Status {
                resource,
                status: 404,
            })
    }
}
