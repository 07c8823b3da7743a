//! Directory replay source
//!
//! Serves catalog documents saved on disk:
//!
//! ```text
//! <root>/artists.json
//! <root>/dates.json
//! <root>/relation/<id>.json
//! ```
//!
//! A missing file is a transport failure for that resource, so a missing
//! relation degrades one artist exactly like a failed HTTP lookup.

use crate::errors::{malformed_body, transport_error};
use gigsnap_core::errors::FetchError;
use gigsnap_core::{CatalogSource, Resource};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct DirCatalog {
    root: PathBuf,
}

impl DirCatalog {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File backing a resource
    pub fn path_for(&self, resource: Resource) -> PathBuf {
        self.root.join(format!("{}.json", resource.path()))
    }
}

impl CatalogSource for DirCatalog {
    fn fetch(&self, resource: Resource) -> std::result::Result<Value, FetchError> {
        let path = self.path_for(resource);
        tracing::debug!(path = %path.display(), "reading catalog document");

        let content = fs::read_to_string(&path)
            .map_err(|e| transport_error(resource, format!("{}: {}", path.display(), e)))?;
        serde_json::from_str(&content).map_err(|e| malformed_body(resource, e))
    }
}
