//! Error helpers for gigsnap-client
//!
//! Map transport-level failures onto the core `FetchError` taxonomy.

use gigsnap_core::errors::{FetchError, GigsnapError};
use gigsnap_core::Resource;

/// Network or read failure for a resource
pub fn transport_error(resource: Resource, err: impl std::fmt::Display) -> FetchError {
    FetchError::Transport {
        resource,
        message: err.to_string(),
    }
}

/// Body that is not a JSON document
pub fn malformed_body(resource: Resource, err: serde_json::Error) -> FetchError {
    FetchError::MalformedBody {
        resource,
        message: err.to_string(),
    }
}

/// HTTP client could not be constructed
pub fn client_build_error(err: reqwest::Error) -> GigsnapError {
    GigsnapError::Internal {
        message: format!("Failed to build HTTP client: {}", err),
    }
}
