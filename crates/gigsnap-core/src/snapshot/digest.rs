//! Digest computation for snapshots.
//!
//! The digest is the SHA256 of the canonical JSON serialization. Sets are
//! ordered, so the same snapshot always yields the same digest; reruns
//! against an unchanged catalog can be compared by digest alone.

use crate::errors::Result;
use crate::snapshot::builder::Snapshot;
use sha2::{Digest, Sha256};

/// Compute the snapshot digest
///
/// Hex-encoded SHA256 (64 characters).
///
/// # Errors
///
/// Returns `GigsnapError::Serialization` if JSON serialization fails.
///
/// # Example
///
/// ```
/// use gigsnap_core::snapshot::{compute_snapshot_digest, Snapshot};
///
/// let digest = compute_snapshot_digest(&Snapshot::build(Vec::new())).unwrap();
/// assert_eq!(digest.len(), 64);
/// ```
pub fn compute_snapshot_digest(snapshot: &Snapshot) -> Result<String> {
    let canonical = serde_json::to_string(snapshot)?;
    Ok(hash_string(&canonical))
}

fn hash_string(s: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(s.as_bytes());
    hex::encode(hasher.finalize())
}
