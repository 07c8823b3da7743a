use crate::model::ArtistId;
use crate::source::Resource;
use thiserror::Error;

/// Result type alias using GigsnapError
pub type Result<T> = std::result::Result<T, GigsnapError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, log assertions and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Validation
    InvalidInput,
    /// A fetched document is not JSON or lacks required fields
    MalformedDocument,
    /// A raw concert date did not yield a year
    MalformedDate,

    // Integration/IO
    ExternalService,
    Serialization,
    Io,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::MalformedDocument => "ERR_MALFORMED_DOCUMENT",
            ExErrorKind::MalformedDate => "ERR_MALFORMED_DATE",
            ExErrorKind::ExternalService => "ERR_EXTERNAL_SERVICE",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Classification fields for programmatic handling plus context for
/// diagnostics. Log macros read `kind()` and `code()` from it.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    resource: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            resource: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add the catalog resource the error pertains to
    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn resource(&self) -> Option<&str> {
        self.resource.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        if let Some(resource) = &self.resource {
            write!(f, " (resource: {})", resource)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Failure of a single catalog fetch
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Network failure or unreadable source
    #[error("Transport failure fetching {resource}: {message}")]
    Transport { resource: Resource, message: String },

    /// The remote answered with a non-success status
    #[error("Unexpected status {status} fetching {resource}")]
    Status { resource: Resource, status: u16 },

    /// The body is not a JSON document
    #[error("Malformed body for {resource}: {message}")]
    MalformedBody { resource: Resource, message: String },

    /// The body is JSON but lacks the expected fields
    #[error("Unexpected document shape for {resource}: {message}")]
    UnexpectedShape { resource: Resource, message: String },
}

impl FetchError {
    /// The resource whose fetch failed
    pub fn resource(&self) -> Resource {
        match self {
            FetchError::Transport { resource, .. }
            | FetchError::Status { resource, .. }
            | FetchError::MalformedBody { resource, .. }
            | FetchError::UnexpectedShape { resource, .. } => *resource,
        }
    }

    fn kind(&self) -> ExErrorKind {
        match self {
            FetchError::Transport { .. } | FetchError::Status { .. } => {
                ExErrorKind::ExternalService
            }
            FetchError::MalformedBody { .. } | FetchError::UnexpectedShape { .. } => {
                ExErrorKind::MalformedDocument
            }
        }
    }
}

/// Error taxonomy for gigsnap runs
///
/// Only `FatalFetch` (and the ambient IO/serialization kinds) terminate a run.
/// `PartialFetch` and `MalformedDate` are absorbed by the joiner and surface
/// as degradations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GigsnapError {
    /// A bulk collection (artists or dates) could not be fetched or decoded
    #[error("Fatal fetch failure: {source}")]
    FatalFetch { source: FetchError },

    /// The relation lookup for one artist failed
    #[error("Relation lookup failed for artist {artist_id}: {source}")]
    PartialFetch {
        artist_id: ArtistId,
        source: FetchError,
    },

    /// A raw concert date did not yield a year
    #[error("Malformed date {raw:?} for artist {artist_id}: {reason}")]
    MalformedDate {
        artist_id: ArtistId,
        raw: String,
        reason: String,
    },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("IO error: {message}")]
    Io { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl GigsnapError {
    /// Whether this error only degrades a single record
    pub fn is_degradation(&self) -> bool {
        matches!(
            self,
            GigsnapError::PartialFetch { .. } | GigsnapError::MalformedDate { .. }
        )
    }

    /// The artist this error pertains to, if any
    pub fn artist_id(&self) -> Option<ArtistId> {
        match self {
            GigsnapError::PartialFetch { artist_id, .. }
            | GigsnapError::MalformedDate { artist_id, .. } => Some(*artist_id),
            _ => None,
        }
    }
}

impl From<GigsnapError> for ExError {
    fn from(err: GigsnapError) -> Self {
        match err {
            GigsnapError::FatalFetch { source } => ExError::new(source.kind())
                .with_op("fetch")
                .with_resource(source.resource().to_string())
                .with_message(source.to_string()),
            GigsnapError::PartialFetch { artist_id, source } => ExError::new(source.kind())
                .with_op("fetch_relation")
                .with_entity_id(artist_id.to_string())
                .with_resource(source.resource().to_string())
                .with_message(source.to_string()),
            GigsnapError::MalformedDate {
                artist_id,
                raw,
                reason,
            } => ExError::new(ExErrorKind::MalformedDate)
                .with_op("parse_date")
                .with_entity_id(artist_id.to_string())
                .with_message(format!("{:?}: {}", raw, reason)),
            GigsnapError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
            GigsnapError::Io { message } => ExError::new(ExErrorKind::Io).with_message(message),
            GigsnapError::Internal { message } => {
                ExError::new(ExErrorKind::Internal).with_message(message)
            }
        }
    }
}

impl From<&GigsnapError> for ExError {
    fn from(err: &GigsnapError) -> Self {
        err.clone().into()
    }
}

/// Conversion from serde_json::Error to GigsnapError
impl From<serde_json::Error> for GigsnapError {
    fn from(err: serde_json::Error) -> Self {
        GigsnapError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for GigsnapError {
    fn from(err: std::io::Error) -> Self {
        GigsnapError::Io {
            message: err.to_string(),
        }
    }
}
