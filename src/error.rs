//! Error types for SCIM response emission.
//!
//! Failures produced upstream are expressed as [`ScimError`], a sum type that
//! either carries an explicit protocol classification ([`ProtocolError`]) or
//! wraps an unclassified error. The response writers only ever match on the
//! variant; an unclassified error always degrades to [`ProtocolError::INTERNAL`].

use std::fmt;

/// A SCIM protocol error classification: HTTP status plus `scimType`.
///
/// Values are immutable and cheap to copy. The well-known classifications
/// from RFC 7644 §3.12 are provided as associated constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProtocolError {
    /// HTTP status code written on the response
    pub status: u16,
    /// Machine-readable SCIM error category
    pub scim_type: &'static str,
}

impl ProtocolError {
    pub const INVALID_FILTER: Self = Self::new(400, "invalidFilter");
    pub const TOO_MANY: Self = Self::new(400, "tooMany");
    pub const UNIQUENESS: Self = Self::new(409, "uniqueness");
    pub const MUTABILITY: Self = Self::new(400, "mutability");
    pub const INVALID_SYNTAX: Self = Self::new(400, "invalidSyntax");
    pub const INVALID_PATH: Self = Self::new(400, "invalidPath");
    pub const NO_TARGET: Self = Self::new(400, "noTarget");
    pub const INVALID_VALUE: Self = Self::new(400, "invalidValue");
    pub const INVALID_VERSION: Self = Self::new(400, "invalidVers");
    pub const SENSITIVE: Self = Self::new(403, "sensitive");
    pub const NOT_FOUND: Self = Self::new(404, "notFound");
    pub const CONFLICT: Self = Self::new(409, "conflict");
    pub const PRECONDITION: Self = Self::new(412, "preCondition");
    /// Fallback classification for every unclassified failure.
    pub const INTERNAL: Self = Self::new(500, "internal");

    /// Create a custom classification.
    ///
    /// `status` should be a 4xx or 5xx code; any other value is reported as
    /// [`ProtocolError::INTERNAL`] by [`ScimError::classification`].
    pub const fn new(status: u16, scim_type: &'static str) -> Self {
        Self { status, scim_type }
    }

    /// Whether `status` is an HTTP client or server error code.
    pub const fn is_error_status(&self) -> bool {
        self.status >= 400 && self.status <= 599
    }
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.scim_type, self.status)
    }
}

/// Main error type handed to the error response writer.
///
/// Upstream components classify what they know about; anything else is
/// wrapped as [`ScimError::Other`] and reported as an internal error.
#[derive(Debug, thiserror::Error)]
pub enum ScimError {
    /// A failure explicitly tagged with a protocol status and `scimType`
    #[error("{detail}")]
    Protocol {
        error: ProtocolError,
        detail: String,
    },

    /// Any failure without a protocol classification
    #[error(transparent)]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

// Convenience methods for creating common errors
impl ScimError {
    /// Create a classified error with a custom detail message
    pub fn protocol(error: ProtocolError, detail: impl Into<String>) -> Self {
        Self::Protocol {
            error,
            detail: detail.into(),
        }
    }

    /// Wrap an unclassified error
    pub fn other<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Other(Box::new(error))
    }

    pub fn invalid_filter(detail: impl Into<String>) -> Self {
        Self::protocol(ProtocolError::INVALID_FILTER, detail)
    }

    pub fn too_many(detail: impl Into<String>) -> Self {
        Self::protocol(ProtocolError::TOO_MANY, detail)
    }

    pub fn uniqueness(detail: impl Into<String>) -> Self {
        Self::protocol(ProtocolError::UNIQUENESS, detail)
    }

    pub fn mutability(detail: impl Into<String>) -> Self {
        Self::protocol(ProtocolError::MUTABILITY, detail)
    }

    pub fn invalid_syntax(detail: impl Into<String>) -> Self {
        Self::protocol(ProtocolError::INVALID_SYNTAX, detail)
    }

    pub fn invalid_path(detail: impl Into<String>) -> Self {
        Self::protocol(ProtocolError::INVALID_PATH, detail)
    }

    pub fn no_target(detail: impl Into<String>) -> Self {
        Self::protocol(ProtocolError::NO_TARGET, detail)
    }

    pub fn invalid_value(detail: impl Into<String>) -> Self {
        Self::protocol(ProtocolError::INVALID_VALUE, detail)
    }

    pub fn invalid_version(detail: impl Into<String>) -> Self {
        Self::protocol(ProtocolError::INVALID_VERSION, detail)
    }

    pub fn sensitive(detail: impl Into<String>) -> Self {
        Self::protocol(ProtocolError::SENSITIVE, detail)
    }

    /// Create a resource not found error
    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::protocol(ProtocolError::NOT_FOUND, detail)
    }

    pub fn conflict(detail: impl Into<String>) -> Self {
        Self::protocol(ProtocolError::CONFLICT, detail)
    }

    pub fn precondition_failed(detail: impl Into<String>) -> Self {
        Self::protocol(ProtocolError::PRECONDITION, detail)
    }

    /// Create an internal server error
    pub fn internal(detail: impl Into<String>) -> Self {
        Self::protocol(ProtocolError::INTERNAL, detail)
    }

    /// The protocol classification used on the wire.
    ///
    /// Unclassified errors, and classifications whose status is not an HTTP
    /// error code, report [`ProtocolError::INTERNAL`].
    pub fn classification(&self) -> ProtocolError {
        match self {
            Self::Protocol { error, .. } if error.is_error_status() => *error,
            _ => ProtocolError::INTERNAL,
        }
    }

    /// Whether this error carries its own protocol classification.
    pub fn is_classified(&self) -> bool {
        matches!(self, Self::Protocol { .. })
    }

    /// The rendered message of this error, used as the wire `detail`.
    pub fn detail(&self) -> String {
        self.to_string()
    }
}

impl From<ValidationError> for ScimError {
    fn from(error: ValidationError) -> Self {
        Self::invalid_value(error.to_string())
    }
}

impl From<SerializationError> for ScimError {
    fn from(error: SerializationError) -> Self {
        match error {
            SerializationError::InvalidPath { .. } => Self::invalid_path(error.to_string()),
            SerializationError::Json(_) => Self::other(error),
        }
    }
}

/// Validation errors raised while building resources and their metadata.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// General validation error with custom message
    #[error("Validation failed: {message}")]
    Custom { message: String },

    /// Empty schemas array
    #[error("'schemas' array cannot be empty")]
    EmptySchemas,

    /// Invalid schema URI format
    #[error("Invalid schema URI format: {uri}")]
    InvalidSchemaUri { uri: String },

    /// Empty id value
    #[error("'id' attribute cannot be empty")]
    EmptyId,

    /// Invalid id format
    #[error("Invalid 'id' format: {id}")]
    InvalidIdFormat { id: String },

    /// Invalid external id
    #[error("Invalid 'externalId' format")]
    InvalidExternalId,

    /// Invalid meta structure
    #[error("Invalid 'meta' structure")]
    InvalidMetaStructure,

    /// Missing meta resource type
    #[error("Missing 'meta.resourceType'")]
    MissingResourceType,

    /// Invalid meta resource type
    #[error("Invalid 'meta.resourceType': {resource_type}")]
    InvalidResourceType { resource_type: String },

    /// Invalid created datetime
    #[error("Invalid 'meta.created' datetime format")]
    InvalidCreatedDateTime,

    /// Invalid modified datetime
    #[error("Invalid 'meta.lastModified' datetime format")]
    InvalidModifiedDateTime,

    /// Invalid location URI
    #[error("Invalid 'meta.location' URI format")]
    InvalidLocationUri,

    /// Invalid version format
    #[error("Invalid 'meta.version' format")]
    InvalidVersionFormat,
}

impl ValidationError {
    /// Create a custom validation error
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom {
            message: message.into(),
        }
    }
}

/// Failures while rendering a resource to its wire form.
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    /// An `attributes` or `excludedAttributes` entry could not be parsed
    #[error("Invalid attribute path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    /// JSON encoding failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SerializationError {
    pub fn invalid_path(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPath {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Failures returned by the response writers.
///
/// Every variant carries the underlying error untouched.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    /// The resource serializer failed; nothing was written to the sink
    #[error(transparent)]
    Serialization(#[from] SerializationError),

    /// The error body could not be encoded
    #[error(transparent)]
    Encode(#[from] serde_json::Error),

    /// The response sink failed while writing the body
    #[error(transparent)]
    Transport(#[from] std::io::Error),
}

// Result type aliases for convenience
pub type ScimResult<T> = Result<T, ScimError>;
pub type ValidationResult<T> = Result<T, ValidationError>;
pub type SerializationResult<T> = Result<T, SerializationError>;
pub type WriteResult<T> = Result<T, WriteError>;
