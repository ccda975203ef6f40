//! Rendering of a failure as a SCIM error response (RFC 7644 §3.12).

use crate::error::{ProtocolError, ScimError, WriteResult};
use crate::response::sink::ResponseSink;
use crate::response::{CONTENT_TYPE, SCIM_CONTENT_TYPE};
use log::{debug, warn};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Schema URN identifying a SCIM error message.
pub const ERROR_SCHEMA: &str = "urn:ietf:params:scim:api:messages:2.0:Error";

/// The `schemas` list of every error body.
pub const ERROR_SCHEMAS: &[&str] = &[ERROR_SCHEMA];

/// The constant `schemas` member of an [`ErrorBody`].
///
/// Always serializes to [`ERROR_SCHEMAS`]; deserialization rejects any other
/// list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ErrorSchemas;

impl ErrorSchemas {
    pub fn as_slice(&self) -> &'static [&'static str] {
        ERROR_SCHEMAS
    }
}

impl Serialize for ErrorSchemas {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        ERROR_SCHEMAS.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ErrorSchemas {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let uris = Vec::<String>::deserialize(deserializer)?;
        if uris.iter().map(String::as_str).eq(ERROR_SCHEMAS.iter().copied()) {
            Ok(Self)
        } else {
            Err(D::Error::custom(format!(
                "expected schemas {:?}, got {:?}",
                ERROR_SCHEMAS, uris
            )))
        }
    }
}

/// Wire representation of a SCIM error.
///
/// ```json
/// {
///   "schemas": ["urn:ietf:params:scim:api:messages:2.0:Error"],
///   "status": 404,
///   "scimType": "notFound",
///   "detail": "Resource 2819c223 not found"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub schemas: ErrorSchemas,
    pub status: u16,
    #[serde(rename = "scimType")]
    pub scim_type: String,
    pub detail: String,
}

impl ErrorBody {
    pub fn new(error: ProtocolError, detail: impl Into<String>) -> Self {
        Self {
            schemas: ErrorSchemas,
            status: error.status,
            scim_type: error.scim_type.to_string(),
            detail: detail.into(),
        }
    }

    /// Build the body for `err`.
    ///
    /// Status and `scimType` come from the error's classification (internal
    /// for unclassified errors); `detail` is always the error's own message.
    pub fn from_error(err: &ScimError) -> Self {
        Self::new(err.classification(), err.detail())
    }
}

/// Writes a [`ScimError`] to a [`ResponseSink`].
///
/// Commits the classified status, sets `Content-Type` and writes the JSON
/// error body. If encoding the body fails, status and headers may already
/// be committed but no body is written.
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorResponseWriter;

impl ErrorResponseWriter {
    pub fn new() -> Self {
        Self
    }

    pub fn write<W>(&self, sink: &mut W, err: &ScimError) -> WriteResult<()>
    where
        W: ResponseSink + ?Sized,
    {
        match err {
            ScimError::Protocol { error, .. } if !error.is_error_status() => warn!(
                "Classification {} is not an HTTP error status, reporting as {}: {}",
                error,
                ProtocolError::INTERNAL,
                err
            ),
            ScimError::Other(_) => warn!(
                "Reporting unclassified error as {}: {}",
                ProtocolError::INTERNAL,
                err
            ),
            ScimError::Protocol { .. } => {}
        }

        let body = ErrorBody::from_error(err);

        sink.write_status(body.status);
        sink.set_header(CONTENT_TYPE, SCIM_CONTENT_TYPE);

        let raw = serde_json::to_vec(&body)?;

        debug!(
            "Writing SCIM error {} ({}): {}",
            body.status, body.scim_type, body.detail
        );
        sink.write_body(&raw)?;
        Ok(())
    }
}

/// Write `err` with an [`ErrorResponseWriter`].
pub fn write_error<W>(sink: &mut W, err: &ScimError) -> WriteResult<()>
where
    W: ResponseSink + ?Sized,
{
    ErrorResponseWriter::new().write(sink, err)
}
