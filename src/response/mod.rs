//! SCIM response emission.
//!
//! Renders an already computed result onto a response channel:
//!
//! * [`ResourceResponseWriter`] - resource body with attribute selection,
//!   `Content-Type`, `Location` and `ETag` headers
//! * [`ErrorResponseWriter`] - SCIM error body with the classified status
//! * [`ResponseSink`] - the capability interface both writers depend on
//!
//! Each write is a single, non-retried operation. A sink must not be
//! written to concurrently, nor handed to a writer twice for one response.

pub mod error_writer;
pub mod resource_writer;
pub mod sink;

pub use error_writer::{
    ERROR_SCHEMA, ERROR_SCHEMAS, ErrorBody, ErrorResponseWriter, ErrorSchemas, write_error,
};
pub use resource_writer::{ResourceResponseWriter, write_resource};
pub use sink::{HttpResponseSink, ResponseSink};

/// SCIM JSON media type set on every response.
pub const SCIM_CONTENT_TYPE: &str = "application/json+scim";

pub const CONTENT_TYPE: &str = "Content-Type";
pub const LOCATION: &str = "Location";
pub const ETAG: &str = "ETag";
