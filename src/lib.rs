//! SCIM 2.0 response emission for Rust.
//!
//! Renders resources and errors produced elsewhere in a SCIM service onto an
//! HTTP response, with the protocol-mandated body, headers and status.
//!
//! # Core Components
//!
//! - [`ResourceResponseWriter`] - Resource bodies honouring `attributes` /
//!   `excludedAttributes`, plus `Content-Type`, `Location` and `ETag`
//! - [`ErrorResponseWriter`] - SCIM error bodies with the classified status
//! - [`ScimError`] - Classified or unclassified failures handed to the error writer
//! - [`ResponseSink`] - Transport capability both writers write to
//!
//! # Quick Start
//!
//! ```rust
//! use scim_response::{HttpResponseSink, Resource, ScimError, SerializeOptions};
//! use scim_response::{write_error, write_resource};
//! use serde_json::json;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let resource = Resource::from_json("User".to_string(), json!({
//!     "id": "2819c223",
//!     "userName": "bjensen"
//! }))?;
//!
//! let mut ok = HttpResponseSink::new();
//! write_resource(&mut ok, &resource, &[SerializeOptions::include(["userName"])])?;
//! assert_eq!(ok.header("Content-Type"), Some("application/json+scim"));
//!
//! let mut failed = HttpResponseSink::new();
//! write_error(&mut failed, &ScimError::not_found("User 2819c223 not found"))?;
//! assert_eq!(failed.status().as_u16(), 404);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod resource;
pub mod response;
pub mod serialization;

// Re-export commonly used types for convenience
pub use error::{
    ProtocolError, ScimError, ScimResult, SerializationError, ValidationError, WriteError,
    WriteResult,
};
pub use resource::{Meta, Resource};
pub use response::{
    ErrorBody, ErrorResponseWriter, HttpResponseSink, ResourceResponseWriter, ResponseSink,
    SCIM_CONTENT_TYPE, write_error, write_resource,
};
pub use serialization::{JsonSerializer, ResourceSerializer, SerializeOptions, SerializerConfig};
