//! Attribute-selecting resource serialization.
//!
//! Implements the SCIM `attributes` and `excludedAttributes` semantics
//! (RFC 7644 §3.9) on top of a resource's JSON representation.
//!
//! * [`SerializeOptions`] - include/exclude directives as supplied by the caller
//! * [`AttributePath`] - parsed, URN-aware attribute paths
//! * [`ResourceSerializer`] - serializer seam used by the response writer
//! * [`JsonSerializer`] - the standard JSON implementation

mod filter;
pub mod options;
pub mod path;
pub mod serializer;

pub use options::{Selection, SerializeOptions};
pub use path::AttributePath;
pub use serializer::{JsonSerializer, ResourceSerializer, SerializerConfig};
