//! SCIM resource model consumed by the response writers.
//!
//! # Key Components
//!
//! * [`Resource`] - SCIM resource with typed common attributes
//! * [`Meta`] - Validated resource metadata (`location`, `version`, timestamps)

pub mod meta;
#[allow(clippy::module_inception)]
pub mod resource;
pub mod serialization;

pub use meta::Meta;
pub use resource::{CORE_SCHEMA_PREFIX, Resource};
