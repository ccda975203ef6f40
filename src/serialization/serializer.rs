//! Resource serializers.
//!
//! [`ResourceSerializer`] is the seam the resource response writer depends
//! on. [`JsonSerializer`] is the standard implementation: it renders the
//! resource to JSON and applies `attributes` / `excludedAttributes`.

use crate::error::SerializationResult;
use crate::resource::Resource;
use crate::serialization::filter;
use crate::serialization::options::{Selection, SerializeOptions};

/// Renders a resource to its wire form.
///
/// Implementations receive the options exactly as the caller supplied them.
pub trait ResourceSerializer {
    fn serialize(
        &self,
        resource: &Resource,
        options: &[SerializeOptions],
    ) -> SerializationResult<Vec<u8>>;
}

impl<T: ResourceSerializer + ?Sized> ResourceSerializer for &T {
    fn serialize(
        &self,
        resource: &Resource,
        options: &[SerializeOptions],
    ) -> SerializationResult<Vec<u8>> {
        (**self).serialize(resource, options)
    }
}

/// Configuration for [`JsonSerializer`].
#[derive(Debug, Clone)]
pub struct SerializerConfig {
    /// Emit indented JSON instead of the compact form
    pub pretty: bool,

    /// Top-level attributes that survive any selection (`returned: always`)
    pub always_returned: Vec<String>,

    /// Attribute paths never emitted (`returned: never`)
    pub never_returned: Vec<String>,
}

impl Default for SerializerConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            always_returned: vec!["id".to_string(), "schemas".to_string()],
            never_returned: vec!["password".to_string()],
        }
    }
}

/// JSON serializer with SCIM attribute selection.
///
/// # Example
///
/// ```rust
/// use scim_response::Resource;
/// use scim_response::serialization::{JsonSerializer, ResourceSerializer, SerializeOptions};
/// use serde_json::json;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let resource = Resource::from_json("User".to_string(), json!({
///         "id": "1",
///         "userName": "bjensen",
///         "displayName": "Babs"
///     }))?;
///
///     let bytes = JsonSerializer::new().serialize(
///         &resource,
///         &[SerializeOptions::include(["userName"])],
///     )?;
///     let value: serde_json::Value = serde_json::from_slice(&bytes)?;
///     assert!(value.get("displayName").is_none());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct JsonSerializer {
    config: SerializerConfig,
}

impl JsonSerializer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SerializerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SerializerConfig {
        &self.config
    }
}

impl ResourceSerializer for JsonSerializer {
    fn serialize(
        &self,
        resource: &Resource,
        options: &[SerializeOptions],
    ) -> SerializationResult<Vec<u8>> {
        let selection = Selection::from_options(options, resource.get_schemas())?;
        let value = filter::apply(
            resource.to_json()?,
            &selection,
            &self.config.always_returned,
            &self.config.never_returned,
        );

        let bytes = if self.config.pretty {
            serde_json::to_vec_pretty(&value)?
        } else {
            serde_json::to_vec(&value)?
        };
        Ok(bytes)
    }
}
