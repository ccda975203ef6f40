//! Core SCIM resource representation.
//!
//! A [`Resource`] keeps the common attributes (`id`, `schemas`, `externalId`,
//! `meta`) as typed fields and everything else as flexible JSON. The response
//! layer never mutates a resource; it only reads it.

use crate::error::{ValidationError, ValidationResult};
use crate::resource::meta::Meta;

use serde_json::{Map, Value};

/// Prefix of the core SCIM schema URNs (`urn:ietf:params:scim:schemas:core:2.0:User`).
pub const CORE_SCHEMA_PREFIX: &str = "urn:ietf:params:scim:schemas:core:2.0:";

/// Generic SCIM resource representation.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    /// The type of this resource (e.g., "User", "Group")
    pub resource_type: String,
    /// Resource identifier assigned by the service provider
    pub id: Option<String>,
    /// Schema URIs; the first entry is the core schema
    pub schemas: Vec<String>,
    /// Identifier assigned by the provisioning client
    pub external_id: Option<String>,
    /// Resource metadata
    pub meta: Option<Meta>,
    /// All remaining attributes, including extension objects keyed by URN
    pub attributes: Map<String, Value>,
}

impl Resource {
    /// Create a new resource from JSON data.
    ///
    /// Core attributes are extracted and validated; the rest are kept as-is.
    ///
    /// # Example
    /// ```rust
    /// use scim_response::Resource;
    /// use serde_json::json;
    ///
    /// fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let resource = Resource::from_json("User".to_string(), json!({
    ///         "id": "2819c223",
    ///         "userName": "bjensen",
    ///         "meta": {
    ///             "resourceType": "User",
    ///             "created": "2011-08-01T18:29:49.793Z",
    ///             "lastModified": "2011-08-01T18:29:49.793Z",
    ///             "location": "https://example.com/v2/Users/2819c223",
    ///             "version": "W/\"f250dd84f0671c3\""
    ///         }
    ///     }))?;
    ///     assert_eq!(resource.meta_location_or_empty(), "https://example.com/v2/Users/2819c223");
    ///     Ok(())
    /// }
    /// ```
    pub fn from_json(resource_type: String, data: Value) -> ValidationResult<Self> {
        let obj = data
            .as_object()
            .ok_or_else(|| ValidationError::custom("Resource must be a JSON object"))?;

        let id = Self::extract_id(obj)?;
        let schemas = Self::extract_schemas(obj, &resource_type)?;
        let external_id = Self::extract_external_id(obj)?;
        let meta = Self::extract_meta(obj)?;

        let mut attributes = obj.clone();
        attributes.remove("id");
        attributes.remove("schemas");
        attributes.remove("externalId");
        attributes.remove("meta");

        Ok(Self {
            resource_type,
            id,
            schemas,
            external_id,
            meta,
            attributes,
        })
    }

    /// Create a resource from already validated parts.
    pub fn new(
        resource_type: String,
        id: Option<String>,
        schemas: Vec<String>,
        meta: Option<Meta>,
        attributes: Map<String, Value>,
    ) -> Self {
        Self {
            resource_type,
            id,
            schemas,
            external_id: None,
            meta,
            attributes,
        }
    }

    fn extract_id(obj: &Map<String, Value>) -> ValidationResult<Option<String>> {
        match obj.get("id") {
            None => Ok(None),
            Some(Value::String(id)) if id.is_empty() => Err(ValidationError::EmptyId),
            Some(Value::String(id)) => Ok(Some(id.clone())),
            Some(other) => Err(ValidationError::InvalidIdFormat {
                id: other.to_string(),
            }),
        }
    }

    fn extract_schemas(
        obj: &Map<String, Value>,
        resource_type: &str,
    ) -> ValidationResult<Vec<String>> {
        let Some(schemas_value) = obj.get("schemas") else {
            return Ok(vec![format!("{}{}", CORE_SCHEMA_PREFIX, resource_type)]);
        };

        let schemas_array = schemas_value
            .as_array()
            .ok_or_else(|| ValidationError::custom("'schemas' must be an array"))?;
        if schemas_array.is_empty() {
            return Err(ValidationError::EmptySchemas);
        }

        schemas_array
            .iter()
            .map(|schema| match schema.as_str() {
                Some(uri) if uri.starts_with("urn:") => Ok(uri.to_string()),
                _ => Err(ValidationError::InvalidSchemaUri {
                    uri: schema.to_string(),
                }),
            })
            .collect()
    }

    fn extract_external_id(obj: &Map<String, Value>) -> ValidationResult<Option<String>> {
        match obj.get("externalId") {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(external_id)) => Ok(Some(external_id.clone())),
            Some(_) => Err(ValidationError::InvalidExternalId),
        }
    }

    fn extract_meta(obj: &Map<String, Value>) -> ValidationResult<Option<Meta>> {
        let Some(meta_value) = obj.get("meta") else {
            return Ok(None);
        };
        let meta_obj = meta_value
            .as_object()
            .ok_or(ValidationError::InvalidMetaStructure)?;

        let resource_type = match meta_obj.get("resourceType") {
            Some(Value::String(rt)) => rt.clone(),
            Some(_) => return Err(ValidationError::InvalidMetaStructure),
            None => return Err(ValidationError::MissingResourceType),
        };

        let created = Self::extract_timestamp(meta_obj, "created")
            .ok_or(ValidationError::InvalidCreatedDateTime)?;
        let last_modified = Self::extract_timestamp(meta_obj, "lastModified")
            .ok_or(ValidationError::InvalidModifiedDateTime)?;

        let location = match meta_obj.get("location") {
            None => None,
            Some(Value::String(location)) => Some(location.clone()),
            Some(_) => return Err(ValidationError::InvalidLocationUri),
        };
        let version = match meta_obj.get("version") {
            None => None,
            Some(Value::String(version)) => Some(version.clone()),
            Some(_) => return Err(ValidationError::InvalidVersionFormat),
        };

        Meta::new(resource_type, created, last_modified, location, version).map(Some)
    }

    fn extract_timestamp(
        meta_obj: &Map<String, Value>,
        key: &str,
    ) -> Option<chrono::DateTime<chrono::Utc>> {
        let raw = meta_obj.get(key)?.as_str()?;
        chrono::DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.with_timezone(&chrono::Utc))
    }

    /// Get the unique identifier of this resource.
    pub fn get_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Get the external id if present.
    pub fn get_external_id(&self) -> Option<&str> {
        self.external_id.as_deref()
    }

    /// Get an attribute value from the resource.
    pub fn get_attribute(&self, attribute_name: &str) -> Option<&Value> {
        self.attributes.get(attribute_name)
    }

    pub fn get_schemas(&self) -> &[String] {
        &self.schemas
    }

    pub fn get_meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }

    /// `meta.location`, or an empty string when the resource has none.
    pub fn meta_location_or_empty(&self) -> &str {
        self.meta
            .as_ref()
            .and_then(Meta::location)
            .unwrap_or_default()
    }

    /// `meta.version`, or an empty string when the resource has none.
    pub fn meta_version_or_empty(&self) -> &str {
        self.meta
            .as_ref()
            .and_then(Meta::version)
            .unwrap_or_default()
    }

    /// Convert the resource to a single JSON object.
    pub fn to_json(&self) -> serde_json::Result<Value> {
        let mut result = self.attributes.clone();

        let schemas = self.schemas.iter().cloned().map(Value::String).collect();
        result.insert("schemas".to_string(), Value::Array(schemas));

        if let Some(ref id) = self.id {
            result.insert("id".to_string(), Value::String(id.clone()));
        }

        if let Some(ref external_id) = self.external_id {
            result.insert("externalId".to_string(), Value::String(external_id.clone()));
        }

        if let Some(ref meta) = self.meta {
            result.insert("meta".to_string(), serde_json::to_value(meta)?);
        }

        Ok(Value::Object(result))
    }
}
