//! Meta value object for SCIM resource metadata.
//!
//! Meta carries the common metadata of every SCIM resource. The response
//! writer reads `location` and `version` from it to populate the `Location`
//! and `ETag` headers.

use crate::error::{ValidationError, ValidationResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated SCIM meta attribute.
///
/// ## Validation Rules
///
/// - Resource type must not be empty and must be alphanumeric
/// - Last modified must not be before created timestamp
/// - Location URI, if provided, must be an `http://` or `https://` URI
/// - Version, if provided, must follow ETag format (`"..."` or `W/"..."`)
///
/// ## Examples
///
/// ```rust
/// use scim_response::resource::Meta;
/// use chrono::Utc;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let now = Utc::now();
///     let meta = Meta::new(
///         "User".to_string(),
///         now,
///         now,
///         Some("https://example.com/Users/123".to_string()),
///         Some("W/\"123-456\"".to_string())
///     )?;
///     assert_eq!(meta.version(), Some("W/\"123-456\""));
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    #[serde(rename = "resourceType")]
    pub resource_type: String,
    pub created: DateTime<Utc>,
    #[serde(rename = "lastModified")]
    pub last_modified: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub version: Option<String>,
}

impl Meta {
    /// Create a new Meta with full attributes.
    ///
    /// # Returns
    ///
    /// * `Ok(Meta)` - If all values are valid
    /// * `Err(ValidationError)` - If any value violates validation rules
    pub fn new(
        resource_type: String,
        created: DateTime<Utc>,
        last_modified: DateTime<Utc>,
        location: Option<String>,
        version: Option<String>,
    ) -> ValidationResult<Self> {
        Self::validate_resource_type(&resource_type)?;
        Self::validate_timestamps(created, last_modified)?;
        if let Some(ref location_val) = location {
            Self::validate_location(location_val)?;
        }
        if let Some(ref version_val) = version {
            Self::validate_version(version_val)?;
        }

        Ok(Self {
            resource_type,
            created,
            last_modified,
            location,
            version,
        })
    }

    /// Create a Meta with just resource type and timestamps.
    pub fn new_simple(
        resource_type: String,
        created: DateTime<Utc>,
        last_modified: DateTime<Utc>,
    ) -> ValidationResult<Self> {
        Self::new(resource_type, created, last_modified, None, None)
    }

    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    pub fn last_modified(&self) -> DateTime<Utc> {
        self.last_modified
    }

    /// Get the location URI.
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Get the version identifier (ETag).
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    fn validate_resource_type(resource_type: &str) -> ValidationResult<()> {
        if resource_type.is_empty() {
            return Err(ValidationError::MissingResourceType);
        }

        if !resource_type
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_')
        {
            return Err(ValidationError::InvalidResourceType {
                resource_type: resource_type.to_string(),
            });
        }

        Ok(())
    }

    fn validate_timestamps(
        created: DateTime<Utc>,
        last_modified: DateTime<Utc>,
    ) -> ValidationResult<()> {
        if last_modified < created {
            return Err(ValidationError::custom(
                "Last modified timestamp cannot be before created timestamp",
            ));
        }

        Ok(())
    }

    fn validate_location(location: &str) -> ValidationResult<()> {
        if !location.starts_with("http://") && !location.starts_with("https://") {
            return Err(ValidationError::InvalidLocationUri);
        }

        Ok(())
    }

    fn validate_version(version: &str) -> ValidationResult<()> {
        let quoted = version.strip_prefix("W/").unwrap_or(version);
        if quoted.len() < 2 || !quoted.starts_with('"') || !quoted.ends_with('"') {
            return Err(ValidationError::InvalidVersionFormat);
        }

        Ok(())
    }
}

impl fmt::Display for Meta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Meta(resourceType={}, created={}, lastModified={})",
            self.resource_type,
            self.created.to_rfc3339(),
            self.last_modified.to_rfc3339()
        )
    }
}
