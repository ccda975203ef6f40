//! Attribute path parsing for `attributes` / `excludedAttributes`.
//!
//! Paths follow RFC 7644 §3.10: an optional schema URN prefix, an attribute
//! name and at most one sub-attribute, e.g. `name.givenName` or
//! `urn:ietf:params:scim:schemas:extension:enterprise:2.0:User:employeeNumber`.
//! Names are case-insensitive.

use crate::error::{SerializationError, SerializationResult};
use std::fmt;

/// Maximum number of dot-separated segments after the URN prefix.
const MAX_DEPTH: usize = 2;

/// A parsed attribute path, resolved against a resource's schemas.
///
/// `keys` addresses the JSON representation directly: for an extension
/// attribute the first key is the extension URN, for a core attribute the
/// core schema prefix is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributePath {
    keys: Vec<String>,
}

impl AttributePath {
    /// Parse `raw`, resolving any URN prefix against `schemas`.
    ///
    /// The first entry of `schemas` is the core schema; a URN equal to it is
    /// stripped. Any other URN selects the extension object keyed by it.
    pub fn parse(raw: &str, schemas: &[String]) -> SerializationResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SerializationError::invalid_path(raw, "empty path"));
        }

        let (urn, attribute) = if starts_with_ignore_case(trimmed, "urn:") {
            Self::split_urn(trimmed, schemas)
        } else {
            (None, trimmed)
        };

        if urn.is_some_and(|urn| attribute.is_empty() && trimmed.len() > urn.len()) {
            return Err(SerializationError::invalid_path(
                raw,
                "trailing separator after schema URN",
            ));
        }

        let core_schema = schemas.first().map(String::as_str);
        let mut keys = Vec::with_capacity(MAX_DEPTH + 1);
        match urn {
            Some(urn) if core_schema.is_some_and(|core| core.eq_ignore_ascii_case(urn)) => {
                if attribute.is_empty() {
                    return Err(SerializationError::invalid_path(
                        raw,
                        "core schema URN without attribute name",
                    ));
                }
            }
            Some(urn) => keys.push(urn.to_string()),
            None => {}
        }

        if attribute.is_empty() {
            return Ok(Self { keys });
        }

        let segments: Vec<&str> = attribute.split('.').collect();
        if segments.len() > MAX_DEPTH {
            return Err(SerializationError::invalid_path(
                raw,
                "only one level of sub-attribute is allowed",
            ));
        }
        for segment in segments {
            validate_segment(raw, segment)?;
            keys.push(segment.to_string());
        }

        Ok(Self { keys })
    }

    /// Split a URN-prefixed path into `(urn, attribute)`.
    ///
    /// Known schemas win (longest first), so a bare extension URN selects the
    /// whole extension object. Unknown URNs are split at the last colon.
    fn split_urn<'a>(path: &'a str, schemas: &[String]) -> (Option<&'a str>, &'a str) {
        let known = schemas
            .iter()
            .filter(|schema| starts_with_ignore_case(path, schema))
            .filter(|schema| {
                path.len() == schema.len() || path.as_bytes()[schema.len()] == b':'
            })
            .max_by_key(|schema| schema.len());

        if let Some(schema) = known {
            let (urn, rest) = path.split_at(schema.len());
            return (Some(urn), rest.strip_prefix(':').unwrap_or(rest));
        }

        match path.rfind(':') {
            Some(index) => (Some(&path[..index]), &path[index + 1..]),
            None => (None, path),
        }
    }

    /// The JSON keys this path addresses, outermost first.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }
}

impl fmt::Display for AttributePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keys.join("."))
    }
}

fn validate_segment(raw: &str, segment: &str) -> SerializationResult<()> {
    if segment.is_empty() {
        return Err(SerializationError::invalid_path(raw, "empty path segment"));
    }

    let valid = segment
        .char_indices()
        .all(|(i, c)| c.is_ascii_alphanumeric() || c == '_' || c == '-' || (i == 0 && c == '$'));
    if !valid {
        return Err(SerializationError::invalid_path(
            raw,
            format!("invalid character in '{}'", segment),
        ));
    }

    Ok(())
}

fn starts_with_ignore_case(haystack: &str, prefix: &str) -> bool {
    haystack.len() >= prefix.len()
        && haystack.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER: &str = "urn:ietf:params:scim:schemas:core:2.0:User";
    const ENTERPRISE: &str = "urn:ietf:params:scim:schemas:extension:enterprise:2.0:User";

    fn schemas() -> Vec<String> {
        vec![USER.to_string(), ENTERPRISE.to_string()]
    }

    fn keys(raw: &str) -> Vec<String> {
        AttributePath::parse(raw, &schemas()).unwrap().keys().to_vec()
    }

    #[test]
    fn test_simple_paths() {
        assert_eq!(keys("userName"), vec!["userName"]);
        assert_eq!(keys(" name.givenName "), vec!["name", "givenName"]);
        assert_eq!(keys("members.$ref"), vec!["members", "$ref"]);
    }

    #[test]
    fn test_core_urn_is_stripped() {
        assert_eq!(keys(&format!("{}:name.familyName", USER)), vec!["name", "familyName"]);
        assert_eq!(
            keys("URN:IETF:PARAMS:SCIM:SCHEMAS:CORE:2.0:USER:userName"),
            vec!["userName"]
        );
    }

    #[test]
    fn test_extension_urn_is_kept() {
        assert_eq!(
            keys(&format!("{}:employeeNumber", ENTERPRISE)),
            vec![ENTERPRISE, "employeeNumber"]
        );
        assert_eq!(keys(ENTERPRISE), vec![ENTERPRISE]);
        assert_eq!(
            keys(&format!("{}:manager.value", ENTERPRISE)),
            vec![ENTERPRISE, "manager", "value"]
        );
    }

    #[test]
    fn test_unknown_urn_split_at_last_colon() {
        assert_eq!(
            keys("urn:example:custom:1.0:Device:serial"),
            vec!["urn:example:custom:1.0:Device", "serial"]
        );
    }

    #[test]
    fn test_invalid_paths() {
        for raw in ["", "  ", "name.", ".name", "name..givenName", "a.b.c", "user name", "na$me"] {
            let result = AttributePath::parse(raw, &schemas());
            assert!(
                matches!(result, Err(SerializationError::InvalidPath { .. })),
                "path {:?} should be rejected",
                raw
            );
        }

        assert!(AttributePath::parse(USER, &schemas()).is_err());
        for raw in [
            format!("{}:", ENTERPRISE),
            format!("{}:", USER),
            "urn:example:custom:1.0:Device:".to_string(),
        ] {
            assert!(
                matches!(
                    AttributePath::parse(&raw, &schemas()),
                    Err(SerializationError::InvalidPath { .. })
                ),
                "path {:?} should be rejected",
                raw
            );
        }
    }
}
