//! Resource fixtures based on the RFC 7643 §8 examples.

use scim_response::Resource;
use serde_json::{Value, json};

pub const USER_SCHEMA: &str = "urn:ietf:params:scim:schemas:core:2.0:User";
pub const ENTERPRISE_SCHEMA: &str = "urn:ietf:params:scim:schemas:extension:enterprise:2.0:User";
pub const USER_LOCATION: &str = "https://example.com/v2/Users/2819c223-7f76-453a-919d-413861904646";
pub const USER_VERSION: &str = "W/\"a330bc54f0671c9\"";

pub fn enterprise_user_json() -> Value {
    json!({
        "schemas": [USER_SCHEMA, ENTERPRISE_SCHEMA],
        "id": "2819c223-7f76-453a-919d-413861904646",
        "externalId": "701984",
        "userName": "bjensen@example.com",
        "password": "t1meMa$heen",
        "name": {
            "formatted": "Ms. Barbara J Jensen, III",
            "familyName": "Jensen",
            "givenName": "Barbara"
        },
        "displayName": "Babs Jensen",
        "emails": [
            {"value": "bjensen@example.com", "type": "work", "primary": true},
            {"value": "babs@jensen.org", "type": "home"}
        ],
        "active": true,
        ENTERPRISE_SCHEMA: {
            "employeeNumber": "701984",
            "costCenter": "4130",
            "manager": {
                "value": "26118915-6090-4610-87e4-49d8ca9f808d",
                "displayName": "John Smith"
            }
        },
        "meta": {
            "resourceType": "User",
            "created": "2010-01-23T04:56:22Z",
            "lastModified": "2011-05-13T04:42:34Z",
            "version": USER_VERSION,
            "location": USER_LOCATION
        }
    })
}

pub fn enterprise_user() -> Resource {
    Resource::from_json("User".to_string(), enterprise_user_json()).expect("valid fixture")
}

/// A freshly built group without any meta attributes.
pub fn bare_group() -> Resource {
    Resource::from_json(
        "Group".to_string(),
        json!({
            "id": "e9e30dba-f08f-4109-8486-d5c6a331660a",
            "displayName": "Tour Guides",
            "members": [{"value": "2819c223-7f76-453a-919d-413861904646", "display": "Babs Jensen"}]
        }),
    )
    .expect("valid fixture")
}

/// A user whose meta has a location but no version.
pub fn unversioned_user() -> Resource {
    Resource::from_json(
        "User".to_string(),
        json!({
            "id": "c3a26dd3",
            "userName": "jsmith",
            "meta": {
                "resourceType": "User",
                "created": "2011-08-01T18:29:49.793Z",
                "lastModified": "2011-08-01T18:29:49.793Z",
                "location": "https://example.com/v2/Users/c3a26dd3"
            }
        }),
    )
    .expect("valid fixture")
}
