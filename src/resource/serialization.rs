//! Serde implementation for SCIM resources.
//!
//! Serializing a [`Resource`] produces its full JSON representation without
//! any attribute selection; see [`crate::serialization`] for the filtering
//! serializer used by the response writer.

use crate::resource::resource::Resource;
use serde::{Serialize, Serializer};

impl Serialize for Resource {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_json()
            .map_err(serde::ser::Error::custom)?
            .serialize(serializer)
    }
}
