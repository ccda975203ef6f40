//! Rendering of a resource onto a response.

use crate::error::WriteResult;
use crate::resource::Resource;
use crate::response::sink::ResponseSink;
use crate::response::{CONTENT_TYPE, ETAG, LOCATION, SCIM_CONTENT_TYPE};
use crate::serialization::{JsonSerializer, ResourceSerializer, SerializeOptions};
use log::debug;

/// Writes a resource to a [`ResponseSink`].
///
/// The resource is serialized first, honouring the caller's attribute
/// selection. On success the writer sets `Content-Type`, then `Location` and
/// `ETag` from `meta.location` / `meta.version` when present, and finally
/// writes the body. The status code is never touched; set it beforehand.
///
/// When serialization fails nothing is written to the sink.
#[derive(Debug, Clone, Default)]
pub struct ResourceResponseWriter<S = JsonSerializer> {
    serializer: S,
}

impl ResourceResponseWriter<JsonSerializer> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: ResourceSerializer> ResourceResponseWriter<S> {
    pub fn with_serializer(serializer: S) -> Self {
        Self { serializer }
    }

    pub fn serializer(&self) -> &S {
        &self.serializer
    }

    pub fn write<W>(
        &self,
        sink: &mut W,
        resource: &Resource,
        options: &[SerializeOptions],
    ) -> WriteResult<()>
    where
        W: ResponseSink + ?Sized,
    {
        let raw = self.serializer.serialize(resource, options)?;

        sink.set_header(CONTENT_TYPE, SCIM_CONTENT_TYPE);

        let location = resource.meta_location_or_empty();
        if !location.is_empty() {
            sink.set_header(LOCATION, location);
        }

        let version = resource.meta_version_or_empty();
        if !version.is_empty() {
            sink.set_header(ETAG, version);
        }

        debug!(
            "Writing {} resource {} ({} bytes)",
            resource.resource_type,
            resource.get_id().unwrap_or("<no id>"),
            raw.len()
        );
        sink.write_body(&raw)?;
        Ok(())
    }
}

/// Write `resource` with the default [`JsonSerializer`].
pub fn write_resource<W>(
    sink: &mut W,
    resource: &Resource,
    options: &[SerializeOptions],
) -> WriteResult<()>
where
    W: ResponseSink + ?Sized,
{
    ResourceResponseWriter::new().write(sink, resource, options)
}
