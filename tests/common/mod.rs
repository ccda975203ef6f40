//! Common test utilities for response writer testing.
//!
//! Provides recording and failing sinks, a failing serializer and logger
//! setup shared by the integration tests.

#![allow(dead_code)]

use scim_response::error::{SerializationError, SerializationResult};
use scim_response::{Resource, ResourceSerializer, ResponseSink, SerializeOptions};
use std::io;

pub mod fixtures;

/// One call made against a [`RecordingSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkCall {
    Header(String, String),
    Status(u16),
    Body(Vec<u8>),
}

/// Sink that records every call in order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub calls: Vec<SinkCall>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last value set for `name` (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.calls.iter().rev().find_map(|call| match call {
            SinkCall::Header(n, v) if n.eq_ignore_ascii_case(name) => Some(v.as_str()),
            _ => None,
        })
    }

    pub fn header_count(&self, name: &str) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, SinkCall::Header(n, _) if n.eq_ignore_ascii_case(name)))
            .count()
    }

    pub fn statuses(&self) -> Vec<u16> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                SinkCall::Status(status) => Some(*status),
                _ => None,
            })
            .collect()
    }

    pub fn bodies(&self) -> Vec<&[u8]> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                SinkCall::Body(body) => Some(body.as_slice()),
                _ => None,
            })
            .collect()
    }

    pub fn body_json(&self) -> serde_json::Value {
        let bodies = self.bodies();
        assert_eq!(bodies.len(), 1, "expected exactly one body write");
        serde_json::from_slice(bodies[0]).expect("body should be JSON")
    }
}

impl ResponseSink for RecordingSink {
    fn set_header(&mut self, name: &str, value: &str) {
        self.calls
            .push(SinkCall::Header(name.to_string(), value.to_string()));
    }

    fn write_status(&mut self, status: u16) {
        self.calls.push(SinkCall::Status(status));
    }

    fn write_body(&mut self, body: &[u8]) -> io::Result<()> {
        self.calls.push(SinkCall::Body(body.to_vec()));
        Ok(())
    }
}

/// Sink whose body writes fail as if the client disconnected.
#[derive(Debug, Default)]
pub struct BrokenPipeSink {
    pub inner: RecordingSink,
}

impl ResponseSink for BrokenPipeSink {
    fn set_header(&mut self, name: &str, value: &str) {
        self.inner.set_header(name, value);
    }

    fn write_status(&mut self, status: u16) {
        self.inner.write_status(status);
    }

    fn write_body(&mut self, _body: &[u8]) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "client went away"))
    }
}

/// Serializer that always fails with an invalid path error.
#[derive(Debug, Default)]
pub struct FailingSerializer;

pub const FAILING_PATH: &str = "name..givenName";

impl ResourceSerializer for FailingSerializer {
    fn serialize(
        &self,
        _resource: &Resource,
        _options: &[SerializeOptions],
    ) -> SerializationResult<Vec<u8>> {
        Err(SerializationError::invalid_path(FAILING_PATH, "refused"))
    }
}

/// Install a test logger once; repeated calls are harmless.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
