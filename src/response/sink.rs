//! Response channel abstraction.
//!
//! The writers only need three capabilities from a transport: set a header,
//! commit a status code and write body bytes. [`HttpResponseSink`] provides
//! them over an `http::Response`; other transports and test doubles implement
//! [`ResponseSink`] directly.

use http::{HeaderMap, HeaderName, HeaderValue, Response, StatusCode};
use log::warn;
use std::io;

/// A generic HTTP response sink.
///
/// Contract expected by the writers:
/// - `set_header` replaces any previous value of the same (case-insensitive)
///   name and is only meaningful before the first body write;
/// - `write_status` is called at most once per response;
/// - `write_body` may fail, in which case the response is in an
///   indeterminate state and must not be written to again.
pub trait ResponseSink {
    fn set_header(&mut self, name: &str, value: &str);

    fn write_status(&mut self, status: u16);

    fn write_body(&mut self, body: &[u8]) -> io::Result<()>;
}

impl<T: ResponseSink + ?Sized> ResponseSink for &mut T {
    fn set_header(&mut self, name: &str, value: &str) {
        (**self).set_header(name, value)
    }

    fn write_status(&mut self, status: u16) {
        (**self).write_status(status)
    }

    fn write_body(&mut self, body: &[u8]) -> io::Result<()> {
        (**self).write_body(body)
    }
}

/// Buffered [`ResponseSink`] producing an `http::Response<Vec<u8>>`.
///
/// Behaves like a standard HTTP response writer: the status defaults to 200,
/// a second status write is ignored, and header changes after the body has
/// started are ignored. Values that are not valid HTTP are dropped with a
/// warning (an invalid status becomes 500).
#[derive(Debug, Default)]
pub struct HttpResponseSink {
    response: Response<Vec<u8>>,
    status_written: bool,
    body_started: bool,
}

impl HttpResponseSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> StatusCode {
        self.response.status()
    }

    pub fn headers(&self) -> &HeaderMap {
        self.response.headers()
    }

    /// Header value as a string, if present and visible ASCII.
    ///
    /// Values holding obs-text (bytes above 0x7f) are stored but read back as
    /// `None` here; use [`HttpResponseSink::headers`] for the raw bytes.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.response
            .headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
    }

    pub fn body(&self) -> &[u8] {
        self.response.body()
    }

    pub fn into_response(self) -> Response<Vec<u8>> {
        self.response
    }
}

impl ResponseSink for HttpResponseSink {
    fn set_header(&mut self, name: &str, value: &str) {
        if self.body_started {
            warn!("Ignoring header '{}' set after the body was written", name);
            return;
        }

        let name = match HeaderName::from_bytes(name.as_bytes()) {
            Ok(name) => name,
            Err(e) => {
                warn!("Dropping invalid header name '{}': {}", name, e);
                return;
            }
        };
        match HeaderValue::from_str(value) {
            Ok(value) => {
                self.response.headers_mut().insert(name, value);
            }
            Err(e) => warn!("Dropping invalid value for header '{}': {}", name, e),
        }
    }

    fn write_status(&mut self, status: u16) {
        if self.status_written {
            warn!(
                "Superfluous status write ({}), response already has {}",
                status,
                self.response.status()
            );
            return;
        }
        self.status_written = true;

        *self.response.status_mut() = StatusCode::from_u16(status).unwrap_or_else(|e| {
            warn!("Invalid status code {}: {}, using 500", status, e);
            StatusCode::INTERNAL_SERVER_ERROR
        });
    }

    fn write_body(&mut self, body: &[u8]) -> io::Result<()> {
        self.status_written = true;
        self.body_started = true;
        self.response.body_mut().extend_from_slice(body);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let sink = HttpResponseSink::new();
        assert_eq!(sink.status(), StatusCode::OK);
        assert!(sink.headers().is_empty());
        assert!(sink.body().is_empty());
    }

    #[test]
    fn test_header_replaced_case_insensitively() {
        let mut sink = HttpResponseSink::new();
        sink.set_header("Content-Type", "text/plain");
        sink.set_header("content-type", "application/json+scim");

        assert_eq!(sink.headers().len(), 1);
        assert_eq!(sink.header("CONTENT-TYPE"), Some("application/json+scim"));
    }

    #[test]
    fn test_status_written_once() {
        let mut sink = HttpResponseSink::new();
        sink.write_status(404);
        sink.write_status(500);
        assert_eq!(sink.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_invalid_status_becomes_internal_error() {
        let mut sink = HttpResponseSink::new();
        sink.write_status(42);
        assert_eq!(sink.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_headers_frozen_after_body() {
        let mut sink = HttpResponseSink::new();
        sink.write_body(b"{}").unwrap();
        sink.set_header("ETag", "\"1\"");
        sink.write_status(201);

        assert!(sink.header("ETag").is_none());
        assert_eq!(sink.status(), StatusCode::OK);
    }

    #[test]
    fn test_invalid_header_dropped() {
        let mut sink = HttpResponseSink::new();
        sink.set_header("Bad Header", "x");
        sink.set_header("Location", "https://example.com/\nUsers");
        assert!(sink.headers().is_empty());
    }

    #[test]
    fn test_obs_text_header_only_visible_through_headers() {
        let mut sink = HttpResponseSink::new();
        sink.set_header("Location", "https://example.com/v2/Users/jürgen");

        assert!(sink.header("Location").is_none());
        assert_eq!(
            sink.headers().get("Location").map(|value| value.as_bytes()),
            Some("https://example.com/v2/Users/jürgen".as_bytes())
        );
    }

    #[test]
    fn test_into_response() {
        let mut sink = HttpResponseSink::new();
        sink.write_status(201);
        sink.set_header("Location", "https://example.com/v2/Users/1");
        sink.write_body(b"{\"id\":\"1\"}").unwrap();

        let response = sink.into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.body(), b"{\"id\":\"1\"}");
    }
}
