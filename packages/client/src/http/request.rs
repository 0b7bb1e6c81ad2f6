//! HTTP/1.0 GET request rendering

use std::fmt;

use super::url::ParsedUrl;

/// A fully rendered HTTP/1.0 GET request.
///
/// The wire form is fixed: request line, `Host` with an explicit port,
/// `Connection: close`, blank line. No other headers, no body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    host: String,
    port: u16,
    path: String,
    wire: String,
}

impl HttpRequest {
    #[must_use]
    pub fn get(url: &ParsedUrl) -> Self {
        let wire = format!(
            "GET {} HTTP/1.0\r\nHost: {}:{}\r\nConnection: close\r\n\r\n",
            url.path(),
            url.host(),
            url.port()
        );

        Self {
            host: url.host().to_string(),
            port: url.port(),
            path: url.path().to_string(),
            wire,
        }
    }

    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn authority(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.wire
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.wire.as_bytes()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.wire.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.wire.is_empty()
    }
}

impl fmt::Display for HttpRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.wire)
    }
}
