//! Hand-rolled HTTP/1.x response parsing over a fully buffered byte stream
//!
//! The buffer is split with explicit substring searches: the first CRLF ends
//! the status line, the first blank line ("\r\n\r\n") ends the headers. No
//! header map is built. `Content-Length` is located only to count its bytes
//! for the "Total response bytes" figure; it never truncates or validates the
//! body, which always runs to the end of the buffer.

use std::ops::Range;

use bytes::Bytes;
use http::StatusCode;
use memchr::memmem;

pub const CRLF: &[u8] = b"\r\n";
pub const BODY_BOUNDARY: &[u8] = b"\r\n\r\n";
const CONTENT_LENGTH: &[u8] = b"content-length:";
const STATUS_PREFIX: &str = "HTTP/1.";
/// Bytes the accounting adds for the status line terminator.
const STATUS_LINE_OVERHEAD: usize = 4;

/// Result of parsing one raw response buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedResponse {
    /// No CRLF anywhere: nothing is emitted and nothing is cached
    Malformed,
    Response(HttpResponse),
}

impl ParsedResponse {
    /// Parse a complete response buffer.
    #[must_use]
    pub fn parse(raw: &Bytes) -> Self {
        let Some(status_end) = memmem::find(raw, CRLF) else {
            tracing::debug!(target: "webcache::parser", len = raw.len(), "no CRLF in response");
            return Self::Malformed;
        };

        let status_line = raw.slice(..status_end);
        let status = parse_status_code(&status_line);

        if status >= 400 {
            tracing::debug!(target: "webcache::parser", status, "upstream error status");
            return Self::Response(HttpResponse {
                status_line,
                status,
                content_length: None,
                body: None,
            });
        }

        let headers_start = status_end + CRLF.len();
        let boundary = memmem::find(raw, BODY_BOUNDARY);

        // Header block keeps the CRLF that terminates its last line.
        let headers = match boundary {
            Some(b) if b >= headers_start => headers_start..b + CRLF.len(),
            Some(_) => headers_start..headers_start,
            None => headers_start..raw.len(),
        };
        let content_length = find_content_length(raw, headers);

        let body = match boundary {
            Some(b) if (200..400).contains(&status) => Some(raw.slice(b + BODY_BOUNDARY.len()..)),
            _ => None,
        };

        tracing::debug!(
            target: "webcache::parser",
            status,
            body_len = body.as_ref().map_or(0, Bytes::len),
            has_boundary = boundary.is_some(),
            "parsed response"
        );

        Self::Response(HttpResponse {
            status_line,
            status,
            content_length,
            body,
        })
    }
}

/// A located `Content-Length` header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLength {
    /// Header line length including its CRLF
    pub span: usize,
    /// Raw text after the colon, trimmed
    pub value: String,
}

/// The parts of a response the fetch pipeline consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    status_line: Bytes,
    status: u16,
    content_length: Option<ContentLength>,
    body: Option<Bytes>,
}

impl HttpResponse {
    /// Raw status line, without its CRLF.
    #[must_use]
    pub fn status_line(&self) -> &Bytes {
        &self.status_line
    }

    #[must_use]
    pub fn status_line_lossy(&self) -> String {
        String::from_utf8_lossy(&self.status_line).into_owned()
    }

    /// Numeric status; 0 when the status line did not match `HTTP/1.<minor> <code>`.
    #[must_use]
    pub fn status(&self) -> u16 {
        self.status
    }

    #[must_use]
    pub fn status_code(&self) -> Option<StatusCode> {
        StatusCode::from_u16(self.status).ok()
    }

    /// 200..=399: the body is extracted and may be cached.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..400).contains(&self.status)
    }

    /// 400 and above: only the status line is surfaced.
    #[must_use]
    pub fn is_upstream_error(&self) -> bool {
        self.status >= 400
    }

    #[must_use]
    pub fn content_length(&self) -> Option<&ContentLength> {
        self.content_length.as_ref()
    }

    /// Body bytes, present only for a success status with a blank-line boundary.
    #[must_use]
    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    /// The cosmetic "Total response bytes" figure.
    ///
    /// Status line plus four, plus the `Content-Length` line if one was found,
    /// plus the body. It matches no single wire quantity.
    #[must_use]
    pub fn accounted_bytes(&self) -> usize {
        self.status_line.len()
            + STATUS_LINE_OVERHEAD
            + self.content_length.as_ref().map_or(0, |cl| cl.span)
            + self.body.as_ref().map_or(0, Bytes::len)
    }
}

/// `sscanf("HTTP/1.%*d %d")` semantics: 0 when the pattern does not match.
fn parse_status_code(status_line: &[u8]) -> u16 {
    let line = String::from_utf8_lossy(status_line);
    let Some(rest) = line.strip_prefix(STATUS_PREFIX) else {
        return 0;
    };

    let minor_end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    if minor_end == 0 {
        return 0;
    }

    let rest = rest[minor_end..].trim_start();
    let code_end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    rest[..code_end].parse().unwrap_or(0)
}

fn find_content_length(raw: &[u8], headers: Range<usize>) -> Option<ContentLength> {
    let mut rest = &raw[headers];

    while !rest.is_empty() {
        let (line, terminated) = match memmem::find(rest, CRLF) {
            Some(end) => (&rest[..end], true),
            None => (rest, false),
        };

        if terminated
            && line.len() >= CONTENT_LENGTH.len()
            && line[..CONTENT_LENGTH.len()].eq_ignore_ascii_case(CONTENT_LENGTH)
        {
            let value = String::from_utf8_lossy(&line[CONTENT_LENGTH.len()..])
                .trim()
                .to_string();
            return Some(ContentLength {
                span: line.len() + CRLF.len(),
                value,
            });
        }

        if !terminated {
            break;
        }
        rest = &rest[line.len() + CRLF.len()..];
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &'static [u8]) -> HttpResponse {
        match ParsedResponse::parse(&Bytes::from_static(raw)) {
            ParsedResponse::Response(response) => response,
            ParsedResponse::Malformed => panic!("expected a response"),
        }
    }

    #[test]
    fn ok_response_with_body() {
        let response = parse(b"HTTP/1.0 200 OK\r\nContent-Length: 5\r\n\r\nhello");
        assert_eq!(response.status(), 200);
        assert_eq!(response.status_code(), Some(StatusCode::OK));
        assert_eq!(&response.status_line()[..], b"HTTP/1.0 200 OK");
        assert_eq!(response.body().map(Bytes::as_ref), Some(&b"hello"[..]));

        let cl = response.content_length().expect("content-length located");
        assert_eq!(cl.span, "Content-Length: 5\r\n".len());
        assert_eq!(cl.value, "5");

        // 15 + 4 + 19 + 5
        assert_eq!(response.accounted_bytes(), 43);
    }

    #[test]
    fn no_crlf_is_malformed() {
        let raw = Bytes::from_static(b"garbage without any line ending");
        assert_eq!(ParsedResponse::parse(&raw), ParsedResponse::Malformed);
        assert_eq!(ParsedResponse::parse(&Bytes::new()), ParsedResponse::Malformed);
    }

    #[test]
    fn error_status_skips_body() {
        let response = parse(b"HTTP/1.1 404 Not Found\r\nContent-Length: 9\r\n\r\nnot found");
        assert!(response.is_upstream_error());
        assert!(!response.is_success());
        assert!(response.body().is_none());
        assert!(response.content_length().is_none());
    }

    #[test]
    fn missing_boundary_means_no_body() {
        let response = parse(b"HTTP/1.0 200 OK\r\nContent-Length: 5\r\n");
        assert!(response.is_success());
        assert!(response.body().is_none());
        assert_eq!(response.content_length().map(|cl| cl.span), Some(19));
    }

    #[test]
    fn body_length_ignores_declared_length() {
        let response = parse(b"HTTP/1.0 200 OK\r\nContent-Length: 2\r\n\r\nlonger body");
        assert_eq!(response.body().map(Bytes::len), Some(11));
        assert_eq!(response.content_length().map(|cl| cl.value.as_str()), Some("2"));
    }

    #[test]
    fn body_may_contain_boundaries_and_binary() {
        let response = parse(b"HTTP/1.0 200 OK\r\n\r\n\x00\x01\r\n\r\n\xff");
        assert_eq!(
            response.body().map(Bytes::as_ref),
            Some(&b"\x00\x01\r\n\r\n\xff"[..])
        );
        assert!(response.content_length().is_none());
    }

    #[test]
    fn content_length_is_only_searched_in_headers() {
        let response = parse(b"HTTP/1.0 200 OK\r\nX: y\r\n\r\nContent-Length: 3\r\n");
        assert!(response.content_length().is_none());
    }

    #[test]
    fn content_length_match_is_case_insensitive() {
        let response = parse(b"HTTP/1.0 200 OK\r\ncontent-length:3\r\n\r\nabc");
        assert_eq!(response.content_length().map(|cl| cl.span), Some(18));
    }

    #[test]
    fn redirect_status_still_yields_body() {
        let response = parse(b"HTTP/1.0 301 Moved Permanently\r\nLocation: /x\r\n\r\nmoved");
        assert!(response.is_success());
        assert_eq!(response.body().map(Bytes::len), Some(5));
    }

    #[test]
    fn unparseable_status_is_zero_and_bodyless() {
        let response = parse(b"ICY 200 OK\r\n\r\nstream");
        assert_eq!(response.status(), 0);
        assert!(response.status_code().is_none());
        assert!(response.body().is_none());
        assert!(!response.is_upstream_error());
    }

    #[test]
    fn informational_status_has_no_body() {
        let response = parse(b"HTTP/1.1 100 Continue\r\n\r\nlater");
        assert_eq!(response.status(), 100);
        assert!(response.body().is_none());
    }

    #[test]
    fn status_code_pattern() {
        assert_eq!(parse_status_code(b"HTTP/1.0 200 OK"), 200);
        assert_eq!(parse_status_code(b"HTTP/1.1   503"), 503);
        assert_eq!(parse_status_code(b"HTTP/2 200"), 0);
        assert_eq!(parse_status_code(b"HTTP/1. 200"), 0);
        assert_eq!(parse_status_code(b"HTTP/1.0 abc"), 0);
    }
}
