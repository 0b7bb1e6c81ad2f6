//! Byte-exact stdout framing

use bytes::Bytes;
use webcache::render::write_outcome;
use webcache_client::{
    CacheEntry, CacheKey, FetchOutcome, HttpRequest, HttpResponse, ParsedResponse, ParsedUrl,
};

const REQUEST: &str = "GET /foo HTTP/1.0\r\nHost: example.com:80\r\nConnection: close\r\n\r\n";

fn request() -> HttpRequest {
    HttpRequest::get(&ParsedUrl::parse("http://example.com/foo").unwrap())
}

fn response(raw: &'static [u8]) -> HttpResponse {
    match ParsedResponse::parse(&Bytes::from_static(raw)) {
        ParsedResponse::Response(response) => response,
        ParsedResponse::Malformed => panic!("fixture should parse"),
    }
}

fn render(outcome: &FetchOutcome) -> Vec<u8> {
    let mut out = Vec::new();
    write_outcome(outcome, &mut out).unwrap();
    out
}

fn request_dump() -> String {
    format!("HTTP request =\n{REQUEST}\nLEN = {}\n", REQUEST.len())
}

#[test]
fn cache_hit_framing() {
    let outcome = FetchOutcome::CacheHit {
        key: CacheKey::new("example.com", "/foo"),
        entry: CacheEntry::new(Bytes::from_static(b"hello")),
    };

    // 17 + 21 + 5
    let expected = "File is given from local filesystem\n\
                    HTTP/1.0 200 OK\r\n\
                    Content-Length: 5\r\n\r\n\
                    hello\n Total response bytes: 43\n";
    assert_eq!(String::from_utf8(render(&outcome)).unwrap(), expected);
}

#[test]
fn cache_hit_with_empty_body() {
    let outcome = FetchOutcome::CacheHit {
        key: CacheKey::new("example.com", "/empty"),
        entry: CacheEntry::new(Bytes::new()),
    };

    let expected = "File is given from local filesystem\n\
                    HTTP/1.0 200 OK\r\n\
                    Content-Length: 0\r\n\r\n\
                    \n Total response bytes: 38\n";
    assert_eq!(String::from_utf8(render(&outcome)).unwrap(), expected);
}

#[test]
fn fetched_framing_counts_content_length_line() {
    let outcome = FetchOutcome::Fetched {
        key: CacheKey::new("example.com", "/foo"),
        request: request(),
        response: response(b"HTTP/1.0 200 OK\r\nContent-Length: 5\r\n\r\nhello"),
        cached: true,
        partial: false,
    };

    // 15 + 4 + 19 + 5
    let expected = format!(
        "{}HTTP/1.0 200 OK\nHTTP/1.0 200 OK\r\nhello\nTotal response bytes: 43\n",
        request_dump()
    );
    assert_eq!(String::from_utf8(render(&outcome)).unwrap(), expected);
}

#[test]
fn fetched_without_boundary_has_no_body() {
    let outcome = FetchOutcome::Fetched {
        key: CacheKey::new("example.com", "/foo"),
        request: request(),
        response: response(b"HTTP/1.0 200 OK\r\nServer: x"),
        cached: false,
        partial: false,
    };

    let expected = format!(
        "{}HTTP/1.0 200 OK\nHTTP/1.0 200 OK\r\n\nTotal response bytes: 19\n",
        request_dump()
    );
    assert_eq!(String::from_utf8(render(&outcome)).unwrap(), expected);
}

#[test]
fn upstream_error_stops_after_status_line() {
    let outcome = FetchOutcome::UpstreamError {
        key: CacheKey::new("example.com", "/foo"),
        request: request(),
        response: response(b"HTTP/1.0 404 Not Found\r\nContent-Length: 9\r\n\r\nnot found"),
    };

    let expected = format!("{}HTTP/1.0 404 Not Found\n", request_dump());
    assert_eq!(String::from_utf8(render(&outcome)).unwrap(), expected);
}

#[test]
fn empty_outcome_prints_only_the_request() {
    let outcome = FetchOutcome::Empty {
        key: CacheKey::new("example.com", "/foo"),
        request: request(),
    };

    assert_eq!(String::from_utf8(render(&outcome)).unwrap(), request_dump());
}

#[test]
fn binary_bodies_pass_through_untouched() {
    let outcome = FetchOutcome::CacheHit {
        key: CacheKey::new("example.com", "/blob"),
        entry: CacheEntry::new(Bytes::from_static(&[0, 159, 146, 150, b'\r', b'\n'])),
    };

    let out = render(&outcome);
    let header_end = out
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .expect("framing header")
        + 4;
    assert_eq!(&out[header_end..header_end + 6], &[0, 159, 146, 150, b'\r', b'\n']);
}
