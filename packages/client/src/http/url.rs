//! URL decomposition into host, port and request path
//!
//! Only the implicit `http://` scheme is understood. There is no
//! percent-decoding and no IPv6 bracket handling: anything that is not the
//! literal `http://` prefix is read as the start of a bare host.

use crate::config::ClientConfig;
use crate::error::{self, Result, UrlError};

/// The only scheme prefix that is recognised (and stripped).
pub const HTTP_PREFIX: &str = "http://";
/// Path requested when the URL has none, or only "/".
pub const INDEX_PATH: &str = "/index.html";

/// A URL split into the three pieces the transport and cache need.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParsedUrl {
    host: String,
    port: u16,
    path: String,
}

impl ParsedUrl {
    /// Decompose `url` using the default configuration.
    ///
    /// # Errors
    ///
    /// Returns a `MalformedUrl` error if the host is empty, the port field is
    /// not a number in 1..=65535, or the URL exceeds the length limit.
    pub fn parse(url: &str) -> Result<Self> {
        Self::parse_with(url, &ClientConfig::default())
    }

    /// Decompose `url`, taking the default port and length limit from `config`.
    ///
    /// # Errors
    ///
    /// See [`ParsedUrl::parse`].
    pub fn parse_with(url: &str, config: &ClientConfig) -> Result<Self> {
        if url.len() > config.max_url_len {
            return Err(error::malformed_url(
                url,
                UrlError::TooLong {
                    len: url.len(),
                    max: config.max_url_len,
                },
            ));
        }

        let rest = url.strip_prefix(HTTP_PREFIX).unwrap_or(url);
        let colon = rest.find(':');
        let slash = rest.find('/');

        let (host, port) = match (colon, slash) {
            (Some(c), s) if s.is_none_or(|s| c < s) => {
                let port = parse_port(&rest[c + 1..]).map_err(|e| error::malformed_url(url, e))?;
                (&rest[..c], port)
            }
            (_, Some(s)) => (&rest[..s], config.default_port),
            (_, None) => (rest, config.default_port),
        };

        if host.is_empty() {
            return Err(error::malformed_url(url, UrlError::EmptyHost));
        }

        let path = match slash.map(|s| &rest[s..]) {
            Some(path) if path != "/" => path,
            _ => INDEX_PATH,
        };

        tracing::debug!(target: "webcache::url", host, port, path, "decomposed URL");

        Ok(Self {
            host: host.to_string(),
            port,
            path: path.to_string(),
        })
    }

    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Request path; always starts with '/'.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// `host:port`, as sent in the `Host` header and used for connecting.
    #[must_use]
    pub fn authority(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Read the leading digits of a port field, ignoring whatever follows them.
fn parse_port(field: &str) -> std::result::Result<u16, UrlError> {
    let end = field
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(field.len());
    let digits = &field[..end];

    match digits.parse::<u16>() {
        Ok(0) | Err(_) => Err(UrlError::InvalidPort(field.to_string())),
        Ok(port) => Ok(port),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Kind;

    fn parts(url: &str) -> (String, u16, String) {
        let parsed = ParsedUrl::parse(url).expect("URL should parse");
        (parsed.host, parsed.port, parsed.path)
    }

    #[test]
    fn explicit_port_and_path() {
        assert_eq!(
            parts("example.com:8080/a/b.html"),
            ("example.com".into(), 8080, "/a/b.html".into())
        );
        assert_eq!(
            parts("http://localhost:3000/x"),
            ("localhost".into(), 3000, "/x".into())
        );
    }

    #[test]
    fn missing_port_defaults_to_80() {
        assert_eq!(
            parts("http://example.com/foo"),
            ("example.com".into(), 80, "/foo".into())
        );
        assert_eq!(parts("example.com/foo").1, 80);
    }

    #[test]
    fn missing_or_root_path_becomes_index() {
        assert_eq!(parts("example.com").2, "/index.html");
        assert_eq!(parts("example.com/").2, "/index.html");
        assert_eq!(parts("example.com:81").2, "/index.html");
        assert_eq!(parts("example.com/dir/").2, "/dir/");
    }

    #[test]
    fn colon_after_slash_belongs_to_path() {
        assert_eq!(
            parts("example.com/a:b"),
            ("example.com".into(), 80, "/a:b".into())
        );
    }

    #[test]
    fn port_stops_at_first_non_digit() {
        assert_eq!(parts("example.com:8080abc/x").1, 8080);
    }

    #[test]
    fn other_schemes_are_not_recognised() {
        // "https" becomes the host and "//example.com/" an invalid port field
        let err = ParsedUrl::parse("https://example.com/").unwrap_err();
        assert!(err.is_malformed_url());
    }

    #[test]
    fn non_numeric_port_fails_fast() {
        let err = ParsedUrl::parse("example.com:http/x").unwrap_err();
        assert_eq!(err.kind(), Kind::MalformedUrl);

        assert!(ParsedUrl::parse("example.com:0/").is_err());
        assert!(ParsedUrl::parse("example.com:70000/").is_err());
        assert!(ParsedUrl::parse("example.com:/").is_err());
    }

    #[test]
    fn empty_host_is_malformed() {
        for url in ["", "http://", "/index.html", ":80/x", "http:///x"] {
            let err = ParsedUrl::parse(url).unwrap_err();
            assert!(err.is_malformed_url(), "{url:?} should be malformed");
        }
    }

    #[test]
    fn overlong_url_is_rejected_not_truncated() {
        let config = ClientConfig::default().with_max_url_len(16);
        let err = ParsedUrl::parse_with("example.com/a-rather-long-path", &config).unwrap_err();
        assert!(err.is_malformed_url());
        assert!(ParsedUrl::parse_with("example.com/a", &config).is_ok());
    }

    #[test]
    fn authority_joins_host_and_port() {
        let parsed = ParsedUrl::parse("example.com/foo").unwrap();
        assert_eq!(parsed.authority(), "example.com:80");
    }
}
