use std::error::Error as StdError;
use std::fmt;

/// A Result alias where the Err case is `webcache_client::Error`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort one fetch.
///
/// Cache read and write failures never show up here: a failed read is a miss
/// and a failed write is logged and counted, then dropped.
pub struct Error {
    pub inner: Box<Inner>,
}

pub struct Inner {
    pub kind: Kind,
    pub source: Option<Box<dyn StdError + Send + Sync>>,
    /// The raw URL (or `host:port`) the failing operation was working on.
    pub url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// The URL could not be decomposed into host, port and path
    MalformedUrl,
    /// Host name resolution failed
    Resolve,
    /// No resolved address accepted a TCP connection
    Connect,
    /// Writing the request failed
    Send,
    /// Reading the response failed before any byte arrived
    Recv,
    /// The peer sent more than the configured response cap
    PayloadTooLarge,
    /// Client configuration rejected by validation
    Config,
}

/// Why a URL was rejected by the decomposer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UrlError {
    #[error("URL has an empty host")]
    EmptyHost,

    #[error("invalid port {0:?}")]
    InvalidPort(String),

    #[error("URL is {len} bytes long, limit is {max}")]
    TooLong { len: usize, max: usize },
}

impl Error {
    pub fn new(kind: Kind) -> Error {
        Error {
            inner: Box::new(Inner {
                kind,
                source: None,
                url: None,
            }),
        }
    }

    #[must_use = "Error builder methods return a new Error and should be used"]
    pub fn with<E: Into<Box<dyn StdError + Send + Sync>>>(mut self, source: E) -> Error {
        self.inner.source = Some(source.into());
        self
    }

    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.inner.url = Some(url.into());
        self
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.inner.kind
    }

    /// Get the URL associated with this error, if any
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.inner.url.as_deref()
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_struct("webcache_client::Error");

        f.field("kind", &self.inner.kind);

        if let Some(ref source) = self.inner.source {
            f.field("source", source);
        }

        if let Some(ref url) = self.inner.url {
            f.field("url", url);
        }

        f.finish()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.kind {
            Kind::MalformedUrl => f.write_str("malformed URL")?,
            Kind::Resolve => f.write_str("error resolving host")?,
            Kind::Connect => f.write_str("error connecting to host")?,
            Kind::Send => f.write_str("error sending request")?,
            Kind::Recv => f.write_str("error receiving response")?,
            Kind::PayloadTooLarge => f.write_str("response too large")?,
            Kind::Config => f.write_str("invalid client configuration")?,
        }

        if let Some(ref url) = self.inner.url {
            write!(f, " for {url}")?;
        }

        if let Some(ref source) = self.inner.source {
            write!(f, ": {source}")?;
        }

        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner
            .source
            .as_ref()
            .map(|err| &**err as &(dyn StdError + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_url_and_source() {
        let err = Error::new(Kind::MalformedUrl)
            .with(UrlError::EmptyHost)
            .with_url("http://:80/");
        assert_eq!(
            err.to_string(),
            "malformed URL for http://:80/: URL has an empty host"
        );
    }

    #[test]
    fn source_is_exposed() {
        let err = Error::new(Kind::Connect).with(std::io::Error::other("refused"));
        assert!(err.source().is_some());
        assert_eq!(err.kind(), Kind::Connect);
        assert!(err.url().is_none());
    }
}
