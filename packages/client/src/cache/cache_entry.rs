//! A cached (or just fetched) response body

use bytes::Bytes;

/// One response body, owned.
///
/// The cache keeps only the body: the original status code and headers are
/// not remembered, so a hit is always presented as `200 OK`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    body: Bytes,
}

impl CacheEntry {
    #[must_use]
    pub fn new(body: impl Into<Bytes>) -> Self {
        Self { body: body.into() }
    }

    #[must_use]
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    #[must_use]
    pub fn into_body(self) -> Bytes {
        self.body
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}
