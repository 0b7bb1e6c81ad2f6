//! Cache key derivation from host and request path

use std::fmt;
use std::path::{Component, Path, PathBuf};

use crate::http::url::{INDEX_PATH, ParsedUrl};

const INDEX_FILE: &str = "index.html";

/// Relative filesystem path identifying one cached body.
///
/// Built as `host` followed by the request path, with directory-style paths
/// ("/" or ending in '/') completed with `index.html`. Different URLs that
/// normalise to the same key share one cache file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    #[must_use]
    pub fn new(host: &str, path: &str) -> Self {
        let path = if path == "/" {
            INDEX_PATH.to_string()
        } else if path.ends_with('/') {
            format!("{path}{INDEX_FILE}")
        } else {
            path.to_string()
        };

        // Paths coming from the decomposer always start with '/'.
        let key = if path.starts_with('/') {
            format!("{host}{path}")
        } else {
            format!("{host}/{path}")
        };

        Self(key)
    }

    #[must_use]
    pub fn for_url(url: &ParsedUrl) -> Self {
        Self::new(url.host(), url.path())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolve the key under `root`.
    ///
    /// Returns `None` when the key could leave `root`: any `..` component,
    /// or an absolute/prefixed path. Such keys are never read or written.
    #[must_use]
    pub fn resolve(&self, root: &Path) -> Option<PathBuf> {
        let relative = Path::new(&self.0);
        let mut normal = 0usize;

        for component in relative.components() {
            match component {
                Component::Normal(_) => normal += 1,
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
            }
        }

        if normal == 0 {
            return None;
        }

        Some(root.join(relative))
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CacheKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
