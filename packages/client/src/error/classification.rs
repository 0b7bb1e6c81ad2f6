use super::types::{Error, Kind};

impl Error {
    /// Returns true if the URL could not be decomposed.
    #[must_use]
    pub fn is_malformed_url(&self) -> bool {
        matches!(self.inner.kind, Kind::MalformedUrl)
    }

    /// Returns true if the error happened while talking to the origin
    /// (resolve, connect, send or receive).
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(
            self.inner.kind,
            Kind::Resolve | Kind::Connect | Kind::Send | Kind::Recv
        )
    }

    /// Returns true if the host name did not resolve.
    #[must_use]
    pub fn is_resolve(&self) -> bool {
        matches!(self.inner.kind, Kind::Resolve)
    }

    /// Returns true if no connection could be established.
    #[must_use]
    pub fn is_connect(&self) -> bool {
        matches!(self.inner.kind, Kind::Connect)
    }

    /// Returns true if the response hit the size cap.
    #[must_use]
    pub fn is_payload_too_large(&self) -> bool {
        matches!(self.inner.kind, Kind::PayloadTooLarge)
    }

    /// Returns true if the configuration was rejected.
    #[must_use]
    pub fn is_config(&self) -> bool {
        matches!(self.inner.kind, Kind::Config)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::{self, UrlError};

    #[test]
    fn transport_kinds_classify_together() {
        assert!(error::resolve("nowhere.invalid", "no such host").is_transport());
        assert!(error::connect("127.0.0.1:1", "refused").is_connect());
        assert!(error::send("h:80", "broken pipe").is_transport());
        assert!(error::recv("h:80", "reset").is_transport());
        assert!(!error::payload_too_large("h:80", 10).is_transport());
    }

    #[test]
    fn url_errors_are_not_transport() {
        let err = error::malformed_url("http://", UrlError::EmptyHost);
        assert!(err.is_malformed_url());
        assert!(!err.is_transport());
        assert_eq!(err.url(), Some("http://"));
    }
}
