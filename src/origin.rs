use std::fmt;

use url::Url;

use crate::OriginError;

/// Scheme and host (with port) of the request being served.
///
/// This is the trust baseline for [`RedirectGuard`](crate::RedirectGuard):
/// a redirect target is only followed when it resolves to this origin.
/// Hosts are normalized the way browsers do (lower-cased, default port
/// elided), so `BLOG.example.com:443` over https equals `blog.example.com`.
///
/// # Examples
///
/// ```
/// use article_guard::OriginContext;
///
/// let origin = OriginContext::new("https", "blog.example.com").unwrap();
/// assert_eq!(origin.scheme(), "https");
/// assert_eq!(origin.host(), "blog.example.com");
///
/// let origin = OriginContext::from_host_url("http://localhost:5000/").unwrap();
/// assert_eq!(origin.host(), "localhost:5000");
///
/// assert!(OriginContext::new("ftp", "files.example.com").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OriginContext {
    base: Url,
}

impl OriginContext {
    /// Builds an origin from a scheme and a `host[:port]` authority.
    ///
    /// # Errors
    ///
    /// Returns `OriginError` if the scheme is not `http`/`https`, the host
    /// is missing or malformed, or the authority carries credentials, a
    /// path, a query or a fragment.
    pub fn new(scheme: &str, host: &str) -> Result<Self, OriginError> {
        let scheme = scheme.to_ascii_lowercase();
        if scheme != "http" && scheme != "https" {
            return Err(OriginError::UnsupportedScheme(scheme));
        }
        if host.is_empty() {
            return Err(OriginError::InvalidHost);
        }
        if host.contains(|c: char| matches!(c, '/' | '\\' | '?' | '#' | '@')) {
            return Err(OriginError::NotAnOrigin);
        }

        let base =
            Url::parse(&format!("{}://{}/", scheme, host)).map_err(|_| OriginError::InvalidHost)?;
        Self::from_url(base)
    }

    /// Builds an origin from the request's host URL (e.g. `https://host/`).
    ///
    /// A bare `/` path is accepted; anything beyond it is not.
    ///
    /// # Errors
    ///
    /// Same conditions as [`OriginContext::new`].
    pub fn from_host_url(host_url: &str) -> Result<Self, OriginError> {
        let base = Url::parse(host_url).map_err(|_| OriginError::InvalidHost)?;
        if base.scheme() != "http" && base.scheme() != "https" {
            return Err(OriginError::UnsupportedScheme(base.scheme().to_string()));
        }
        Self::from_url(base)
    }

    fn from_url(base: Url) -> Result<Self, OriginError> {
        if base.host_str().map_or(true, str::is_empty) {
            return Err(OriginError::InvalidHost);
        }
        if !base.username().is_empty()
            || base.password().is_some()
            || base.path() != "/"
            || base.query().is_some()
            || base.fragment().is_some()
        {
            return Err(OriginError::NotAnOrigin);
        }
        Ok(Self { base })
    }

    /// Returns the origin scheme (`http` or `https`).
    pub fn scheme(&self) -> &str {
        self.base.scheme()
    }

    /// Returns the normalized `host[:port]` authority.
    ///
    /// The port is only present when it differs from the scheme default.
    pub fn host(&self) -> String {
        match self.base.port() {
            Some(port) => format!("{}:{}", self.host_name(), port),
            None => self.host_name().to_string(),
        }
    }

    /// Returns the host without the port.
    pub fn host_name(&self) -> &str {
        self.base.host_str().unwrap_or_default()
    }

    /// Returns the explicit, non-default port, if any.
    pub fn port(&self) -> Option<u16> {
        self.base.port()
    }

    /// Returns the base URL (`scheme://host/`) targets are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base
    }
}

impl fmt::Display for OriginContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", self.scheme(), self.host())
    }
}
