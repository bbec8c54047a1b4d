//! Open-redirect protection for post-login and post-action navigation.

use std::fmt;

use crate::config::SafetyConfig;
use crate::{OriginContext, Tainted, Verified};

/// Why a redirect target was refused.
///
/// Used for logging only; visitors never see it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectRejection {
    /// The target does not resolve to a URL at all.
    Unparseable,
    /// The resolved scheme is not an allowed web scheme.
    DisallowedScheme,
    /// The resolved URL carries a username or password.
    Credentials,
    /// The resolved host or port differs from the origin.
    ForeignHost,
}

impl fmt::Display for RedirectRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unparseable => write!(f, "unparseable target"),
            Self::DisallowedScheme => write!(f, "disallowed scheme"),
            Self::Credentials => write!(f, "credentials in target"),
            Self::ForeignHost => write!(f, "foreign host"),
        }
    }
}

/// A redirect destination that the guard approved, or the trusted fallback.
///
/// Only obtainable as `Verified<RedirectLocation>` from
/// [`RedirectGuard::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectLocation(String);

impl RedirectLocation {
    /// Returns the location to put in the `Location` header.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RedirectLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validates caller-supplied redirect targets against the request origin.
///
/// A target is resolved against `scheme://host/` the way a browser would
/// resolve a `Location` header. It is accepted only when the result uses an
/// allowed scheme (`http`/`https`), carries no credentials, and has exactly
/// the origin's host and port. Every failure, including unparseable input,
/// is a plain rejection.
///
/// # Examples
///
/// ```
/// use article_guard::{OriginContext, RedirectGuard, SafetyConfig};
///
/// let guard = RedirectGuard::new(&SafetyConfig::default());
/// let origin = OriginContext::new("https", "blog.example.com").unwrap();
///
/// assert!(guard.is_safe_target("/article/5", &origin));
/// assert!(!guard.is_safe_target("//evil.example.com/path", &origin));
///
/// assert_eq!(guard.resolve_redirect(None, &origin, "/"), "/");
/// assert_eq!(
///     guard.resolve_redirect(Some("https://blog.example.com/admin"), &origin, "/"),
///     "https://blog.example.com/admin"
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RedirectGuard {
    allowed_schemes: &'static [&'static str],
}

impl RedirectGuard {
    /// Builds a guard from the shared configuration.
    pub fn new(config: &SafetyConfig) -> Self {
        Self {
            allowed_schemes: config.redirect_schemes(),
        }
    }

    /// Returns `true` if `target` stays on `origin`.
    pub fn is_safe_target(&self, target: &str, origin: &OriginContext) -> bool {
        self.check_target(target, origin).is_ok()
    }

    /// Decides whether `target` stays on `origin`, with the reason if not.
    ///
    /// # Errors
    ///
    /// Returns the [`RedirectRejection`] describing why the target is unsafe.
    pub fn check_target(
        &self,
        target: &str,
        origin: &OriginContext,
    ) -> Result<(), RedirectRejection> {
        let resolved = origin
            .base_url()
            .join(target)
            .map_err(|_| RedirectRejection::Unparseable)?;

        if !self.allowed_schemes.iter().any(|s| *s == resolved.scheme()) {
            return Err(RedirectRejection::DisallowedScheme);
        }

        if !resolved.username().is_empty() || resolved.password().is_some() {
            return Err(RedirectRejection::Credentials);
        }

        let base = origin.base_url();
        if resolved.host_str() != base.host_str() || resolved.port() != base.port() {
            return Err(RedirectRejection::ForeignHost);
        }

        Ok(())
    }

    /// Returns `target` if it is present and safe, `fallback` otherwise.
    ///
    /// Every redirect whose destination could come from user input must go
    /// through here (or [`resolve`](Self::resolve)). Blank targets count as
    /// absent.
    pub fn resolve_redirect(
        &self,
        target: Option<&str>,
        origin: &OriginContext,
        fallback: &str,
    ) -> String {
        match target {
            Some(target) if self.accept(target, origin) => target.to_string(),
            _ => fallback.to_string(),
        }
    }

    /// Typed variant of [`resolve_redirect`](Self::resolve_redirect).
    ///
    /// Consumes the tainted target and returns a location a
    /// [`Navigator`](crate::Navigator) will accept. `fallback` is trusted.
    pub fn resolve(
        &self,
        target: Option<Tainted<String>>,
        origin: &OriginContext,
        fallback: &str,
    ) -> Verified<RedirectLocation> {
        let location = match target.map(Tainted::into_inner) {
            Some(target) if self.accept(&target, origin) => target,
            _ => fallback.to_string(),
        };
        Verified::new_unchecked(RedirectLocation(location))
    }

    fn accept(&self, target: &str, origin: &OriginContext) -> bool {
        if target.trim().is_empty() {
            return false;
        }
        match self.check_target(target, origin) {
            Ok(()) => true,
            Err(reason) => {
                tracing::warn!(
                    origin = %origin,
                    reason = %reason,
                    target_len = target.len(),
                    "rejected redirect target"
                );
                false
            }
        }
    }
}

impl Default for RedirectGuard {
    fn default() -> Self {
        Self::new(&SafetyConfig::default())
    }
}
