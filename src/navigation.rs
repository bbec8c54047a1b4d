use std::cell::RefCell;
use std::fmt;

use crate::{RedirectLocation, Tainted, Verified};

/// Error returned when a navigation cannot be performed.
///
/// # Examples
///
/// ```
/// use article_guard::{NavigationError, NavigationErrorKind};
///
/// let error = NavigationError::new(NavigationErrorKind::Unverified);
/// assert_eq!(error.kind(), NavigationErrorKind::Unverified);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationError {
    kind: NavigationErrorKind,
    message: Option<String>,
}

impl NavigationError {
    /// Creates a new navigation error with the specified kind.
    pub fn new(kind: NavigationErrorKind) -> Self {
        Self {
            kind,
            message: None,
        }
    }

    /// Creates a new navigation error with a custom message.
    pub fn with_message(kind: NavigationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: Some(message.into()),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> NavigationErrorKind {
        self.kind
    }

    /// Returns the error message, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(msg) = &self.message {
            write!(f, "navigation error ({}): {}", self.kind, msg)
        } else {
            write!(f, "navigation error ({})", self.kind)
        }
    }
}

impl std::error::Error for NavigationError {}

/// Kind of navigation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationErrorKind {
    /// The location did not go through the redirect guard.
    Unverified,
    /// The response was already committed and cannot redirect.
    ResponseCommitted,
}

impl fmt::Display for NavigationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unverified => write!(f, "unverified location"),
            Self::ResponseCommitted => write!(f, "response already committed"),
        }
    }
}

/// The single place a redirect is issued.
///
/// The routing layer implements this for its response type. `navigate`
/// accepts only a location produced by
/// [`RedirectGuard::resolve`](crate::RedirectGuard::resolve), so raw user
/// input cannot reach a `Location` header by construction.
///
/// # Examples
///
/// ```
/// use article_guard::{Navigator, OriginContext, RecordingNavigator, RedirectGuard, Tainted};
///
/// let guard = RedirectGuard::default();
/// let origin = OriginContext::new("https", "blog.example.com").unwrap();
/// let navigator = RecordingNavigator::new();
///
/// let next = Tainted::new("https://evil.example.com/".to_string());
/// let location = guard.resolve(Some(next), &origin, "/");
/// navigator.navigate(&location).expect("should succeed");
///
/// assert_eq!(navigator.into_vec(), vec!["/"]);
///
/// // This would NOT compile:
/// // navigator.navigate(&Tainted::new("//evil".to_string()));
/// ```
// The navigate() signature MUST keep accepting &Verified<RedirectLocation>.
pub trait Navigator {
    /// Issues a redirect to a guard-approved location.
    ///
    /// # Errors
    ///
    /// Returns `NavigationError` if the redirect cannot be issued.
    fn navigate(&self, location: &Verified<RedirectLocation>) -> Result<(), NavigationError>;

    /// Attempts to redirect to an unchecked location (always fails).
    ///
    /// # Errors
    ///
    /// Always returns `NavigationError` with kind `Unverified`.
    fn navigate_untrusted(&self, _location: Tainted<String>) -> Result<(), NavigationError> {
        Err(NavigationError::new(NavigationErrorKind::Unverified))
    }
}

/// A navigator that records locations instead of issuing them.
///
/// Useful in tests of the routing layer.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    locations: RefCell<Vec<String>>,
}

impl RecordingNavigator {
    /// Creates an empty recording navigator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of recorded redirects.
    pub fn len(&self) -> usize {
        self.locations.borrow().len()
    }

    /// Returns `true` if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.locations.borrow().is_empty()
    }

    /// Returns the most recent location, if any.
    pub fn last(&self) -> Option<String> {
        self.locations.borrow().last().cloned()
    }

    /// Consumes the navigator and returns the recorded locations.
    pub fn into_vec(self) -> Vec<String> {
        self.locations.into_inner()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, location: &Verified<RedirectLocation>) -> Result<(), NavigationError> {
        self.locations
            .borrow_mut()
            .push(location.as_ref().as_str().to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{OriginContext, RedirectGuard};

    fn origin() -> OriginContext {
        OriginContext::new("https", "blog.example.com").unwrap()
    }

    #[test]
    fn navigation_error_display() {
        let error = NavigationError::new(NavigationErrorKind::Unverified);
        assert_eq!(format!("{}", error), "navigation error (unverified location)");

        let error =
            NavigationError::with_message(NavigationErrorKind::ResponseCommitted, "headers sent");
        assert_eq!(error.message(), Some("headers sent"));
        assert!(format!("{}", error).contains("headers sent"));
    }

    #[test]
    fn recording_navigator_records_guarded_locations() {
        let guard = RedirectGuard::default();
        let navigator = RecordingNavigator::new();

        for next in ["/article/3", "//evil.example.com", "javascript:alert(1)"] {
            let location = guard.resolve(Some(Tainted::new(next.to_string())), &origin(), "/");
            navigator.navigate(&location).expect("should succeed");
        }

        assert_eq!(navigator.len(), 3);
        assert_eq!(navigator.last().as_deref(), Some("/"));
        assert_eq!(navigator.into_vec(), vec!["/article/3", "/", "/"]);
    }

    #[test]
    fn untrusted_navigation_is_rejected_without_side_effects() {
        let navigator = RecordingNavigator::new();

        let result = navigator.navigate_untrusted(Tainted::new("/article/3".to_string()));

        assert_eq!(result.unwrap_err().kind(), NavigationErrorKind::Unverified);
        assert!(navigator.is_empty());
    }
}
