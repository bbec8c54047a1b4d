use std::fmt;

/// Error returned when a submission fails validation.
///
/// Raised only by the submission and site-settings validators. The core
/// rendering and tag operations never fail. The message describes the
/// violated constraint and never echoes the rejected input.
///
/// # Examples
///
/// ```
/// use article_guard::{SanitizationError, SanitizationErrorKind};
///
/// let error = SanitizationError::new(SanitizationErrorKind::TooLong, "title exceeds 200 characters");
/// assert_eq!(error.kind(), SanitizationErrorKind::TooLong);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizationError {
    kind: SanitizationErrorKind,
    message: String,
}

impl SanitizationError {
    /// Creates a new sanitization error.
    pub fn new(kind: SanitizationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> SanitizationErrorKind {
        self.kind
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for SanitizationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sanitization failed ({}): {}", self.kind, self.message)
    }
}

impl std::error::Error for SanitizationError {}

/// Kind of sanitization error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SanitizationErrorKind {
    /// Input is empty or contains only whitespace (after markup removal).
    Empty,
    /// Input exceeds the configured maximum length.
    TooLong,
}

impl fmt::Display for SanitizationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty input"),
            Self::TooLong => write!(f, "input too long"),
        }
    }
}

/// Error returned when an [`OriginContext`](crate::OriginContext) cannot be built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OriginError {
    /// The scheme is not `http` or `https`.
    UnsupportedScheme(String),
    /// The host is missing or could not be parsed.
    InvalidHost,
    /// The origin carries userinfo, a path, a query or a fragment.
    NotAnOrigin,
}

impl fmt::Display for OriginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedScheme(scheme) => {
                write!(f, "unsupported origin scheme '{}'", scheme)
            }
            Self::InvalidHost => write!(f, "origin host is missing or malformed"),
            Self::NotAnOrigin => write!(f, "origin must be scheme and host only"),
        }
    }
}

impl std::error::Error for OriginError {}
