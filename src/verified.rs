/// A wrapper for data that has passed one of this crate's validators.
///
/// `Verified<T>` is the proof that a value went through a controlled
/// validation path: a [`Sanitizer`](crate::Sanitizer) for submission fields,
/// or [`RedirectGuard::resolve`](crate::RedirectGuard::resolve) for redirect
/// locations. There is no public constructor and no `From<T>`.
///
/// # Access
///
/// - [`AsRef::as_ref`]: borrow the verified value
/// - [`into_inner`](Self::into_inner): consume and extract the value
///
/// # Examples
///
/// External callers cannot create `Verified<T>` directly:
///
/// ```compile_fail
/// use article_guard::Verified;
///
/// let verified = Verified::new("data".to_string());
/// ```
///
/// Values come out of validators instead:
///
/// ```
/// use article_guard::{Sanitizer, Tainted, TitleSanitizer};
///
/// let verified = TitleSanitizer::new(200)
///     .sanitize(Tainted::new("  Hello <b>world</b> ".to_string()))
///     .expect("valid title");
///
/// assert_eq!(verified.as_ref(), "Hello world");
/// let title: String = verified.into_inner();
/// assert_eq!(title, "Hello world");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verified<T> {
    inner: T,
}

impl<T> Verified<T> {
    /// Creates a `Verified<T>` without performing validation.
    ///
    /// Crate-internal: callers must have validated `value` already.
    pub(crate) fn new_unchecked(value: T) -> Self {
        Self { inner: value }
    }

    /// Consumes the `Verified<T>` and returns the inner value.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T> AsRef<T> for Verified<T> {
    fn as_ref(&self) -> &T {
        &self.inner
    }
}
