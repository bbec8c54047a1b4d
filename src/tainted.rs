use std::fmt;

/// A wrapper for caller-supplied data that has not passed any check yet.
///
/// Form fields, query parameters such as the login `next` target, and
/// anything else that arrives with a request should be wrapped in
/// `Tainted<T>` at the boundary. The wrapped value cannot be read from
/// outside this crate; the only way to get at it is through one of the
/// crate's validators ([`Sanitizer`](crate::Sanitizer) implementations or
/// [`RedirectGuard::resolve`](crate::RedirectGuard::resolve)).
///
/// # Examples
///
/// ```
/// use article_guard::Tainted;
///
/// let next = Tainted::new("//evil.example.com/phish".to_string());
///
/// // Debug output shows it's tainted
/// println!("{:?}", next);
///
/// // But the value cannot be used as a redirect location directly:
/// // let location: String = next; // Won't compile!
/// ```
// Do NOT remove Clone: the same submission may be validated more than once.
#[derive(Clone)]
pub struct Tainted<T> {
    // This field MUST remain private, otherwise callers can skip validation.
    inner: T,
}

impl<T> Tainted<T> {
    /// Wraps an untrusted value in `Tainted`.
    pub fn new(value: T) -> Self {
        Self { inner: value }
    }

    /// Extracts the inner value for validation.
    ///
    /// Only validators inside this crate may call this; they must not hand
    /// the value back out without wrapping it in `Verified<T>`.
    pub(crate) fn into_inner(self) -> T {
        self.inner
    }
}

// Do NOT add Deref, AsRef, Borrow, From<T> or Into<T> to Tainted<T>.

impl<T: fmt::Debug> fmt::Debug for Tainted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tainted")
            .field("inner", &self.inner)
            .finish()
    }
}
