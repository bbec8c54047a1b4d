use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::config::ContentPolicy;
use crate::{SanitizationError, SanitizationErrorKind, Tainted, Verified};

/// Trait for validating tainted values into verified values.
///
/// # Invariants
///
/// Implementations MUST:
/// - Validate/normalize the input according to their rules
/// - Only call `Verified::new_unchecked` after validation succeeds
/// - Return `Err(SanitizationError)` if validation fails
/// - Not echo the rejected input in errors
///
/// # Examples
///
/// ```
/// use article_guard::{BodySanitizer, Sanitizer, Tainted};
///
/// let sanitizer = BodySanitizer::new(50_000);
/// let verified = sanitizer
///     .sanitize(Tainted::new("# Hello\n\nFirst post.\n".to_string()))
///     .expect("valid body");
///
/// assert_eq!(verified.as_ref(), "# Hello\n\nFirst post.");
/// ```
pub trait Sanitizer<T> {
    /// Validates a tainted value, returning a verified value on success.
    ///
    /// # Errors
    ///
    /// Returns `SanitizationError` if the input fails validation.
    fn sanitize(&self, input: Tainted<T>) -> Result<Verified<T>, SanitizationError>;
}

/// Allow-list HTML cleaner.
///
/// Disallowed elements are stripped and their text content is kept
/// (escaped). Disallowed attributes are dropped. Comments are removed.
/// The cleaner never fails and cleaning its own output is a no-op.
///
/// # Examples
///
/// ```
/// use article_guard::{ContentPolicy, HtmlSanitizer};
///
/// let html = HtmlSanitizer::new(&ContentPolicy::default());
///
/// let cleaned = html.clean(r#"<p onclick="x()">Hi <span style="color:red">there</span></p>"#);
/// assert_eq!(cleaned, "<p>Hi there</p>");
///
/// assert_eq!(html.strip_all_markup("<b>Bold</b> move"), "Bold move");
/// ```
pub struct HtmlSanitizer {
    allow_list: ammonia::Builder<'static>,
    strip_all: ammonia::Builder<'static>,
}

// Extra allow-list passes tolerated before the output is taken as is.
// Parser fix-ups (misnesting, foster parenting) settle after one.
const MAX_EXTRA_PASSES: usize = 4;

impl HtmlSanitizer {
    /// Builds a cleaner for the given allow-list.
    pub fn new(policy: &ContentPolicy) -> Self {
        let tag_attributes: HashMap<&'static str, HashSet<&'static str>> = policy
            .allowed_attributes
            .iter()
            .map(|(tag, attrs)| (*tag, attrs.iter().copied().collect()))
            .collect();

        let mut allow_list = ammonia::Builder::default();
        allow_list
            .tags(policy.allowed_tags.iter().copied().collect())
            .tag_attributes(tag_attributes)
            .generic_attributes(HashSet::new())
            .url_schemes(policy.url_schemes.iter().copied().collect())
            // Keep the text of stripped elements, including <script>/<style>.
            .clean_content_tags(HashSet::new())
            // No rel= injection: `rel` is not on the attribute allow-list.
            .link_rel(None)
            .strip_comments(true);

        Self {
            allow_list,
            strip_all: strip_all_builder(),
        }
    }

    /// Applies the allow-list to an HTML fragment.
    ///
    /// The result is a fixed point: cleaning it again returns the same
    /// bytes.
    pub fn clean(&self, html: &str) -> String {
        let mut cleaned = self.clean_once(html);
        for _ in 0..MAX_EXTRA_PASSES {
            let again = self.clean_once(&cleaned);
            if again == cleaned {
                break;
            }
            cleaned = again;
        }
        cleaned
    }

    /// Removes every element, keeping only (escaped) text.
    pub fn strip_all_markup(&self, text: &str) -> String {
        self.strip_all.clean(text).to_string()
    }

    fn clean_once(&self, html: &str) -> String {
        drop_pre_leading_newlines(self.allow_list.clean(html).to_string())
    }
}

fn strip_all_builder() -> ammonia::Builder<'static> {
    let mut strip_all = ammonia::Builder::default();
    strip_all
        .tags(HashSet::new())
        .tag_attributes(HashMap::new())
        .generic_attributes(HashSet::new())
        .clean_content_tags(HashSet::new())
        .link_rel(None)
        .strip_comments(true);
    strip_all
}

// The parser swallows one newline right after `<pre>`, the serializer does
// not write it back. Text inside `<pre>` must not start with a newline or
// each pass would eat one more.
fn drop_pre_leading_newlines(html: String) -> String {
    const PRE_OPEN: &str = "<pre>";

    if !html.contains("<pre>\n") {
        return html;
    }

    let mut out = String::with_capacity(html.len());
    let mut rest = html.as_str();
    while let Some(idx) = rest.find(PRE_OPEN) {
        let (head, tail) = rest.split_at(idx + PRE_OPEN.len());
        out.push_str(head);
        rest = tail.trim_start_matches('\n');
    }
    out.push_str(rest);
    out
}

impl fmt::Debug for HtmlSanitizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HtmlSanitizer").finish_non_exhaustive()
    }
}

impl Default for HtmlSanitizer {
    fn default() -> Self {
        Self::new(&ContentPolicy::default())
    }
}

/// Validates article and site titles.
///
/// - Trims surrounding whitespace
/// - Removes all markup (text is kept)
/// - Rejects titles that are empty afterwards
/// - Rejects titles longer than `max_len` characters
pub struct TitleSanitizer {
    max_len: usize,
    strip_all: ammonia::Builder<'static>,
}

impl TitleSanitizer {
    /// Creates a title validator with the given maximum length in characters.
    ///
    /// # Panics
    ///
    /// Panics if `max_len` is 0.
    pub fn new(max_len: usize) -> Self {
        assert!(max_len > 0, "max_len must be greater than 0");
        Self {
            max_len,
            strip_all: strip_all_builder(),
        }
    }
}

impl fmt::Debug for TitleSanitizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TitleSanitizer")
            .field("max_len", &self.max_len)
            .finish_non_exhaustive()
    }
}

impl Sanitizer<String> for TitleSanitizer {
    fn sanitize(&self, input: Tainted<String>) -> Result<Verified<String>, SanitizationError> {
        let raw = input.into_inner();
        let stripped = self.strip_all.clean(raw.trim()).to_string();
        let title = stripped.trim();

        if title.is_empty() {
            return Err(SanitizationError::new(
                SanitizationErrorKind::Empty,
                "title is empty or contains only markup",
            ));
        }

        if title.chars().count() > self.max_len {
            return Err(SanitizationError::new(
                SanitizationErrorKind::TooLong,
                format!("title exceeds maximum length of {}", self.max_len),
            ));
        }

        Ok(Verified::new_unchecked(title.to_string()))
    }
}

/// Validates article bodies before rendering.
///
/// The body is stored as raw markup; rendering happens on display. This
/// only trims it and enforces presence and the length cap.
#[derive(Debug, Clone, Copy)]
pub struct BodySanitizer {
    max_len: usize,
}

impl BodySanitizer {
    /// Creates a body validator with the given maximum length in characters.
    ///
    /// # Panics
    ///
    /// Panics if `max_len` is 0.
    pub fn new(max_len: usize) -> Self {
        assert!(max_len > 0, "max_len must be greater than 0");
        Self { max_len }
    }
}

impl Sanitizer<String> for BodySanitizer {
    fn sanitize(&self, input: Tainted<String>) -> Result<Verified<String>, SanitizationError> {
        let raw = input.into_inner();
        let body = raw.trim();

        if body.is_empty() {
            return Err(SanitizationError::new(
                SanitizationErrorKind::Empty,
                "body is empty or contains only whitespace",
            ));
        }

        if body.chars().count() > self.max_len {
            return Err(SanitizationError::new(
                SanitizationErrorKind::TooLong,
                format!("body exceeds maximum length of {}", self.max_len),
            ));
        }

        Ok(Verified::new_unchecked(body.to_string()))
    }
}
