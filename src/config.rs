//! Immutable configuration shared by the sanitization pipeline and the
//! redirect guard.
//!
//! A [`SafetyConfig`] is built once at startup and handed to each component
//! explicitly. There is no global state.

/// Elements that survive content sanitization.
pub const DEFAULT_ALLOWED_TAGS: &[&str] = &[
    "a",
    "abbr",
    "acronym",
    "b",
    "blockquote",
    "code",
    "em",
    "i",
    "li",
    "ol",
    "p",
    "pre",
    "strong",
    "ul",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
];

/// Attributes that survive content sanitization, per element.
pub const DEFAULT_ALLOWED_ATTRIBUTES: &[(&str, &[&str])] = &[
    ("a", &["href", "title"]),
    ("abbr", &["title"]),
    ("acronym", &["title"]),
];

/// URL schemes permitted in `href` values. Relative URLs are always kept.
pub const DEFAULT_URL_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// Schemes a redirect target may resolve to.
pub const DEFAULT_REDIRECT_SCHEMES: &[&str] = &["http", "https"];

/// The element/attribute allow-list applied to rendered content and tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentPolicy {
    /// Elements kept in the output. Everything else is stripped.
    pub allowed_tags: &'static [&'static str],
    /// Attributes kept on each element.
    pub allowed_attributes: &'static [(&'static str, &'static [&'static str])],
    /// Schemes allowed in link attributes.
    pub url_schemes: &'static [&'static str],
}

impl Default for ContentPolicy {
    fn default() -> Self {
        Self {
            allowed_tags: DEFAULT_ALLOWED_TAGS,
            allowed_attributes: DEFAULT_ALLOWED_ATTRIBUTES,
            url_schemes: DEFAULT_URL_SCHEMES,
        }
    }
}

/// Length and count limits, in characters unless noted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of tags kept on an article.
    pub max_tags: usize,
    /// Maximum length of a single tag.
    pub max_tag_len: usize,
    /// Maximum article title length.
    pub max_title_len: usize,
    /// Maximum article body length.
    pub max_body_len: usize,
    /// Maximum blog baseline length.
    pub max_baseline_len: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_tags: 10,
            max_tag_len: 50,
            max_title_len: 200,
            max_body_len: 50_000,
            max_baseline_len: 500,
        }
    }
}

/// Process-wide content-safety configuration.
///
/// # Examples
///
/// ```
/// use article_guard::SafetyConfig;
///
/// let config = SafetyConfig::default().with_max_tags(5);
///
/// assert_eq!(config.limits().max_tags, 5);
/// assert_eq!(config.limits().max_tag_len, 50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SafetyConfig {
    content: ContentPolicy,
    limits: Limits,
    redirect_schemes: &'static [&'static str],
}

impl Default for SafetyConfig {
    fn default() -> Self {
        Self {
            content: ContentPolicy::default(),
            limits: Limits::default(),
            redirect_schemes: DEFAULT_REDIRECT_SCHEMES,
        }
    }
}

impl SafetyConfig {
    /// Replaces the content allow-list.
    pub fn with_content_policy(mut self, content: ContentPolicy) -> Self {
        self.content = content;
        self
    }

    /// Replaces every limit at once.
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Sets the maximum number of tags kept on an article.
    pub fn with_max_tags(mut self, max_tags: usize) -> Self {
        self.limits.max_tags = max_tags;
        self
    }

    /// Sets the maximum length of a single tag.
    pub fn with_max_tag_len(mut self, max_tag_len: usize) -> Self {
        self.limits.max_tag_len = max_tag_len;
        self
    }

    /// Sets the maximum article title length.
    ///
    /// # Panics
    ///
    /// Panics if `max_title_len` is 0.
    pub fn with_max_title_len(mut self, max_title_len: usize) -> Self {
        assert!(max_title_len > 0, "max_title_len must be greater than 0");
        self.limits.max_title_len = max_title_len;
        self
    }

    /// Sets the maximum article body length.
    ///
    /// # Panics
    ///
    /// Panics if `max_body_len` is 0.
    pub fn with_max_body_len(mut self, max_body_len: usize) -> Self {
        assert!(max_body_len > 0, "max_body_len must be greater than 0");
        self.limits.max_body_len = max_body_len;
        self
    }

    /// Replaces the schemes a redirect target may use.
    pub fn with_redirect_schemes(mut self, schemes: &'static [&'static str]) -> Self {
        self.redirect_schemes = schemes;
        self
    }

    /// Returns the content allow-list.
    pub fn content_policy(&self) -> &ContentPolicy {
        &self.content
    }

    /// Returns the configured limits.
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Returns the schemes a redirect target may use.
    pub fn redirect_schemes(&self) -> &'static [&'static str] {
        self.redirect_schemes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_published_limits() {
        let config = SafetyConfig::default();

        assert_eq!(config.limits().max_tags, 10);
        assert_eq!(config.limits().max_tag_len, 50);
        assert_eq!(config.limits().max_title_len, 200);
        assert_eq!(config.limits().max_body_len, 50_000);
        assert_eq!(config.limits().max_baseline_len, 500);
        assert_eq!(config.redirect_schemes(), &["http", "https"]);
    }

    #[test]
    fn default_allow_list_has_no_script_or_style() {
        let policy = ContentPolicy::default();

        assert_eq!(policy.allowed_tags.len(), 20);
        assert!(!policy.allowed_tags.contains(&"script"));
        assert!(!policy.allowed_tags.contains(&"style"));
        assert!(!policy.allowed_tags.contains(&"img"));
        for (_, attrs) in policy.allowed_attributes {
            assert!(attrs.iter().all(|a| !a.starts_with("on") && *a != "style"));
        }
    }

    #[test]
    fn builder_methods_override_single_fields() {
        let config = SafetyConfig::default()
            .with_max_tags(3)
            .with_max_tag_len(20)
            .with_max_title_len(80)
            .with_max_body_len(1_000);

        assert_eq!(config.limits().max_tags, 3);
        assert_eq!(config.limits().max_tag_len, 20);
        assert_eq!(config.limits().max_title_len, 80);
        assert_eq!(config.limits().max_body_len, 1_000);
        assert_eq!(config.limits().max_baseline_len, 500);
    }

    #[test]
    #[should_panic(expected = "max_title_len must be greater than 0")]
    fn zero_title_limit_panics() {
        let _ = SafetyConfig::default().with_max_title_len(0);
    }
}
