//! Markdown rendering and tag normalization.

use pulldown_cmark::{html, Options, Parser};

use crate::config::{Limits, SafetyConfig};
use crate::sanitizer::HtmlSanitizer;
use crate::tags::join_tags;

/// Safe, derived view of an article: rendered HTML plus normalized tags.
///
/// Produced by [`SanitizationPipeline::sanitize_article`]. Immutable once
/// built; both parts are safe to embed in a page without further escaping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedArticleContent {
    rendered_html: String,
    tags: Vec<String>,
}

impl SanitizedArticleContent {
    /// Returns the sanitized HTML.
    pub fn rendered_html(&self) -> &str {
        &self.rendered_html
    }

    /// Returns the normalized tags, in submission order.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Returns the tags as the comma-joined string used for storage.
    pub fn stored_tags(&self) -> String {
        join_tags(&self.tags)
    }
}

/// Converts untrusted author markup into browser-safe HTML and tags.
///
/// The pipeline is pure: the same input always yields the same output, no
/// call fails, and an instance can be shared between threads.
///
/// # Examples
///
/// ```
/// use article_guard::{SafetyConfig, SanitizationPipeline};
///
/// let pipeline = SanitizationPipeline::new(&SafetyConfig::default());
///
/// let html = pipeline.render_content("# Hi\n\n*there* <script>alert(1)</script>");
/// assert!(html.contains("<h1>Hi</h1>"));
/// assert!(html.contains("<em>there</em>"));
/// assert!(!html.contains("<script"));
///
/// let tags = pipeline.normalize_tags("rust, web, , security");
/// assert_eq!(tags, vec!["rust", "web", "security"]);
/// ```
#[derive(Debug)]
pub struct SanitizationPipeline {
    html: HtmlSanitizer,
    limits: Limits,
}

impl SanitizationPipeline {
    /// Builds a pipeline from the shared configuration.
    pub fn new(config: &SafetyConfig) -> Self {
        Self {
            html: HtmlSanitizer::new(config.content_policy()),
            limits: *config.limits(),
        }
    }

    /// Renders markdown to HTML and strips everything outside the allow-list.
    ///
    /// No length check happens here; callers enforce the body limit first.
    /// Malformed markdown falls back to literal text.
    pub fn render_content(&self, body: &str) -> String {
        let parser = Parser::new_ext(body, Options::empty());
        let mut unsafe_html = String::with_capacity(body.len() + body.len() / 2);
        html::push_html(&mut unsafe_html, parser);

        let rendered = self.html.clean(&unsafe_html);
        tracing::debug!(
            body_len = body.len(),
            raw_html_len = unsafe_html.len(),
            html_len = rendered.len(),
            "rendered article content"
        );
        rendered
    }

    /// Splits a comma-separated tag string into safe tags.
    ///
    /// Each token is trimmed and run through the content allow-list. Tokens
    /// with no visible text are dropped, then tokens over the length limit, then the list
    /// is cut to the first `max_tags` entries. Order and duplicates are kept.
    pub fn normalize_tags(&self, raw_tags: &str) -> Vec<String> {
        let mut token_count = 0usize;
        let tags: Vec<String> = raw_tags
            .split(',')
            .inspect(|_| token_count += 1)
            .map(|token| self.clean_tag(token))
            .filter(|tag| self.has_visible_text(tag))
            .filter(|tag| tag.chars().count() <= self.limits.max_tag_len)
            .take(self.limits.max_tags)
            .collect();

        tracing::debug!(tokens = token_count, kept = tags.len(), "normalized tags");
        tags
    }

    /// Renders a body and normalizes its tags in one step.
    pub fn sanitize_article(&self, body: &str, raw_tags: &str) -> SanitizedArticleContent {
        SanitizedArticleContent {
            rendered_html: self.render_content(body),
            tags: self.normalize_tags(raw_tags),
        }
    }

    /// Applies the allow-list to an HTML fragment that is already rendered.
    pub fn clean_html(&self, html: &str) -> String {
        self.html.clean(html)
    }

    /// Removes all markup from a plain-text field, keeping escaped text.
    pub fn strip_all_markup(&self, text: &str) -> String {
        self.html.strip_all_markup(text)
    }

    /// Returns the limits this pipeline enforces.
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    fn clean_tag(&self, token: &str) -> String {
        let cleaned = self.html.clean(token.trim());
        // Decoded entities (`&#44;`) must not split the stored string.
        cleaned.replace(',', "").trim().to_string()
    }

    fn has_visible_text(&self, tag: &str) -> bool {
        self.html
            .strip_all_markup(tag)
            .replace("&nbsp;", " ")
            .chars()
            .any(|c| !c.is_whitespace() && !is_invisible(c))
    }
}

// Zero-width and soft-hyphen characters render as nothing.
fn is_invisible(c: char) -> bool {
    matches!(
        c,
        '\u{00ad}' | '\u{200b}'..='\u{200f}' | '\u{2060}'..='\u{2064}' | '\u{feff}'
    )
}

impl Default for SanitizationPipeline {
    fn default() -> Self {
        Self::new(&SafetyConfig::default())
    }
}
