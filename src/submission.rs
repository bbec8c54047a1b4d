//! Article submissions: length checks first, then the sanitization pipeline.

use crate::config::SafetyConfig;
use crate::pipeline::{SanitizationPipeline, SanitizedArticleContent};
use crate::sanitizer::{BodySanitizer, Sanitizer, TitleSanitizer};
use crate::{SanitizationError, Tainted, Verified};

/// An article as posted by the author's form. Every field is untrusted.
#[derive(Debug, Clone)]
pub struct RawSubmission {
    /// Article title.
    pub title: Tainted<String>,
    /// Article body in markdown.
    pub body: Tainted<String>,
    /// Comma-separated tags.
    pub raw_tags: Tainted<String>,
}

impl RawSubmission {
    /// Wraps the three form fields.
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        raw_tags: impl Into<String>,
    ) -> Self {
        Self {
            title: Tainted::new(title.into()),
            body: Tainted::new(body.into()),
            raw_tags: Tainted::new(raw_tags.into()),
        }
    }
}

/// A submission that passed validation, ready to persist and serve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleDraft {
    title: Verified<String>,
    body: Verified<String>,
    content: SanitizedArticleContent,
}

impl ArticleDraft {
    /// Returns the title with all markup removed.
    pub fn title(&self) -> &str {
        self.title.as_ref()
    }

    /// Returns the trimmed markdown body, as stored.
    pub fn body(&self) -> &str {
        self.body.as_ref()
    }

    /// Returns the rendered HTML and normalized tags.
    pub fn content(&self) -> &SanitizedArticleContent {
        &self.content
    }
}

/// Validates article submissions and runs them through the pipeline.
///
/// Title and body limits are checked here, before any rendering, so the
/// core pipeline never sees oversized input.
///
/// # Examples
///
/// ```
/// use article_guard::{ArticlePipeline, RawSubmission, SafetyConfig, SanitizationErrorKind};
///
/// let articles = ArticlePipeline::new(&SafetyConfig::default());
///
/// let draft = articles
///     .process(RawSubmission::new("Hello", "Some *text*", "rust, web"))
///     .expect("valid submission");
/// assert_eq!(draft.content().rendered_html(), "<p>Some <em>text</em></p>\n");
/// assert_eq!(draft.content().stored_tags(), "rust,web");
///
/// let error = articles
///     .process(RawSubmission::new("", "body", ""))
///     .unwrap_err();
/// assert_eq!(error.kind(), SanitizationErrorKind::Empty);
/// ```
#[derive(Debug)]
pub struct ArticlePipeline {
    title: TitleSanitizer,
    body: BodySanitizer,
    pipeline: SanitizationPipeline,
}

impl ArticlePipeline {
    /// Builds the submission pipeline from the shared configuration.
    pub fn new(config: &SafetyConfig) -> Self {
        let limits = config.limits();
        Self {
            title: TitleSanitizer::new(limits.max_title_len),
            body: BodySanitizer::new(limits.max_body_len),
            pipeline: SanitizationPipeline::new(config),
        }
    }

    /// Validates a submission and produces the safe article views.
    ///
    /// # Errors
    ///
    /// Returns `SanitizationError` when the title or body is empty or over
    /// its limit. Tags never cause a failure; bad ones are dropped.
    pub fn process(&self, submission: RawSubmission) -> Result<ArticleDraft, SanitizationError> {
        let title = self.title.sanitize(submission.title).inspect_err(|e| {
            tracing::debug!(kind = %e.kind(), "rejected article title");
        })?;
        let body = self.body.sanitize(submission.body).inspect_err(|e| {
            tracing::debug!(kind = %e.kind(), "rejected article body");
        })?;

        let raw_tags = submission.raw_tags.into_inner();
        let content = self.pipeline.sanitize_article(body.as_ref(), &raw_tags);

        Ok(ArticleDraft {
            title,
            body,
            content,
        })
    }

    /// Returns the underlying sanitization pipeline, for rendering stored bodies.
    pub fn pipeline(&self) -> &SanitizationPipeline {
        &self.pipeline
    }
}

impl Default for ArticlePipeline {
    fn default() -> Self {
        Self::new(&SafetyConfig::default())
    }
}
