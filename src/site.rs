use crate::config::SafetyConfig;
use crate::sanitizer::HtmlSanitizer;
use crate::{SanitizationError, SanitizationErrorKind, Tainted};

/// Title used when the blog has not been configured yet.
pub const DEFAULT_SITE_TITLE: &str = "Mon Blog";

/// Blog-wide settings edited by the owner: the site title and baseline.
///
/// Both fields are plain text. Markup is removed and overlong values are
/// truncated rather than rejected; only an empty title is an error.
///
/// # Examples
///
/// ```
/// use article_guard::{SafetyConfig, SiteSettings, Tainted};
///
/// let settings = SiteSettings::normalize(
///     Tainted::new(" <h1>Field notes</h1> ".to_string()),
///     Tainted::new("Writing about <i>Rust</i>".to_string()),
///     &SafetyConfig::default(),
/// )
/// .expect("valid settings");
///
/// assert_eq!(settings.title(), "Field notes");
/// assert_eq!(settings.baseline(), "Writing about Rust");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSettings {
    title: String,
    baseline: String,
}

impl SiteSettings {
    /// Strips, trims and truncates the submitted settings.
    ///
    /// # Errors
    ///
    /// Returns `SanitizationError` with kind `Empty` if the title has no
    /// text left once markup is removed.
    pub fn normalize(
        title: Tainted<String>,
        baseline: Tainted<String>,
        config: &SafetyConfig,
    ) -> Result<Self, SanitizationError> {
        let html = HtmlSanitizer::new(config.content_policy());
        let limits = config.limits();

        let title = plain_text(&html, &title.into_inner(), limits.max_title_len);
        if title.is_empty() {
            return Err(SanitizationError::new(
                SanitizationErrorKind::Empty,
                "site title is empty",
            ));
        }
        let baseline = plain_text(&html, &baseline.into_inner(), limits.max_baseline_len);

        Ok(Self { title, baseline })
    }

    /// Returns the site title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the site baseline, possibly empty.
    pub fn baseline(&self) -> &str {
        &self.baseline
    }
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            title: DEFAULT_SITE_TITLE.to_string(),
            baseline: String::new(),
        }
    }
}

fn plain_text(html: &HtmlSanitizer, raw: &str, max_chars: usize) -> String {
    let stripped = html.strip_all_markup(raw.trim());
    truncate_chars(stripped.trim(), max_chars)
}

// Cuts on a char boundary and never inside an `&...;` escape.
fn truncate_chars(text: &str, max_chars: usize) -> String {
    let Some((cut, _)) = text.char_indices().nth(max_chars) else {
        return text.to_string();
    };
    let mut kept = &text[..cut];
    if let Some(amp) = kept.rfind('&') {
        if !kept[amp..].contains(';') {
            kept = &kept[..amp];
        }
    }
    kept.trim_end().to_string()
}
