//! Content-safety core for a single-author blog.
//!
//! This crate turns untrusted author input into output that is safe to serve,
//! and keeps caller-supplied redirect targets on the site:
//! - **Sanitization**: markdown is rendered and then filtered through a fixed
//!   element/attribute allow-list; tags are normalized with the same filter
//! - **Redirect guarding**: `next`-style targets are resolved against the
//!   request origin and replaced with a fallback when they leave it
//! - **Taint tracking**: request input is `Tainted<T>` until a validator turns
//!   it into `Verified<T>`
//!
//! # Core Types
//!
//! - [`SafetyConfig`]: Immutable allow-lists and limits, built once
//! - [`SanitizationPipeline`]: Markdown → safe HTML, raw tags → safe tags
//! - [`RedirectGuard`]: Open-redirect protection against an [`OriginContext`]
//! - [`ArticlePipeline`]: Length checks plus sanitization for a [`RawSubmission`]
//! - [`Navigator`]: Redirect sink that only accepts guard-approved locations
//!
//! # Examples
//!
//! ```
//! use article_guard::{OriginContext, RedirectGuard, SafetyConfig, SanitizationPipeline};
//!
//! let config = SafetyConfig::default();
//!
//! let pipeline = SanitizationPipeline::new(&config);
//! let html = pipeline.render_content("**Hi** <img src=x onerror=alert(1)>");
//! assert!(html.starts_with("<p><strong>Hi</strong>"));
//! assert!(!html.contains("onerror"));
//!
//! let guard = RedirectGuard::new(&config);
//! let origin = OriginContext::new("https", "blog.example.com").unwrap();
//! assert_eq!(guard.resolve_redirect(Some("//evil.example.com"), &origin, "/"), "/");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod navigation;
mod origin;
mod pipeline;
mod redirect;
mod sanitizer;
mod site;
mod submission;
mod tags;
mod tainted;
mod verified;

#[cfg(test)]
mod test_utils;

pub use config::{
    ContentPolicy, Limits, SafetyConfig, DEFAULT_ALLOWED_ATTRIBUTES, DEFAULT_ALLOWED_TAGS,
    DEFAULT_REDIRECT_SCHEMES, DEFAULT_URL_SCHEMES,
};
pub use error::{OriginError, SanitizationError, SanitizationErrorKind};
pub use navigation::{NavigationError, NavigationErrorKind, Navigator, RecordingNavigator};
pub use origin::OriginContext;
pub use pipeline::{SanitizationPipeline, SanitizedArticleContent};
pub use redirect::{RedirectGuard, RedirectLocation, RedirectRejection};
pub use sanitizer::{BodySanitizer, HtmlSanitizer, Sanitizer, TitleSanitizer};
pub use site::{SiteSettings, DEFAULT_SITE_TITLE};
pub use submission::{ArticleDraft, ArticlePipeline, RawSubmission};
pub use tags::{join_tags, split_stored_tags, TAG_SEPARATOR};
pub use tainted::Tainted;
pub use verified::Verified;
