//! End-to-end flows as the routing layer would drive them.

use article_guard::{
    join_tags, split_stored_tags, ArticlePipeline, Navigator, OriginContext, RawSubmission,
    RecordingNavigator, RedirectGuard, SafetyConfig, SanitizationErrorKind, SanitizationPipeline,
    SiteSettings, Tainted,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

#[test]
fn create_article_then_render_on_view() {
    init_tracing();
    let config = SafetyConfig::default();
    let articles = ArticlePipeline::new(&config);

    // Owner submits the form
    let draft = articles
        .process(RawSubmission::new(
            "Release <em>notes</em>",
            "## v1.0\n\n- faster\n- <span onclick=\"steal()\">safer</span>\n",
            "release, rust, , <b>news</b>",
        ))
        .expect("valid submission");

    // Persisted columns
    let stored_title = draft.title().to_string();
    let stored_body = draft.body().to_string();
    let stored_tags = draft.content().stored_tags();
    assert_eq!(stored_title, "Release notes");
    assert_eq!(stored_tags, "release,rust,<b>news</b>");

    // Visitor views the article: the stored body is rendered again
    let html = articles.pipeline().render_content(&stored_body);
    assert_eq!(html, draft.content().rendered_html());
    assert!(html.contains("<h2>v1.0</h2>"));
    assert!(html.contains("<li>safer</li>"));
    assert!(!html.contains("onclick"));

    assert_eq!(
        split_stored_tags(&stored_tags),
        vec!["release", "rust", "<b>news</b>"]
    );
}

#[test]
fn edit_with_oversized_fields_is_rejected() {
    let articles = ArticlePipeline::default();

    let title_error = articles
        .process(RawSubmission::new("x".repeat(201), "body", ""))
        .unwrap_err();
    assert_eq!(title_error.kind(), SanitizationErrorKind::TooLong);

    let body_error = articles
        .process(RawSubmission::new("Title", "y".repeat(50_001), ""))
        .unwrap_err();
    assert_eq!(body_error.kind(), SanitizationErrorKind::TooLong);

    let empty_error = articles
        .process(RawSubmission::new("   ", "body", ""))
        .unwrap_err();
    assert_eq!(empty_error.kind(), SanitizationErrorKind::Empty);
}

#[test]
fn login_next_parameter_flow() {
    init_tracing();
    let guard = RedirectGuard::new(&SafetyConfig::default());
    let origin = OriginContext::from_host_url("https://blog.example.com/").expect("origin");
    let navigator = RecordingNavigator::new();

    let cases = [
        (Some("/article/7/edit"), "/article/7/edit"),
        (Some("https://blog.example.com/config"), "https://blog.example.com/config"),
        (Some("//evil.example.com/login"), "/"),
        (Some("https://evil.example.com/"), "/"),
        (Some("javascript:alert(document.cookie)"), "/"),
        (Some(""), "/"),
        (None, "/"),
    ];

    for (next, expected) in cases {
        let location = guard.resolve(next.map(|n| Tainted::new(n.to_string())), &origin, "/");
        navigator.navigate(&location).expect("recording never fails");
        assert_eq!(navigator.last().as_deref(), Some(expected), "{:?}", next);
    }

    assert_eq!(navigator.len(), cases.len());
}

#[test]
fn resolve_redirect_matches_is_safe_target() {
    let guard = RedirectGuard::default();
    let origin = OriginContext::new("https", "blog.example.com").expect("origin");

    for target in [
        "/",
        "/article/5",
        "https://blog.example.com/admin",
        "//evil.example.com/path",
        "https://blog.example.com:8080/",
        "data:text/html,hi",
    ] {
        let resolved = guard.resolve_redirect(Some(target), &origin, "/fallback");
        if guard.is_safe_target(target, &origin) {
            assert_eq!(resolved, target);
        } else {
            assert_eq!(resolved, "/fallback");
        }
    }
}

#[test]
fn site_settings_update() {
    let settings = SiteSettings::normalize(
        Tainted::new("My <script>x</script>Blog".to_string()),
        Tainted::new("  Notes &amp; essays  ".to_string()),
        &SafetyConfig::default(),
    )
    .expect("valid settings");

    assert_eq!(settings.title(), "My xBlog");
    assert_eq!(settings.baseline(), "Notes &amp; essays");
}

#[test]
fn tags_survive_storage_without_resanitizing() {
    let pipeline = SanitizationPipeline::default();

    let tags = pipeline.normalize_tags("<script>x</script>, ok, <i>it</i>");
    let stored = join_tags(&tags);

    assert_eq!(stored, "x,ok,<i>it</i>");
    let reloaded = split_stored_tags(&stored);
    for tag in &reloaded {
        assert_eq!(&pipeline.clean_html(tag), tag);
    }
}
