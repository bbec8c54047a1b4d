//! Article submission and rendering.
//!
//! This example runs a hostile submission through the ArticlePipeline and
//! shows what gets stored and what a visitor sees.
//!
//! Run with: `cargo run --example render_article`

use article_guard::{split_stored_tags, ArticlePipeline, RawSubmission, SafetyConfig};

fn main() {
    println!("=== Render Article Example ===\n");

    let articles = ArticlePipeline::new(&SafetyConfig::default());

    let submission = RawSubmission::new(
        "Release <script>alert(1)</script>notes",
        "## What's new\n\n- faster *rendering*\n- [docs](https://example.com)\n\n\
         <img src=x onerror=alert(1)>\n\n[click](javascript:alert(1))\n",
        "release, , <b>news</b>, <b> </b>, rust",
    );

    let draft = match articles.process(submission) {
        Ok(draft) => draft,
        Err(e) => {
            eprintln!("Submission rejected: {}", e);
            return;
        }
    };

    println!("--- Stored ---");
    println!("title: {:?}", draft.title());
    println!("tags:  {:?}", draft.content().stored_tags());

    println!("\n--- Rendered ---");
    println!("{}", draft.content().rendered_html());

    println!("--- Tags on display ---");
    for tag in split_stored_tags(&draft.content().stored_tags()) {
        println!("  {}", tag);
    }

    println!("\n--- Oversized title ---");
    match articles.process(RawSubmission::new("x".repeat(201), "body", "")) {
        Ok(_) => println!("Unexpected success"),
        Err(e) => println!("Rejected (expected): {}", e),
    }
}
