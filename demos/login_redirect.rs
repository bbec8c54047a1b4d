//! Post-login redirect handling.
//!
//! This example shows how a `next` query parameter is handled:
//! 1. Mark the parameter as Tainted<String>
//! 2. Resolve it against the request origin with the RedirectGuard
//! 3. Hand the Verified<RedirectLocation> to a Navigator
//!
//! Run with: `cargo run --example login_redirect`

use article_guard::{
    Navigator, OriginContext, RecordingNavigator, RedirectGuard, SafetyConfig, Tainted,
};

fn main() {
    println!("=== Login Redirect Example ===\n");

    let guard = RedirectGuard::new(&SafetyConfig::default());
    let navigator = RecordingNavigator::new();
    let origin = match OriginContext::new("https", "blog.example.com") {
        Ok(origin) => origin,
        Err(e) => {
            eprintln!("Invalid origin: {}", e);
            return;
        }
    };
    println!("Serving origin: {}\n", origin);

    let candidates = [
        Some("/article/7/edit"),
        Some("https://blog.example.com/config"),
        Some("//evil.example.com/phish"),
        Some("https://user:pw@blog.example.com/"),
        Some("javascript:alert(document.cookie)"),
        Some("   "),
        None,
    ];

    for next in candidates {
        match next.map(|n| guard.check_target(n, &origin)) {
            Some(Ok(())) => println!("next={:?}: on-site", next),
            Some(Err(reason)) => println!("next={:?}: refused ({})", next, reason),
            None => println!("next absent"),
        }

        let location = guard.resolve(next.map(|n| Tainted::new(n.to_string())), &origin, "/");
        if let Err(e) = navigator.navigate(&location) {
            eprintln!("Navigation error: {}", e);
            continue;
        }
        println!("  -> Location: {}", location.as_ref());
    }

    println!("\n{} redirects issued", navigator.len());
}
