//! Shared proptest strategies.

use proptest::prelude::*;

/// Titles that pass validation unchanged: no markup, no escapable characters,
/// no surrounding whitespace.
pub fn arb_title() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z0-9]([A-Za-z0-9 ,.!?'-]{0,60}[A-Za-z0-9])?").unwrap()
}

/// Non-blank markdown bodies well under the length limit.
pub fn arb_body() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ \\n]{0,3}[A-Za-z0-9#*_`>-][A-Za-z0-9 #*_`>\\n-]{0,200}").unwrap()
}

/// Flat sequences of hostile and benign HTML fragments.
pub fn arb_hostile_html() -> impl Strategy<Value = String> {
    let fragment = prop_oneof![
        Just("<script>alert(1)</script>".to_string()),
        Just("<img src=x onerror=alert(1)>".to_string()),
        Just(r#"<a href="javascript:alert(1)">x</a>"#.to_string()),
        Just(r#"<a href="https://ok.example.com" rel="x" target="_blank">ok</a>"#.to_string()),
        Just(r#"<p style="color:red" onclick="x()">t</p>"#.to_string()),
        Just(r#"<iframe src="https://evil.example.com"></iframe>"#.to_string()),
        Just(r#"<svg onload="alert(1)"></svg>"#.to_string()),
        Just("<style>body{display:none}</style>".to_string()),
        Just(r#"<abbr title="t" onmouseover="x()">A</abbr>"#.to_string()),
        Just("<ul><li>i</li></ul>".to_string()),
        Just("<div>block</div>".to_string()),
        Just("<!-- c -->".to_string()),
        Just("<strong>bold</strong>".to_string()),
        Just("<pre>\n\nlet x = 1;</pre>".to_string()),
        Just("<textarea>\n\nraw</textarea>".to_string()),
        Just("<b><p>x</b>".to_string()),
        Just("<h1><h2>t</h2></h1>".to_string()),
        Just("<table><tr><td>cell</td></tr></table>".to_string()),
        prop::string::string_regex("[A-Za-z0-9 ]{1,12}").unwrap(),
    ];
    prop::collection::vec(fragment, 0..8).prop_map(|parts| parts.concat())
}

/// Markdown documents mixing formatting with hostile raw HTML and links.
pub fn arb_markdown() -> impl Strategy<Value = String> {
    let block = prop_oneof![
        prop::string::string_regex("#{1,6} [A-Za-z0-9 ]{1,20}").unwrap(),
        prop::string::string_regex("[A-Za-z0-9 ]{1,20} \\*[a-z]{1,8}\\* __[a-z]{1,8}__").unwrap(),
        prop::string::string_regex("- [a-z]{1,8}\n- [a-z]{1,8}").unwrap(),
        prop::string::string_regex("1\\. [a-z]{1,8}\n2\\. [a-z]{1,8}").unwrap(),
        prop::string::string_regex("> [A-Za-z ]{1,20}").unwrap(),
        prop::string::string_regex("```\n[a-z =;]{1,20}\n```").unwrap(),
        prop::string::string_regex("`[a-z<>]{1,10}`").unwrap(),
        Just("[safe](https://example.com \"Title\")".to_string()),
        Just("[bad](javascript:alert(1))".to_string()),
        Just("<script>alert(1)</script>".to_string()),
        Just("<img src=x onerror=alert(1)>".to_string()),
        Just(r#"<div onclick="x()">click</div>"#.to_string()),
        Just(r#"text <span style="color:red">red</span> text"#.to_string()),
        prop::string::string_regex("<pre>\n{1,3}[a-z =;]{1,20}</pre>").unwrap(),
        Just("<textarea>\n\nraw</textarea>".to_string()),
        Just("<b><p>x</b>".to_string()),
        Just("<h1><h2>t</h2></h1>".to_string()),
        Just("<table>\n<tr><td>cell</td></tr>\n</table>".to_string()),
    ];
    prop::collection::vec(block, 0..6).prop_map(|blocks| blocks.join("\n\n"))
}

/// Comma-separated tag strings with blanks, markup, long and plain tokens.
pub fn arb_tag_list() -> impl Strategy<Value = String> {
    let token = prop_oneof![
        prop::string::string_regex("[a-z0-9-]{1,12}").unwrap(),
        prop::string::string_regex(" {0,3}").unwrap(),
        prop::string::string_regex("[a-z]{45,60}").unwrap(),
        Just("<script>x</script>".to_string()),
        Just("<b>bold</b>".to_string()),
        Just("a&#44;b".to_string()),
        Just("<b> </b>".to_string()),
        Just("&#x200b;".to_string()),
    ];
    prop::collection::vec(token, 0..20).prop_map(|tokens| tokens.join(","))
}

/// Relative paths on the current origin without `//` sequences.
pub fn arb_path() -> impl Strategy<Value = String> {
    prop::string::string_regex("(/[a-z0-9_-]{1,12}){1,4}(\\?[a-z]{1,5}=[0-9]{1,3})?").unwrap()
}

/// Hosts that differ from `blog.example.com`.
pub fn arb_foreign_host() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{3,10}\\.(com|net|org|io)(:[1-9][0-9]{2,3})?").unwrap()
}
