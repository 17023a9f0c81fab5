use super::*;

#[test]
fn renders_emphasis_and_code() {
    let html = render_markdown_html("Use **flexbox** with `display: flex`.");
    assert!(html.contains("<strong>flexbox</strong>"));
    assert!(html.contains("<code>display: flex</code>"));
}

#[test]
fn drops_raw_html() {
    let html = render_markdown_html("hello <script>alert(1)</script> world");
    assert!(!html.contains("<script>"));
    assert!(html.contains("hello"));
}

#[test]
fn single_newlines_become_line_breaks() {
    let html = render_markdown_html("• one\n• two");
    assert!(html.contains("<br />"));
}

#[test]
fn empty_input_renders_empty() {
    assert_eq!(render_markdown_html(""), "");
}

// =============================================================
// Link targets
// =============================================================

#[test]
fn javascript_link_target_is_blanked() {
    let html = render_markdown_html("[click](javascript:alert(1))");
    assert!(!html.contains("javascript"));
    assert!(html.contains(">click</a>"));
}

#[test]
fn mixed_case_and_data_schemes_are_blanked() {
    let html = render_markdown_html("[a](JavaScript:void(0)) ![b](data:text/html;base64,AAAA)");
    assert!(!html.to_lowercase().contains("javascript"));
    assert!(!html.contains("data:"));
}

#[test]
fn web_and_relative_links_survive() {
    let html = render_markdown_html("[docs](https://developer.mozilla.org/) [top](#intro) [page](/guide?a=b:c)");
    assert!(html.contains(r#"href="https://developer.mozilla.org/""#));
    assert!(html.contains(r##"href="#intro""##));
    assert!(html.contains(r#"href="/guide?a=b:c""#));
}

#[test]
fn allowed_url_checks() {
    assert!(is_allowed_url("https://example.com"));
    assert!(is_allowed_url("MAILTO:help@example.com"));
    assert!(is_allowed_url("relative/path"));
    assert!(!is_allowed_url("javascript:alert(1)"));
    assert!(!is_allowed_url("vbscript:msgbox"));
    assert!(!is_allowed_url(" javascript:alert(1)"));
}
