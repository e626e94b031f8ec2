use super::*;

// =============================================================
// split_mentions
// =============================================================

#[test]
fn split_finds_mentions_between_text() {
    let segments = split_mentions("hi @ana and @ben_2!");
    assert_eq!(
        segments,
        vec![
            Segment::Text("hi "),
            Segment::Mention("ana"),
            Segment::Text(" and "),
            Segment::Mention("ben_2"),
            Segment::Text("!"),
        ]
    );
}

#[test]
fn split_ignores_email_addresses() {
    assert_eq!(split_mentions("mail me@example.com"), vec![Segment::Text("mail me@example.com")]);
}

#[test]
fn split_ignores_bare_at_sign() {
    assert_eq!(split_mentions("meet @ 5"), vec![Segment::Text("meet @ 5")]);
}

#[test]
fn split_handles_mention_at_start_and_end() {
    assert_eq!(split_mentions("@cy"), vec![Segment::Mention("cy")]);
}

// =============================================================
// extract_mentions
// =============================================================

#[test]
fn extract_dedups_in_first_seen_order() {
    assert_eq!(extract_mentions("@b hi @a, @b again"), vec!["b".to_owned(), "a".to_owned()]);
}

// =============================================================
// render_post
// =============================================================

#[test]
fn render_links_mentions_in_paragraphs() {
    let html = render_post("thanks @ana for the **fix**");
    assert!(html.contains("<a class=\"mention\" href=\"/u/ana\">@ana</a>"), "{html}");
    assert!(html.contains("<strong>fix</strong>"), "{html}");
}

#[test]
fn render_keeps_mentions_literal_in_code() {
    let html = render_post("use `@derive` here");
    assert!(html.contains("<code>@derive</code>"), "{html}");
    assert!(!html.contains("class=\"mention\""), "{html}");
}

#[test]
fn render_escapes_raw_html() {
    let html = render_post("<script>alert(1)</script>");
    assert!(!html.contains("<script>"), "{html}");
    assert!(html.contains("&lt;script&gt;"), "{html}");
}

#[test]
fn render_is_deterministic() {
    let src = "# Title\n\n- [ ] @ana review\n- [x] ship";
    assert_eq!(render_post(src), render_post(src));
}

#[test]
fn render_neutralizes_script_links_and_autolinks() {
    let html = render_post("[click](javascript:alert(document.cookie)) and <javascript:alert(1)>");
    assert!(!html.contains("href=\"javascript:"), "{html}");
    assert!(html.contains("href=\"#\""), "{html}");
}

#[test]
fn render_neutralizes_obfuscated_schemes_and_images() {
    let html = render_post("[a](JaVaScRiPt:alert(1)) [b](data:text/html,x) ![c](vbscript:x)");
    assert!(!html.to_ascii_lowercase().contains("javascript:"), "{html}");
    assert!(!html.contains("data:"), "{html}");
    assert!(!html.contains("vbscript:"), "{html}");
}

#[test]
fn render_keeps_web_mail_and_relative_links() {
    let html = render_post("[w](https://example.com/a?b=1) [m](mailto:ana@example.com) [r](/u/ana) [f](#top)");
    assert!(html.contains("href=\"https://example.com/a?b=1\""), "{html}");
    assert!(html.contains("href=\"mailto:ana@example.com\""), "{html}");
    assert!(html.contains("href=\"/u/ana\""), "{html}");
    assert!(html.contains("href=\"#top\""), "{html}");
}

#[test]
fn is_safe_url_ignores_embedded_whitespace() {
    assert!(!is_safe_url("java\tscript:alert(1)"));
    assert!(!is_safe_url(" javascript:alert(1)"));
    assert!(is_safe_url("docs/page:2"));
}
