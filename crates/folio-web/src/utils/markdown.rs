/// Markdown rendering for project descriptions
///
/// Plain CommonMark, no GitHub extensions. Raw HTML in the source is shown as
/// text and link targets with unexpected protocols are dropped, so the output
/// can be injected as inner HTML.

use pulldown_cmark::{html, CowStr, Event, Parser, Tag};

const SAFE_PROTOCOLS: &[&str] = &["http", "https", "mailto", "irc", "ircs", "xmpp"];

pub fn to_html(source: &str) -> String {
    let parser = Parser::new(source).map(sanitize_event);

    let mut output = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut output, parser);
    output
}

fn sanitize_event(event: Event<'_>) -> Event<'_> {
    match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link { link_type, dest_url, title, id }) => Event::Start(Tag::Link {
            link_type,
            dest_url: sanitize_url(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image { link_type, dest_url, title, id }) => Event::Start(Tag::Image {
            link_type,
            dest_url: sanitize_url(dest_url),
            title,
            id,
        }),
        other => other,
    }
}

fn sanitize_url(url: CowStr<'_>) -> CowStr<'_> {
    if is_safe_url(&url) {
        url
    } else {
        CowStr::Borrowed("")
    }
}

/// Relative URLs pass; absolute ones need an allow-listed protocol.
/// A colon after the first `/`, `?` or `#` does not start a protocol.
fn is_safe_url(url: &str) -> bool {
    let Some(colon) = url.find(':') else {
        return true;
    };

    let before_colon = |c: char| url.find(c).is_some_and(|i| i < colon);
    if before_colon('/') || before_colon('?') || before_colon('#') {
        return true;
    }

    let protocol = &url[..colon];
    SAFE_PROTOCOLS.iter().any(|safe| protocol.eq_ignore_ascii_case(safe))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_inline_markup() {
        assert_eq!(
            to_html("Built with **Rust** and _Leptos_"),
            "<p>Built with <strong>Rust</strong> and <em>Leptos</em></p>\n"
        );
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let out = to_html("Hello <b>world</b>");
        assert_eq!(out, "<p>Hello &lt;b&gt;world&lt;/b&gt;</p>\n");

        let out = to_html("<script>alert(1)</script>");
        assert!(!out.contains("<script"));
        assert!(out.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_links_keep_safe_targets() {
        let out = to_html("[store](https://openai.com/blog) and [docs](/docs/intro)");
        assert!(out.contains(r#"<a href="https://openai.com/blog">store</a>"#));
        assert!(out.contains(r#"<a href="/docs/intro">docs</a>"#));
    }

    #[test]
    fn test_script_links_are_blanked() {
        let out = to_html("[click](javascript:alert(1))");
        assert!(out.contains(r#"<a href="">click</a>"#));
        assert!(!out.contains("javascript"));
    }

    #[test]
    fn test_extensions_stay_literal() {
        assert_eq!(to_html("~~old~~"), "<p>~~old~~</p>\n");

        let out = to_html("| a | b |\n|---|---|\n| 1 | 2 |");
        assert!(!out.contains("<table"));
    }

    #[test]
    fn test_is_safe_url() {
        assert!(is_safe_url("https://example.com"));
        assert!(is_safe_url("MAILTO:me@example.com"));
        assert!(is_safe_url("#section"));
        assert!(is_safe_url("./page?ref=a:b"));
        assert!(is_safe_url("/path:with:colons"));
        assert!(!is_safe_url("javascript:alert(1)"));
        assert!(!is_safe_url("data:text/html;base64,AAAA"));
        assert!(!is_safe_url("vbscript:msgbox"));
    }
}
