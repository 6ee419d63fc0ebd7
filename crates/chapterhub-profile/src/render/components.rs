//! Shared HTML building blocks for profile pages.
//!
//! Dynamic text reaches the markup only through [`Escaped`], which applies
//! [`escape_html`] in both text and attribute positions.

use maud::{DOCTYPE, Markup, PreEscaped, Render, html};

/// Inline CSS for the profile page. No external stylesheets.
pub const PAGE_CSS: &str = r#"
body{font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",sans-serif;background:#f9fafb;color:#1f2937;margin:0}
.container{max-width:720px;margin:0 auto;padding:2rem 1rem}
.card{background:#fff;border-radius:8px;padding:1.5rem;box-shadow:0 1px 3px rgba(0,0,0,.1);margin-bottom:1.5rem}
h1{margin:0;font-size:1.8rem}
.furigana{color:#6b7280;font-size:.9rem}
.company{margin-top:1rem;font-weight:600}
.section{margin-top:1.5rem}
.label{font-weight:600;margin-bottom:.25rem}
.bio{white-space:pre-wrap;word-break:break-word}
a{color:#2563eb;text-decoration:none}
.footer{text-align:center;color:#6b7280;font-size:.8rem}
"#;

/// Content-Security-Policy header value.
///
/// Inline styles only: no scripts, images, frames or form posts.
pub const CSP_HEADER: &str = "default-src 'none'; style-src 'unsafe-inline'; img-src 'none'; form-action 'none'; frame-ancestors 'none'; base-uri 'none'";

/// Escape text for use in HTML text or a quoted attribute value.
///
/// Substitutions run in a fixed order with `&` first, so entities produced
/// by the later steps are never escaped twice.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

/// Untrusted text spliced into markup.
///
/// Renders through [`escape_html`] instead of maud's default escaper, which
/// leaves single quotes alone.
#[derive(Debug, Clone, Copy)]
pub struct Escaped<'a>(pub &'a str);

impl Render for Escaped<'_> {
    fn render_to(&self, buffer: &mut String) {
        buffer.push_str(&escape_html(self.0));
    }
}

/// Check if a URL is safe to use in an `href` attribute.
pub fn is_safe_url(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}

/// Render the full HTML document around `body_content`.
pub fn page_shell(title: &str, description: &str, body_content: Markup, site_name: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="ja" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (Escaped(title)) }
                meta name="description" content=(Escaped(description));
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                div class="container" {
                    (body_content)
                    div class="footer" {
                        "Powered by " (Escaped(site_name))
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- escape_html() tests --

    #[test]
    fn escape_plain_text_untouched() {
        assert_eq!(escape_html("山田太郎 ABC"), "山田太郎 ABC");
    }

    #[test]
    fn escape_empty() {
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn escape_all_five_characters() {
        assert_eq!(
            escape_html(r#"& < > " '"#),
            "&amp; &lt; &gt; &quot; &#039;"
        );
    }

    #[test]
    fn escape_markup() {
        assert_eq!(escape_html("<b>X</b>"), "&lt;b&gt;X&lt;/b&gt;");
    }

    #[test]
    fn escape_existing_entity_is_escaped_once() {
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
        assert_eq!(escape_html("&amp;"), "&amp;amp;");
    }

    #[test]
    fn escape_output_has_no_raw_specials() {
        let out = escape_html(r#"<script>alert('x' + "y" & 1)</script>"#);
        assert!(!out.contains('<'));
        assert!(!out.contains('>'));
        assert!(!out.contains('"'));
        assert!(!out.contains('\''));
        // Every remaining '&' starts an entity we produced.
        for (i, _) in out.match_indices('&') {
            let rest = &out[i..];
            assert!(
                rest.starts_with("&amp;")
                    || rest.starts_with("&lt;")
                    || rest.starts_with("&gt;")
                    || rest.starts_with("&quot;")
                    || rest.starts_with("&#039;")
            );
        }
    }

    #[test]
    fn escaped_renders_in_attribute_position() {
        let markup = html! { a href={"mailto:" (Escaped(r#"a"b'c@d"#))} { "x" } };
        assert_eq!(
            markup.into_string(),
            r#"<a href="mailto:a&quot;b&#039;c@d">x</a>"#
        );
    }

    // -- is_safe_url() tests --

    #[test]
    fn is_safe_url_https() {
        assert!(is_safe_url("https://example.com"));
    }

    #[test]
    fn is_safe_url_http() {
        assert!(is_safe_url("http://example.com"));
    }

    #[test]
    fn is_safe_url_javascript() {
        assert!(!is_safe_url("javascript:alert(1)"));
    }

    #[test]
    fn is_safe_url_data_uri() {
        assert!(!is_safe_url("data:text/html,<script>alert(1)</script>"));
    }

    #[test]
    fn is_safe_url_relative() {
        assert!(!is_safe_url("/booking"));
    }

    // -- page_shell() tests --

    #[test]
    fn page_shell_is_self_contained() {
        let html = page_shell("t", "d", html! { p { "body" } }, "Site").into_string();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<html lang="ja">"#));
        assert!(html.contains(r#"<meta charset="UTF-8">"#));
        assert!(html.contains("<style>"));
        assert!(!html.contains("<script"));
        assert!(!html.contains("<link"));
        assert!(html.contains("Powered by Site"));
    }

    #[test]
    fn page_shell_escapes_title_and_description() {
        let html = page_shell("<t>", r#"d"'"#, html! {}, "S&S").into_string();
        assert!(html.contains("<title>&lt;t&gt;</title>"));
        assert!(html.contains(r#"content="d&quot;&#039;""#));
        assert!(html.contains("Powered by S&amp;S"));
    }
}
