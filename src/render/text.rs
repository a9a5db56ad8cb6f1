/// Escape text for element content or attribute values.
pub fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Check for a basic HTML tag pattern: `<tagname...>`. Body content that
/// carries one is trusted rich-text output and is embedded verbatim; anything
/// else is treated as plain text.
pub fn looks_like_markup(s: &str) -> bool {
    let mut in_tag = false;
    let mut has_tag_content = false;

    for c in s.chars() {
        if c == '<' {
            in_tag = true;
            has_tag_content = false;
        } else if c == '>' && in_tag {
            if has_tag_content {
                return true;
            }
            in_tag = false;
        } else if in_tag && (c.is_alphanumeric() || c == '/' || c == '!') {
            has_tag_content = true;
        }
    }

    false
}

/// Body content for a text cell: plain text is escaped with newlines turned
/// into `<br>`; pre-sanitized markup is wrapped verbatim in a styled container.
pub fn body_html(content: &str, style_attr: &str) -> String {
    if looks_like_markup(content) {
        format!("<div style=\"{style_attr}\">{content}</div>")
    } else {
        let escaped = escape_html(content).replace('\n', "<br>");
        format!("<p style=\"{style_attr}\">{escaped}</p>")
    }
}

/// Anchor wrapping targets the inner content of a cell, never the cell itself,
/// for clients that strip block-level links.
pub fn wrap_in_link(inner: String, link_url: Option<&str>) -> String {
    match link_url.map(str::trim) {
        Some(url) if !url.is_empty() => format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" style=\"color: inherit; text-decoration: none;\">{inner}</a>",
            escape_html(url)
        ),
        _ => inner,
    }
}

pub fn image_tag(src: &str, alt: &str, width_px: u32) -> String {
    format!(
        "<img src=\"{}\" alt=\"{}\" width=\"{width_px}\" style=\"display: block; width: 100%; max-width: {width_px}px; height: auto; border: 0;\">",
        escape_html(src),
        escape_html(alt)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn special_characters_are_escaped() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn plain_text_is_not_markup() {
        assert!(!looks_like_markup("Hello there"));
        assert!(!looks_like_markup("a < b and b > c"));
        assert!(!looks_like_markup(""));
    }

    #[test]
    fn tagged_content_is_markup() {
        assert!(looks_like_markup("<p>Hello</p>"));
        assert!(looks_like_markup("before <br> after"));
        assert!(looks_like_markup("<!-- note -->"));
    }

    #[test]
    fn plain_body_escapes_and_breaks_lines() {
        let html = body_html("Hi\nthere & friends", "color: #333333;");
        assert_eq!(
            html,
            "<p style=\"color: #333333;\">Hi<br>there &amp; friends</p>"
        );
    }

    #[test]
    fn markup_body_is_embedded_verbatim() {
        let html = body_html("<p>Rich <b>text</b></p>", "color: #333333;");
        assert_eq!(
            html,
            "<div style=\"color: #333333;\"><p>Rich <b>text</b></p></div>"
        );
    }

    #[test]
    fn blank_link_url_leaves_content_unwrapped() {
        assert_eq!(wrap_in_link("inner".into(), Some("  ")), "inner");
        assert_eq!(wrap_in_link("inner".into(), None), "inner");
    }

    #[test]
    fn link_wrapping_targets_a_new_tab_without_referrer() {
        let wrapped = wrap_in_link("inner".into(), Some("https://x.test"));
        assert!(wrapped.starts_with("<a href=\"https://x.test\""));
        assert!(wrapped.contains("target=\"_blank\""));
        assert!(wrapped.contains("rel=\"noopener noreferrer\""));
        assert!(wrapped.ends_with("inner</a>"));
    }
}
