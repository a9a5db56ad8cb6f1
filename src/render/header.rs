use super::image::{ImageWarning, resolve_or_warn};
use super::style::inline_style;
use super::text::{body_html, escape_html};
use crate::domain::{HeaderConfig, Subject};

const TITLE_WEIGHT: u16 = 700;
const BODY_WEIGHT: u16 = 600;

/// Render the fixed top region: hidden pre-header, optional full-width image,
/// blank spacer, title (subject fallback), body.
pub fn render_header(
    header: &HeaderConfig,
    subject: &Subject,
    warnings: &mut Vec<ImageWarning>,
) -> String {
    let mut parts = Vec::new();

    if let Some(pre_header) = header.pre_header_text.as_deref() {
        let trimmed = pre_header.trim();
        if !trimmed.is_empty() {
            parts.push("<tr>".to_string());
            // Email-client styles that keep the text out of the layout but
            // visible to the inbox preview line.
            parts.push(
                "<td style=\"padding: 0; font-size: 0; line-height: 0; display: none !important; max-height: 0px; max-width: 0px; opacity: 0; overflow: hidden; mso-hide: all;\">"
                    .to_string(),
            );
            parts.push(format!(
                "<span style=\"font-size: 1px; color: #ffffff; line-height: 1px;\">{}</span>",
                escape_html(trimmed)
            ));
            parts.push("</td>".to_string());
            parts.push("</tr>".to_string());
        }
    }

    let title = match header.title.as_deref().map(str::trim) {
        Some(t) if !t.is_empty() => t,
        _ => subject.as_ref(),
    };

    if let Some(source) = &header.image {
        if let Some(src) = resolve_or_warn(source, "header", warnings) {
            parts.push("<tr>".to_string());
            parts.push("<td style=\"padding: 0; margin: 0;\">".to_string());
            parts.push(format!(
                "<img src=\"{}\" alt=\"{}\" style=\"width: 100%; max-width: {}px; height: auto; display: block; margin: 0; padding: 0;\">",
                escape_html(&src),
                escape_html(title),
                header.image_width_px
            ));
            parts.push("</td>".to_string());
            parts.push("</tr>".to_string());
        }
    }

    // Blank spacer row between image and title
    parts.push("<tr>".to_string());
    parts.push(format!(
        "<td style=\"padding: 20px 20px; background-color: {};\">&nbsp;</td>",
        header.background_color
    ));
    parts.push("</tr>".to_string());

    parts.push("<tr>".to_string());
    parts.push(format!(
        "<td style=\"padding: 0 20px 10px 20px; background-color: {};\">",
        header.background_color
    ));
    parts.push(format!(
        "<h1 style=\"{} margin: 0;\">{}</h1>",
        inline_style(&header.title_style, TITLE_WEIGHT, "1.3"),
        escape_html(title)
    ));
    parts.push("</td>".to_string());
    parts.push("</tr>".to_string());

    if !header.body_text.trim().is_empty() {
        let style_attr = format!(
            "{} margin: 0;",
            inline_style(&header.body_style, BODY_WEIGHT, "1.5")
        );
        parts.push("<tr>".to_string());
        parts.push(format!(
            "<td style=\"padding: 0 20px 20px 20px; background-color: {};\">",
            header.background_color
        ));
        parts.push(body_html(&header.body_text, &style_attr));
        parts.push("</td>".to_string());
        parts.push("</tr>".to_string());
    }

    parts.join("\n")
}
