use super::image::{ImageWarning, resolve_or_warn};
use super::style::inline_style;
use super::text::{body_html, escape_html, image_tag, wrap_in_link};
use crate::domain::{ImageAlignment, Layer, StyledText};

// Semantic weights for the three heading slots when their style is bold.
const H2_WEIGHT: u16 = 700;
const H3_WEIGHT: u16 = 600;
const H4_WEIGHT: u16 = 500;

/// Render one content layer into a table-row fragment.
///
/// With an image the row is a two-column inner table; without one the text
/// cell spans the full width. A missing or invalid image degrades to the
/// text-only branch, recording a warning.
pub fn render_layer(
    layer: &Layer,
    fallback_text_color: &str,
    warnings: &mut Vec<ImageWarning>,
) -> String {
    let resolved_image = layer.image.as_ref().and_then(|image| {
        resolve_or_warn(&image.source, &format!("layer {}", layer.order), warnings)
            .map(|src| (image, src))
    });

    let text_block = wrap_in_link(
        text_block(layer, fallback_text_color),
        layer.link_url.as_deref(),
    );
    let text_cell = format!("<td style=\"vertical-align: top;\">{text_block}</td>");

    let mut parts = vec![
        "<tr>".to_string(),
        format!("<td style=\"padding: {}px 20px;\">", layer.padding_px),
        "<table role=\"presentation\" style=\"width: 100%; border-collapse: collapse;\">"
            .to_string(),
        "<tr>".to_string(),
    ];

    match resolved_image {
        None => parts.push(text_cell),
        Some((image, src)) => {
            let alt = layer
                .heading_h2
                .as_ref()
                .map(|h| h.text.as_str())
                .unwrap_or("Newsletter image");
            let tag = wrap_in_link(
                image_tag(&src, alt, image.width_px),
                layer.link_url.as_deref(),
            );
            // Transparent cell background, so PNG alpha never sits on a white box.
            let side = match image.alignment {
                ImageAlignment::Left => "right",
                ImageAlignment::Right => "left",
            };
            let image_cell = format!(
                "<td width=\"{w}\" style=\"width: {w}px; vertical-align: top; background-color: transparent; padding-{side}: 20px;\">{tag}</td>",
                w = image.width_px,
            );
            match image.alignment {
                ImageAlignment::Left => {
                    parts.push(image_cell);
                    parts.push(text_cell);
                }
                ImageAlignment::Right => {
                    parts.push(text_cell);
                    parts.push(image_cell);
                }
            }
        }
    }

    parts.push("</tr>".to_string());
    parts.push("</table>".to_string());
    parts.push("</td>".to_string());
    parts.push("</tr>".to_string());
    parts.join("\n")
}

fn heading(slot: &Option<StyledText>, tag: &str, weight: u16, line_height: &str, margin: &str) -> Option<String> {
    let styled = slot.as_ref()?;
    if styled.is_blank() {
        return None;
    }
    Some(format!(
        "<{tag} style=\"{} margin: {margin};\">{}</{tag}>",
        inline_style(&styled.style, weight, line_height),
        escape_html(styled.text.trim())
    ))
}

fn text_block(layer: &Layer, fallback_text_color: &str) -> String {
    let mut parts = Vec::new();

    if let Some(h2) = heading(&layer.heading_h2, "h2", H2_WEIGHT, "1.2", "0 0 10px 0") {
        parts.push(h2);
    }
    if let Some(h3) = heading(&layer.heading_h3, "h3", H3_WEIGHT, "1.4", "0 0 15px 0") {
        parts.push(h3);
    }
    if let Some(h4) = heading(&layer.heading_h4, "h4", H4_WEIGHT, "1.4", "0 0 10px 0") {
        parts.push(h4);
    }

    if !layer.body.trim().is_empty() {
        let style_attr = format!(
            "color: {fallback_text_color}; font-size: 16px; font-weight: 400; line-height: 1.5; margin: 0;"
        );
        parts.push(body_html(&layer.body, &style_attr));
    }

    parts.join("\n")
}
