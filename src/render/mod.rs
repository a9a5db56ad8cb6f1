mod footer;
mod header;
mod image;
mod layer;
mod style;
mod subscription;
mod text;

pub use footer::render_footer;
pub use header::render_header;
pub use image::{ImageProcessingError, ImageWarning, resolve};
pub use layer::render_layer;
pub use style::inline_style;
pub use subscription::render_subscription;
pub use text::{body_html, escape_html, looks_like_markup};

use crate::domain::NewsletterDocument;

/// Assemble the complete HTML document. Total and deterministic: identical
/// input yields byte-identical output.
pub fn assemble(document: &NewsletterDocument) -> String {
    assemble_with_warnings(document).0
}

/// Like [`assemble`], also returning the image degradations that were
/// absorbed along the way so the caller can surface them.
pub fn assemble_with_warnings(document: &NewsletterDocument) -> (String, Vec<ImageWarning>) {
    let mut warnings = Vec::new();

    let mut parts = vec![
        "<!DOCTYPE html>".to_string(),
        "<html lang=\"en\">".to_string(),
        "<head>".to_string(),
        "<meta charset=\"UTF-8\">".to_string(),
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">".to_string(),
        format!("<title>{}</title>", escape_html(document.subject.as_ref())),
    ];
    if let Some(href) = document.font_family.stylesheet_href() {
        parts.push(format!("<link href=\"{href}\" rel=\"stylesheet\">"));
    }
    parts.push("</head>".to_string());

    parts.push(format!(
        "<body style=\"margin: 0; padding: 0; font-family: {}; background-color: #f4f4f4;\">",
        document.font_family.stack()
    ));
    // The outer shell exists so clients that ignore body width rules still
    // center and cap the content.
    parts.push(
        "<table role=\"presentation\" style=\"width: 100%; border-collapse: collapse; background-color: #f4f4f4;\">"
            .to_string(),
    );
    parts.push("<tr>".to_string());
    parts.push("<td align=\"center\" style=\"padding: 20px 0;\">".to_string());
    parts.push(format!(
        "<table role=\"presentation\" style=\"width: {}px; max-width: 100%; border-collapse: collapse; background-color: {}; margin: 0 auto;\">",
        document.max_width_px, document.background_color
    ));

    parts.push(render_header(
        &document.header,
        &document.subject,
        &mut warnings,
    ));
    for layer in document.ordered_layers() {
        parts.push(render_layer(layer, &document.text_color, &mut warnings));
    }
    parts.push(render_footer(&document.footer, &mut warnings));
    if let Some(subscription) = &document.subscription {
        let company = document
            .footer
            .company_name
            .as_ref()
            .map(|c| c.text.as_str());
        parts.push(render_subscription(subscription, company));
    }

    parts.extend(
        ["</table>", "</td>", "</tr>", "</table>", "</body>", "</html>"]
            .into_iter()
            .map(String::from),
    );

    (parts.join("\n"), warnings)
}
