use super::image::{ImageWarning, resolve_or_warn};
use super::style::inline_style;
use super::text::{escape_html, image_tag, wrap_in_link};
use crate::domain::{FooterConfig, ImagePlacement, SocialConfig, SocialLink, SocialMode, StyledText};

const BLOCK_WEIGHT: u16 = 600;
const ICON_WIDTH_PX: u32 = 32;
const ICON_SPACER_PX: u32 = 12;

/// Render the footer region: separator, optionally the image above or after
/// the text blocks (always before social links), then the social section.
pub fn render_footer(footer: &FooterConfig, warnings: &mut Vec<ImageWarning>) -> String {
    let mut parts = vec![
        // Separator rule as a table row, for legacy-renderer compatibility
        "<tr>".to_string(),
        "<td style=\"padding: 20px 20px 10px 20px;\">".to_string(),
        "<table role=\"presentation\" style=\"width: 100%; border-collapse: collapse;\">"
            .to_string(),
        "<tr>".to_string(),
        "<td style=\"height: 1px; background-color: #e0e0e0; line-height: 1px; font-size: 1px;\">&nbsp;</td>"
            .to_string(),
        "</tr>".to_string(),
        "</table>".to_string(),
        "</td>".to_string(),
        "</tr>".to_string(),
        "<tr>".to_string(),
        format!(
            "<td align=\"{}\" style=\"padding: 10px 20px 30px 20px;\">",
            footer.alignment.as_attr()
        ),
    ];

    let image_block = footer.image.as_ref().and_then(|image| {
        resolve_or_warn(&image.source, "footer", warnings).map(|src| {
            let alt = footer
                .company_name
                .as_ref()
                .map(|c| c.text.as_str())
                .unwrap_or("Footer image");
            let tag = wrap_in_link(image_tag(&src, alt, image.width_px), image.link_url.as_deref());
            format!("<div style=\"margin: 0 0 15px 0;\">{tag}</div>")
        })
    });
    let placement = footer
        .image
        .as_ref()
        .map(|image| image.placement)
        .unwrap_or(ImagePlacement::AboveText);

    if placement == ImagePlacement::AboveText {
        if let Some(block) = &image_block {
            parts.push(block.clone());
        }
    }

    for block in [&footer.company_name, &footer.address, &footer.directors] {
        if let Some(html) = text_block(block) {
            parts.push(html);
        }
    }

    if placement == ImagePlacement::AfterText {
        if let Some(block) = &image_block {
            parts.push(block.clone());
        }
    }

    let social = render_social(&footer.social, warnings);
    if !social.is_empty() {
        parts.push(social);
    }

    parts.push("</td>".to_string());
    parts.push("</tr>".to_string());
    parts.join("\n")
}

fn text_block(block: &Option<StyledText>) -> Option<String> {
    let styled = block.as_ref()?;
    if styled.is_blank() {
        return None;
    }
    let text = escape_html(styled.text.trim()).replace('\n', "<br>");
    Some(format!(
        "<p style=\"{} margin: 0 0 5px 0;\">{text}</p>",
        inline_style(&styled.style, BLOCK_WEIGHT, "1.5")
    ))
}

fn render_social(social: &SocialConfig, warnings: &mut Vec<ImageWarning>) -> String {
    let links: Vec<&SocialLink> = social
        .links
        .iter()
        .filter(|link| !link.url.trim().is_empty())
        .collect();
    if links.is_empty() {
        return String::new();
    }

    let mut parts = Vec::new();
    if let Some(label) = &social.label {
        if !label.is_blank() {
            parts.push(format!(
                "<p style=\"{} margin: 20px 0 10px 0;\">{}</p>",
                inline_style(&label.style, BLOCK_WEIGHT, "1.4"),
                escape_html(label.text.trim())
            ));
        }
    }

    match social.effective_mode() {
        SocialMode::Urls => {
            let anchors: Vec<String> = links.iter().map(|link| plain_anchor(link)).collect();
            parts.push(format!(
                "<p style=\"margin: 10px 0 0 0;\">{}</p>",
                anchors.join(" &bull; ")
            ));
        }
        SocialMode::Icons => {
            let mut cells = Vec::new();
            for link in &links {
                let icon_src = link.icon.as_ref().and_then(|icon| {
                    resolve_or_warn(
                        icon,
                        &format!("social icon {}", link.platform),
                        warnings,
                    )
                });
                match icon_src {
                    Some(src) => cells.push(format!(
                        "<td width=\"{ICON_WIDTH_PX}\" style=\"width: {ICON_WIDTH_PX}px;\">{}</td>",
                        wrap_in_link(
                            image_tag(&src, &link.platform, ICON_WIDTH_PX),
                            Some(&link.url)
                        )
                    )),
                    // Entries without a usable icon degrade to their URL form.
                    None => cells.push(format!("<td>{}</td>", plain_anchor(link))),
                }
            }
            // Table-based spacing between icons, not CSS margins
            let spacer = format!(
                "<td width=\"{ICON_SPACER_PX}\" style=\"width: {ICON_SPACER_PX}px; font-size: 0; line-height: 0;\">&nbsp;</td>"
            );
            parts.push(format!(
                "<table role=\"presentation\" style=\"border-collapse: collapse; margin: 10px auto 0 auto;\"><tr>{}</tr></table>",
                cells.join(spacer.as_str())
            ));
        }
    }

    parts.join("\n")
}

fn plain_anchor(link: &SocialLink) -> String {
    format!(
        "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" style=\"color: inherit; text-decoration: underline;\">{}</a>",
        escape_html(link.url.trim()),
        escape_html(link.platform.trim())
    )
}
