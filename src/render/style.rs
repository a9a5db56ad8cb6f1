use crate::domain::TextStyle;

/// Resolve a declarative style record into one inline style attribute value.
/// `bold_weight` is the numeric weight for the element's semantic level (a
/// title sits heavier than a sub-heading); the caller supplies it, this
/// function only maps the flag. Color values pass through unvalidated.
pub fn inline_style(style: &TextStyle, bold_weight: u16, line_height: &str) -> String {
    let weight = if style.bold { bold_weight } else { 400 };
    format!(
        "color: {}; font-size: {}px; font-weight: {}; line-height: {};",
        style.color, style.size_px, weight, line_height
    )
}

#[cfg(test)]
mod tests {
    use super::inline_style;
    use crate::domain::TextStyle;

    fn style(color: &str, size_px: u32, bold: bool) -> TextStyle {
        TextStyle {
            color: color.to_string(),
            size_px,
            bold,
        }
    }

    #[test]
    fn bold_maps_to_the_caller_supplied_weight() {
        let attr = inline_style(&style("#111111", 26, true), 700, "1.2");
        assert_eq!(
            attr,
            "color: #111111; font-size: 26px; font-weight: 700; line-height: 1.2;"
        );
    }

    #[test]
    fn non_bold_always_maps_to_400() {
        let attr = inline_style(&style("#111111", 18, false), 600, "1.4");
        assert!(attr.contains("font-weight: 400;"));
    }

    #[test]
    fn invalid_colors_pass_through_unchanged() {
        let attr = inline_style(&style("not-a-color", 16, false), 700, "1.5");
        assert!(attr.contains("color: not-a-color;"));
    }
}
