use super::{ImageSource, TextStyle};

/// The fixed top region of the document. Row order is pre-header, image,
/// spacer, title, body; each optional row is driven by its field here.
#[derive(Debug, Clone)]
pub struct HeaderConfig {
    /// Hidden preview text. Only emitted when non-blank after trimming.
    pub pre_header_text: Option<String>,
    /// Falls back to the document subject when blank or absent.
    pub title: Option<String>,
    /// Plain text, or pre-sanitized inline HTML from a rich-text editor.
    pub body_text: String,
    pub image: Option<ImageSource>,
    pub image_width_px: u32,
    pub background_color: String,
    pub title_style: TextStyle,
    pub body_style: TextStyle,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            pre_header_text: None,
            title: None,
            body_text: String::new(),
            image: None,
            image_width_px: 1000,
            background_color: "#ffffff".to_string(),
            title_style: TextStyle {
                color: "#333333".to_string(),
                size_px: 28,
                bold: true,
            },
            body_style: TextStyle::default(),
        }
    }
}
