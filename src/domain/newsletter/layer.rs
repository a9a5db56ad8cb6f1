use super::{ImageSource, StyledText};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageAlignment {
    Left,
    Right,
}

impl ImageAlignment {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.trim().to_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            other => Err(format!(
                "Invalid image alignment: '{other}' must be 'left' or 'right'."
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LayerImage {
    pub source: ImageSource,
    pub width_px: u32,
    pub alignment: ImageAlignment,
}

/// One ordered content block of the newsletter body.
#[derive(Debug, Clone)]
pub struct Layer {
    /// Caller-assigned position. Uniqueness across the document is checked at
    /// construction of the document, not here.
    pub order: i32,
    pub heading_h2: Option<StyledText>,
    pub heading_h3: Option<StyledText>,
    pub heading_h4: Option<StyledText>,
    /// Plain text, or pre-sanitized inline HTML from a rich-text editor.
    pub body: String,
    pub image: Option<LayerImage>,
    /// When non-blank, image and text block are each wrapped in an anchor.
    pub link_url: Option<String>,
    pub padding_px: u32,
}
