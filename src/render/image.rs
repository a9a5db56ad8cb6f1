use crate::domain::{EmbeddedImage, ImageSource};
use base64::Engine;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat};
use std::fmt::Write as _;
use std::io::Cursor;

/// Visually lossless for typical photos while bounding output size.
const JPEG_QUALITY: u8 = 95;

#[derive(thiserror::Error, Debug)]
pub enum ImageProcessingError {
    #[error("Failed to decode embedded image bytes")]
    Decode(#[source] image::ImageError),
    #[error("Failed to re-encode embedded image")]
    Encode(#[source] image::ImageError),
}

/// One recovered image failure: the document still completed, this section
/// fell back to its no-image layout.
#[derive(Debug, Clone)]
pub struct ImageWarning {
    pub section: String,
    pub message: String,
}

impl ImageWarning {
    fn new(section: &str, error: &ImageProcessingError) -> Self {
        let mut message = error.to_string();
        let mut cause = std::error::Error::source(error);
        while let Some(c) = cause {
            let _ = write!(message, ": {c}");
            cause = c.source();
        }
        Self {
            section: section.to_string(),
            message,
        }
    }
}

impl std::fmt::Display for ImageWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.section, self.message)
    }
}

/// Resolve an image source to an embeddable `src` value.
///
/// A non-blank URL wins and passes through verbatim (no fetch, no
/// validation). Embedded bytes are re-encoded: PNG input stays PNG in an
/// alpha-capable pixel mode, everything else becomes an opaque JPEG. Neither
/// origin populated means no image.
pub fn resolve(source: &ImageSource) -> Result<Option<String>, ImageProcessingError> {
    if let Some(url) = source.url.as_deref() {
        let trimmed = url.trim();
        if !trimmed.is_empty() {
            return Ok(Some(trimmed.to_string()));
        }
    }

    match &source.embedded {
        Some(embedded) => encode_embedded(embedded).map(Some),
        None => Ok(None),
    }
}

/// Resolve, absorbing failures into the warning list so the section renders
/// its text-only branch instead of aborting the document.
pub(crate) fn resolve_or_warn(
    source: &ImageSource,
    section: &str,
    warnings: &mut Vec<ImageWarning>,
) -> Option<String> {
    match resolve(source) {
        Ok(src) => src,
        Err(error) => {
            tracing::warn!(
                error.cause_chain = ?error,
                section,
                "Falling back to the no-image layout"
            );
            warnings.push(ImageWarning::new(section, &error));
            None
        }
    }
}

fn encode_embedded(embedded: &EmbeddedImage) -> Result<String, ImageProcessingError> {
    let decoded =
        image::load_from_memory(&embedded.bytes).map_err(ImageProcessingError::Decode)?;

    let is_png = embedded.mime_type.eq_ignore_ascii_case("image/png")
        || matches!(image::guess_format(&embedded.bytes), Ok(ImageFormat::Png));

    let mut buffer = Cursor::new(Vec::new());
    let mime = if is_png {
        // Alpha-capable pixel mode first, so existing transparency survives
        // the re-encode.
        DynamicImage::ImageRgba8(decoded.to_rgba8())
            .write_to(&mut buffer, ImageFormat::Png)
            .map_err(ImageProcessingError::Encode)?;
        "image/png"
    } else {
        let opaque = DynamicImage::ImageRgb8(decoded.to_rgb8());
        let encoder = JpegEncoder::new_with_quality(&mut buffer, JPEG_QUALITY);
        opaque
            .write_with_encoder(encoder)
            .map_err(ImageProcessingError::Encode)?;
        "image/jpeg"
    };

    let payload = base64::engine::general_purpose::STANDARD.encode(buffer.get_ref());
    Ok(format!("data:{mime};base64,{payload}"))
}
