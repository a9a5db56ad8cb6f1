use std::fmt;

/// One of two mutually-exclusive image origins. When both fields are somehow
/// populated, a non-blank URL takes precedence and the embedded bytes are
/// ignored; the resolution itself lives in `render::image`.
#[derive(Debug, Clone, Default)]
pub struct ImageSource {
    pub url: Option<String>,
    pub embedded: Option<EmbeddedImage>,
}

impl ImageSource {
    pub fn from_url(url: String) -> Self {
        Self {
            url: Some(url),
            embedded: None,
        }
    }

    pub fn from_bytes(bytes: Vec<u8>, mime_type: String) -> Self {
        Self {
            url: None,
            embedded: Some(EmbeddedImage { bytes, mime_type }),
        }
    }

    pub fn is_empty(&self) -> bool {
        let no_url = self.url.as_deref().is_none_or(|u| u.trim().is_empty());
        no_url && self.embedded.is_none()
    }
}

#[derive(Clone)]
pub struct EmbeddedImage {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

impl fmt::Debug for EmbeddedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmbeddedImage")
            .field("bytes", &format_args!("{} bytes", self.bytes.len()))
            .field("mime_type", &self.mime_type)
            .finish()
    }
}
