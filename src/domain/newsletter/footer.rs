use super::{ImageSource, StyledText};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterAlignment {
    Left,
    Center,
    Right,
}

impl FooterAlignment {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.trim().to_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "center" => Ok(Self::Center),
            "right" => Ok(Self::Right),
            other => Err(format!(
                "Invalid footer alignment: '{other}' must be 'left', 'center' or 'right'."
            )),
        }
    }

    pub fn as_attr(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

/// Placement of the footer image relative to the text blocks. The image always
/// precedes the social links either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImagePlacement {
    AboveText,
    AfterText,
}

impl ImagePlacement {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.trim().to_lowercase().as_str() {
            "above-text" => Ok(Self::AboveText),
            "after-text" => Ok(Self::AfterText),
            other => Err(format!(
                "Invalid image placement: '{other}' must be 'above-text' or 'after-text'."
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FooterImage {
    pub source: ImageSource,
    pub placement: ImagePlacement,
    pub link_url: Option<String>,
    pub width_px: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialMode {
    Urls,
    Icons,
}

impl SocialMode {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.trim().to_lowercase().as_str() {
            "urls" => Ok(Self::Urls),
            "icons" => Ok(Self::Icons),
            other => Err(format!(
                "Invalid social mode: '{other}' must be 'urls' or 'icons'."
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
    pub icon: Option<ImageSource>,
}

#[derive(Debug, Clone, Default)]
pub struct SocialConfig {
    pub label: Option<StyledText>,
    pub links: Vec<SocialLink>,
    /// Explicit override of the implicit mode choice.
    pub mode_override: Option<SocialMode>,
}

impl SocialConfig {
    /// Icon rendering is chosen implicitly by populated icon fields unless the
    /// caller overrides it.
    pub fn effective_mode(&self) -> SocialMode {
        if let Some(mode) = self.mode_override {
            return mode;
        }
        if self.links.iter().any(|link| link.icon.is_some()) {
            SocialMode::Icons
        } else {
            SocialMode::Urls
        }
    }
}

#[derive(Debug, Clone)]
pub struct FooterConfig {
    pub image: Option<FooterImage>,
    pub alignment: FooterAlignment,
    pub company_name: Option<StyledText>,
    pub address: Option<StyledText>,
    pub directors: Option<StyledText>,
    pub social: SocialConfig,
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            image: None,
            alignment: FooterAlignment::Center,
            company_name: None,
            address: None,
            directors: None,
            social: SocialConfig::default(),
        }
    }
}
