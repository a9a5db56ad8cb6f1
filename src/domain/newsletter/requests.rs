use base64::Engine;
use serde::{Deserialize, Serialize};

use super::{
    FontFamily, FooterAlignment, FooterConfig, FooterImage, HeaderConfig, ImageAlignment,
    ImagePlacement, ImageSource, Layer, LayerImage, NewsletterDocument, SocialConfig, SocialLink,
    SocialMode, StyledText, Subject, SubscriptionConfig, TextStyle,
};

/// Wire shape of a full generation request. This is also the record persisted
/// by the template store, so every field keeps a serde-friendly form (embedded
/// image bytes travel base64-encoded).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsletterDocumentData {
    pub subject: String,
    #[serde(default = "default_background_color")]
    pub background_color: String,
    #[serde(default = "default_text_color")]
    pub text_color: String,
    #[serde(default = "default_max_width")]
    pub max_width_px: u32,
    #[serde(default = "default_font_family")]
    pub font_family: String,
    #[serde(default)]
    pub header: HeaderData,
    #[serde(default)]
    pub layers: Vec<LayerData>,
    #[serde(default)]
    pub footer: FooterData,
    #[serde(default)]
    pub subscription: Option<SubscriptionData>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HeaderData {
    #[serde(default)]
    pub pre_header_text: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body_text: String,
    #[serde(default)]
    pub image: Option<ImageSourceData>,
    #[serde(default = "default_header_image_width")]
    pub image_width_px: u32,
    #[serde(default = "default_header_background")]
    pub background_color: String,
    #[serde(default)]
    pub title_style: Option<TextStyleData>,
    #[serde(default)]
    pub body_style: Option<TextStyleData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerData {
    pub order: i32,
    #[serde(default)]
    pub heading_h2: Option<StyledTextData>,
    #[serde(default)]
    pub heading_h3: Option<StyledTextData>,
    #[serde(default)]
    pub heading_h4: Option<StyledTextData>,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub image: Option<LayerImageData>,
    #[serde(default)]
    pub link_url: Option<String>,
    #[serde(default = "default_layer_padding")]
    pub padding_px: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerImageData {
    pub source: ImageSourceData,
    #[serde(default = "default_image_width")]
    pub width_px: u32,
    #[serde(default = "default_layer_alignment")]
    pub alignment: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FooterData {
    #[serde(default)]
    pub image: Option<FooterImageData>,
    #[serde(default = "default_footer_alignment")]
    pub alignment: String,
    #[serde(default)]
    pub company_name: Option<StyledTextData>,
    #[serde(default)]
    pub address: Option<StyledTextData>,
    #[serde(default)]
    pub directors: Option<StyledTextData>,
    #[serde(default)]
    pub social_label: Option<StyledTextData>,
    #[serde(default)]
    pub social_links: Vec<SocialLinkData>,
    #[serde(default)]
    pub social_mode: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FooterImageData {
    pub source: ImageSourceData,
    #[serde(default = "default_image_placement")]
    pub placement: String,
    #[serde(default)]
    pub link_url: Option<String>,
    #[serde(default = "default_image_width")]
    pub width_px: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLinkData {
    pub platform: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub icon: Option<ImageSourceData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionData {
    #[serde(default)]
    pub disclaimer_text: Option<String>,
    #[serde(default)]
    pub copyright_text: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default = "default_unsubscribe_url")]
    pub unsubscribe_url: String,
    #[serde(default = "default_view_online_url")]
    pub view_online_url: String,
    #[serde(default = "default_subscription_color")]
    pub text_color: String,
}

/// Both origins may be present on the wire; resolution precedence (URL wins
/// when non-blank) is applied at render time, not here.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ImageSourceData {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub data_base64: Option<String>,
    #[serde(default = "default_mime_type")]
    pub mime_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyledTextData {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub size_px: Option<u32>,
    #[serde(default)]
    pub bold: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextStyleData {
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub size_px: Option<u32>,
    #[serde(default)]
    pub bold: Option<bool>,
}

fn default_background_color() -> String {
    "#FFFFFF".to_string()
}
fn default_text_color() -> String {
    "#333333".to_string()
}
fn default_max_width() -> u32 {
    1000
}
fn default_font_family() -> String {
    "arial".to_string()
}
fn default_header_background() -> String {
    "#ffffff".to_string()
}
fn default_header_image_width() -> u32 {
    1000
}
fn default_layer_padding() -> u32 {
    30
}
fn default_image_width() -> u32 {
    300
}
fn default_layer_alignment() -> String {
    "left".to_string()
}
fn default_footer_alignment() -> String {
    "center".to_string()
}
fn default_image_placement() -> String {
    "above-text".to_string()
}
fn default_mime_type() -> String {
    "image/jpeg".to_string()
}
fn default_unsubscribe_url() -> String {
    "#UNSUBSCRIBE_LINK".to_string()
}
fn default_view_online_url() -> String {
    "#VIEW_ONLINE_LINK".to_string()
}
fn default_subscription_color() -> String {
    "#999999".to_string()
}

impl ImageSourceData {
    fn try_into_source(self) -> Result<Option<ImageSource>, String> {
        let embedded = match self.data_base64 {
            Some(payload) if !payload.trim().is_empty() => {
                let bytes = base64::engine::general_purpose::STANDARD
                    .decode(payload.trim())
                    .map_err(|_| {
                        "Invalid embedded image: payload is not valid base64.".to_string()
                    })?;
                Some(super::EmbeddedImage {
                    bytes,
                    mime_type: self.mime_type,
                })
            }
            _ => None,
        };

        let source = ImageSource {
            url: self.url,
            embedded,
        };
        if source.is_empty() {
            return Ok(None);
        }
        Ok(Some(source))
    }
}

impl StyledTextData {
    fn into_styled(self, defaults: &TextStyle) -> Option<StyledText> {
        if self.text.trim().is_empty() {
            return None;
        }
        Some(StyledText {
            text: self.text,
            style: TextStyle {
                color: self.color.unwrap_or_else(|| defaults.color.clone()),
                size_px: self.size_px.unwrap_or(defaults.size_px),
                bold: self.bold.unwrap_or(defaults.bold),
            },
        })
    }
}

fn resolve_style(data: Option<TextStyleData>, defaults: TextStyle) -> TextStyle {
    match data {
        Some(data) => TextStyle {
            color: data.color.unwrap_or(defaults.color),
            size_px: data.size_px.unwrap_or(defaults.size_px),
            bold: data.bold.unwrap_or(defaults.bold),
        },
        None => defaults,
    }
}

/// Default style each document region starts from; callers override per field.
fn style(color: &str, size_px: u32, bold: bool) -> TextStyle {
    TextStyle {
        color: color.to_string(),
        size_px,
        bold,
    }
}

impl TryFrom<HeaderData> for HeaderConfig {
    type Error = String;

    fn try_from(data: HeaderData) -> Result<Self, Self::Error> {
        Ok(HeaderConfig {
            pre_header_text: data.pre_header_text,
            title: data.title,
            body_text: data.body_text,
            image: data.image.map(|i| i.try_into_source()).transpose()?.flatten(),
            image_width_px: data.image_width_px,
            background_color: data.background_color,
            title_style: resolve_style(data.title_style, style("#333333", 28, true)),
            body_style: resolve_style(data.body_style, style("#333333", 16, false)),
        })
    }
}

impl TryFrom<LayerData> for Layer {
    type Error = String;

    fn try_from(data: LayerData) -> Result<Self, Self::Error> {
        let image = match data.image {
            Some(image_data) => {
                let alignment = ImageAlignment::parse(&image_data.alignment)?;
                image_data
                    .source
                    .try_into_source()?
                    .map(|source| LayerImage {
                        source,
                        width_px: image_data.width_px,
                        alignment,
                    })
            }
            None => None,
        };

        Ok(Layer {
            order: data.order,
            heading_h2: data
                .heading_h2
                .and_then(|h| h.into_styled(&style("#333333", 26, true))),
            heading_h3: data
                .heading_h3
                .and_then(|h| h.into_styled(&style("#333333", 18, false))),
            heading_h4: data
                .heading_h4
                .and_then(|h| h.into_styled(&style("#333333", 16, false))),
            body: data.body,
            image,
            link_url: data.link_url,
            padding_px: data.padding_px,
        })
    }
}

impl TryFrom<FooterData> for FooterConfig {
    type Error = String;

    fn try_from(data: FooterData) -> Result<Self, Self::Error> {
        let image = match data.image {
            Some(image_data) => {
                let placement = ImagePlacement::parse(&image_data.placement)?;
                image_data
                    .source
                    .try_into_source()?
                    .map(|source| FooterImage {
                        source,
                        placement,
                        link_url: image_data.link_url,
                        width_px: image_data.width_px,
                    })
            }
            None => None,
        };

        let mode_override = data
            .social_mode
            .as_deref()
            .map(SocialMode::parse)
            .transpose()?;

        let links = data
            .social_links
            .into_iter()
            .map(|link| {
                Ok(SocialLink {
                    platform: link.platform,
                    url: link.url,
                    icon: link.icon.map(|i| i.try_into_source()).transpose()?.flatten(),
                })
            })
            .collect::<Result<Vec<_>, String>>()?;

        Ok(FooterConfig {
            image,
            alignment: FooterAlignment::parse(&data.alignment)?,
            company_name: data
                .company_name
                .and_then(|t| t.into_styled(&style("#999999", 12, true))),
            address: data
                .address
                .and_then(|t| t.into_styled(&style("#999999", 12, false))),
            directors: data
                .directors
                .and_then(|t| t.into_styled(&style("#999999", 12, false))),
            social: SocialConfig {
                label: data
                    .social_label
                    .and_then(|t| t.into_styled(&style("#999999", 14, true))),
                links,
                mode_override,
            },
        })
    }
}

impl From<SubscriptionData> for SubscriptionConfig {
    fn from(data: SubscriptionData) -> Self {
        SubscriptionConfig {
            disclaimer_text: data.disclaimer_text,
            copyright_text: data.copyright_text,
            address: data.address,
            unsubscribe_url: data.unsubscribe_url,
            view_online_url: data.view_online_url,
            text_color: data.text_color,
        }
    }
}

impl TryFrom<NewsletterDocumentData> for NewsletterDocument {
    type Error = String;

    fn try_from(data: NewsletterDocumentData) -> Result<Self, Self::Error> {
        if !(300..=1200).contains(&data.max_width_px) {
            return Err(format!(
                "Invalid max width: {} is not between 300 and 1200 pixels.",
                data.max_width_px
            ));
        }

        let layers = data
            .layers
            .into_iter()
            .map(Layer::try_from)
            .collect::<Result<Vec<_>, String>>()?;

        NewsletterDocument::new(
            Subject::parse(data.subject)?,
            data.background_color,
            data.text_color,
            data.max_width_px,
            FontFamily::parse(&data.font_family)?,
            HeaderConfig::try_from(data.header)?,
            layers,
            FooterConfig::try_from(data.footer)?,
            data.subscription.map(SubscriptionConfig::from),
        )
    }
}
